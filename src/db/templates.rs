//! Template store. Same soft-delete discipline as the entry store; the
//! deletion cascade to entries lives in the service layer, not here.

use crate::errors::{AppError, AppResult};
use crate::models::cadence::Cadence;
use crate::models::template::Template;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Template> {
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(start_str.clone())),
        )
    })?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(end_str.clone())),
        )
    })?;

    let cadence_str: String = row.get("cadence")?;
    let cadence = Cadence::from_db_str(&cadence_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCadence(cadence_str.clone())),
        )
    })?;

    Ok(Template {
        id: row.get("id")?,
        start_time,
        end_time,
        task: row.get("task")?,
        color: row.get::<_, Option<String>>("color")?.unwrap_or_default(),
        location: row
            .get::<_, Option<String>>("location")?
            .unwrap_or_default(),
        cadence,
        created_at: row.get("created_at")?,
    })
}

/// Load every live template.
pub fn load_templates(conn: &Connection) -> AppResult<Vec<Template>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM templates
         WHERE deleted = 0
         ORDER BY start_time ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_template(conn: &Connection, id: i64) -> AppResult<Template> {
    let mut stmt = conn.prepare("SELECT * FROM templates WHERE id = ?1 AND deleted = 0")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::TemplateNotFound(id))
}

/// Insert a new template; returns the assigned row id.
pub fn insert_template(conn: &Connection, t: &Template) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO templates (start_time, end_time, task, color, location, cadence, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            t.start_str(),
            t.end_str(),
            t.task,
            t.color,
            t.location,
            t.cadence.to_db_str(),
            t.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Hard delete: remove the row permanently. Callers are responsible for
/// cascading to the entries that reference it.
pub fn hard_delete_template(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM templates WHERE id = ?1", [id])?;
    Ok(())
}
