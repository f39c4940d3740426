//! Entry store: reads filter soft-deleted rows, `soft_delete` flags a row
//! instead of removing it (so a later cloud sync cannot resurrect it), and
//! `hard_delete` removes it permanently.

use crate::errors::{AppError, AppResult};
use crate::models::cadence::Cadence;
use crate::models::completion::Completion;
use crate::models::entry::Entry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

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

    let completed_str: String = row.get("completed")?;
    let completed = Completion::from_db_str(&completed_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCompletion(completed_str.clone())),
        )
    })?;

    let cadence_str: Option<String> = row.get("cadence")?;
    let cadence = match cadence_str {
        Some(s) => Some(Cadence::from_db_str(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidCadence(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(Entry {
        id: row.get("id")?,
        date,
        start_time,
        end_time,
        task: row.get("task")?,
        completed,
        comment: row.get::<_, Option<String>>("comment")?.unwrap_or_default(),
        adjustment: row
            .get::<_, Option<String>>("adjustment")?
            .unwrap_or_default(),
        template_id: row.get("template_id")?,
        cadence,
        created_at: row.get("created_at")?,
    })
}

/// Load every live entry (soft-deleted rows filtered out at read time).
pub fn load_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM entries
         WHERE deleted = 0
         ORDER BY date ASC, start_time ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM entries
         WHERE deleted = 0 AND date = ?1
         ORDER BY start_time ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load a single live entry by id.
pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Entry> {
    let mut stmt = conn.prepare("SELECT * FROM entries WHERE id = ?1 AND deleted = 0")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::EntryNotFound(id))
}

/// Insert a new entry; returns the assigned row id.
pub fn insert_entry(conn: &Connection, e: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (date, start_time, end_time, task, completed, comment, adjustment, template_id, cadence, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            e.date_str(),
            e.start_str(),
            e.end_str(),
            e.task,
            e.completed.to_db_str(),
            e.comment,
            e.adjustment,
            e.template_id,
            e.cadence.map(|c| c.to_db_str()),
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id).
pub fn update_entry(conn: &Connection, e: &Entry) -> AppResult<()> {
    conn.execute(
        "UPDATE entries
         SET date = ?1, start_time = ?2, end_time = ?3,
             task = ?4, completed = ?5,
             comment = ?6, adjustment = ?7,
             template_id = ?8, cadence = ?9, created_at = ?10
         WHERE id = ?11",
        params![
            e.date_str(),
            e.start_str(),
            e.end_str(),
            e.task,
            e.completed.to_db_str(),
            e.comment,
            e.adjustment,
            e.template_id,
            e.cadence.map(|c| c.to_db_str()),
            e.created_at,
            e.id,
        ],
    )?;
    Ok(())
}

/// Soft delete: flag the row, keep it on disk.
pub fn soft_delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("UPDATE entries SET deleted = 1 WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

/// Hard delete: remove the row permanently.
pub fn hard_delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(())
}

/// Hard delete every entry referencing a template (cascade step).
/// Returns the ids of the removed rows so the caller can mirror the
/// deletions to the cloud collaborator.
pub fn hard_delete_entries_for_template(conn: &Connection, template_id: i64) -> AppResult<Vec<i64>> {
    let ids: Vec<i64> = {
        let mut stmt = conn.prepare("SELECT id FROM entries WHERE template_id = ?1")?;
        let rows = stmt.query_map([template_id], |row| row.get::<_, i64>(0))?;

        let mut v = Vec::new();
        for r in rows {
            v.push(r?);
        }
        v
    };

    conn.execute("DELETE FROM entries WHERE template_id = ?1", [template_id])?;

    Ok(ids)
}
