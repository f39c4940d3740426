use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema version this build expects.
const SCHEMA_VERSION: i32 = 2;

/// Ensure the `schema_version` bookkeeping table exists.
fn ensure_version_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// Highest version recorded so far; 0 for a fresh or pre-versioning database.
fn current_version(conn: &Connection) -> Result<i32> {
    let v: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })?;
    Ok(v.unwrap_or(0))
}

fn set_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check whether a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `entries` table with the modern schema (including `cadence`).
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            task         TEXT NOT NULL,
            completed    TEXT NOT NULL DEFAULT 'no' CHECK(completed IN ('yes','no','partial')),
            comment      TEXT DEFAULT '',
            adjustment   TEXT DEFAULT '',
            template_id  INTEGER,
            cadence      TEXT CHECK(cadence IN ('daily','workday','weekend') OR cadence IS NULL),
            deleted      INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date, start_time);
        CREATE INDEX IF NOT EXISTS idx_entries_template ON entries(template_id);
        "#,
    )?;
    Ok(())
}

/// Create the `templates` table.
fn create_templates_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS templates (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time   TEXT NOT NULL,
            end_time     TEXT NOT NULL,
            task         TEXT NOT NULL,
            color        TEXT DEFAULT '',
            location     TEXT DEFAULT '',
            cadence      TEXT NOT NULL CHECK(cadence IN ('daily','workday','weekend')),
            deleted      INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Migrate an old `entries` table (pre-0.3) to include the `cadence` column.
/// Must run after `create_templates_table`: the backfill joins against it.
fn migrate_add_cadence_to_entries(conn: &Connection) -> Result<()> {
    if has_column(conn, "entries", "cadence")? {
        return Ok(()); // already present
    }

    warning("Adding 'cadence' column to entries table...");

    conn.execute_batch(
        r#"
        ALTER TABLE entries ADD COLUMN cadence TEXT
            CHECK(cadence IN ('daily','workday','weekend') OR cadence IS NULL);

        UPDATE entries
            SET cadence = (SELECT t.cadence FROM templates t WHERE t.id = entries.template_id)
        WHERE template_id IS NOT NULL;
        "#,
    )?;

    success("'cadence' column added.");
    Ok(())
}

/// Run all pending migrations, stamping each applied step into
/// `schema_version`. Every step is additionally idempotent, so a legacy
/// database that predates the version table (version reads as 0) passes
/// through the full chain unharmed.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_version_table(conn)?;
    let from = current_version(conn)?;

    // v1: base schema (log, entries, templates)
    if from < 1 {
        ensure_log_table(conn)?;
        create_entries_table(conn)?;
        create_templates_table(conn)?;
        set_version(conn, 1)?;
    }

    // v2: cadence column on entries, backfilled from templates
    if from < 2 {
        migrate_add_cadence_to_entries(conn)?;
        set_version(conn, 2)?;
    }

    Ok(())
}
