use super::cadence::Cadence;
use chrono::{Local, NaiveTime};
use serde::Serialize;

/// A recurring time-block definition ("permanent" block). Each applicable
/// day the reconciler materializes at most one Entry from it.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: i64,
    pub start_time: NaiveTime, // ⇔ templates.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,   // ⇔ templates.end_time (TEXT "HH:MM")
    pub task: String,
    pub color: String,    // ⇔ templates.color (TEXT, default '')
    pub location: String, // ⇔ templates.location (TEXT, default '')
    pub cadence: Cadence, // ⇔ templates.cadence ('daily'|'workday'|'weekend')
    pub created_at: String, // ⇔ templates.created_at (TEXT, ISO8601)
}

impl Template {
    /// High-level constructor for templates created from the CLI.
    /// - Sets `id = 0` (assigned by SQLite on insert)
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        task: &str,
        color: &str,
        location: &str,
        cadence: Cadence,
    ) -> Self {
        Self {
            id: 0,
            start_time,
            end_time,
            task: task.to_string(),
            color: color.to_string(),
            location: location.to_string(),
            cadence,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}
