use super::{cadence::Cadence, completion::Completion, template::Template};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// A concrete, date-bound time block. An entry carrying a `template_id` is
/// logically owned by its template and regenerates fresh each applicable
/// day; an orphaned entry belongs to the date it was created on and gets
/// forward-moved by the reconciler while incomplete.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,          // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,    // ⇔ entries.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,      // ⇔ entries.end_time (TEXT "HH:MM")
    pub task: String,
    pub completed: Completion,    // ⇔ entries.completed ('yes'|'no'|'partial')
    pub comment: String,          // ⇔ entries.comment (TEXT, default '')
    pub adjustment: String,       // ⇔ entries.adjustment (TEXT, default '')
    pub template_id: Option<i64>, // ⇔ entries.template_id (INT, NULL when standalone)
    pub cadence: Option<Cadence>, // ⇔ entries.cadence (copied from the template)
    pub created_at: String,       // ⇔ entries.created_at (TEXT, ISO8601)
}

impl Entry {
    /// High-level constructor for standalone entries created from the CLI.
    /// - Sets `id = 0` (assigned by SQLite on insert)
    /// - Sets `completed = 'no'`, empty adjustment, no template link
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        task: &str,
        comment: &str,
    ) -> Self {
        Self {
            id: 0,
            date,
            start_time,
            end_time,
            task: task.to_string(),
            completed: Completion::No,
            comment: comment.to_string(),
            adjustment: String::new(),
            template_id: None,
            cadence: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Materialize a fresh entry from a template for the given day.
    pub fn from_template(tpl: &Template, date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            start_time: tpl.start_time,
            end_time: tpl.end_time,
            task: tpl.task.clone(),
            completed: Completion::No,
            comment: String::new(),
            adjustment: String::new(),
            template_id: Some(tpl.id),
            cadence: Some(tpl.cadence),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.template_id.is_some()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    pub fn span_str(&self) -> String {
        format!("{}-{}", self.start_str(), self.end_str())
    }

    /// Composite-key match against a template, used as the fallback dedup
    /// check when an entry lost its `template_id` linkage.
    pub fn matches_shape(&self, tpl: &Template) -> bool {
        self.start_time == tpl.start_time
            && self.end_time == tpl.end_time
            && self.task == tpl.task
    }
}
