use serde::Serialize;

/// Completion status of an entry. `Partial` marks a block the user started
/// but did not finish; only `Yes` exempts an overdue entry from auto-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Completion {
    Yes,
    No,
    Partial,
}

impl Completion {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Completion::Yes => "yes",
            Completion::No => "no",
            Completion::Partial => "partial",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(Completion::Yes),
            "no" => Some(Completion::No),
            "partial" => Some(Completion::Partial),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Completion::Yes)
    }
}
