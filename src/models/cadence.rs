use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use serde::Serialize;

/// Recurrence cadence of a permanent time block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cadence {
    Daily,
    Workday,
    Weekend,
}

impl Cadence {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Workday => "workday",
            Cadence::Weekend => "weekend",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Cadence::Daily),
            "workday" => Some(Cadence::Workday),
            "weekend" => Some(Cadence::Weekend),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        Cadence::from_db_str(&code.to_lowercase())
    }

    /// Whether a template with this cadence should materialize an entry
    /// on the given calendar day.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        match self {
            Cadence::Daily => true,
            Cadence::Workday => !is_weekend(date),
            Cadence::Weekend => is_weekend(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn daily_applies_every_day() {
        assert!(Cadence::Daily.applies_on(d("2025-09-01"))); // Monday
        assert!(Cadence::Daily.applies_on(d("2025-09-06"))); // Saturday
    }

    #[test]
    fn workday_skips_weekend() {
        assert!(Cadence::Workday.applies_on(d("2025-09-02"))); // Tuesday
        assert!(Cadence::Workday.applies_on(d("2025-09-05"))); // Friday
        assert!(!Cadence::Workday.applies_on(d("2025-09-06"))); // Saturday
        assert!(!Cadence::Workday.applies_on(d("2025-09-07"))); // Sunday
    }

    #[test]
    fn weekend_only_on_weekend() {
        assert!(!Cadence::Weekend.applies_on(d("2025-09-03"))); // Wednesday
        assert!(Cadence::Weekend.applies_on(d("2025-09-06"))); // Saturday
        assert!(Cadence::Weekend.applies_on(d("2025-09-07"))); // Sunday
    }

    #[test]
    fn db_round_trip() {
        assert_eq!(Cadence::from_db_str("workday"), Some(Cadence::Workday));
        assert_eq!(Cadence::from_code("DAILY"), Some(Cadence::Daily));
        assert_eq!(Cadence::from_db_str("monthly"), None);
    }
}
