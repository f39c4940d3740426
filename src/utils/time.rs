//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn parse_required_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_hhmm() {
        assert!(parse_time("08:30").is_some());
        assert!(parse_time("8h30").is_none());
    }

    #[test]
    fn minutes_and_formatting() {
        let a = parse_time("08:00").unwrap();
        let b = parse_time("09:45").unwrap();
        assert_eq!(minutes_between(a, b), 105);
        assert_eq!(format_minutes(105), "01:45");
        assert_eq!(format_minutes(-30), "-00:30");
    }
}
