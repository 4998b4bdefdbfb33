//! Due-date normalization.
//!
//! User-supplied date text is normalized once, at todo construction time,
//! into a `NaiveDate`. The raw input is never stored. Unparseable input is
//! treated as "no due date" rather than an error; this is a lenient
//! data-entry tool.

use chrono::{DateTime, NaiveDate};
use log::warn;

/// Normalize a user-supplied due-date string into a calendar date.
///
/// - Absent or blank input yields `None`.
/// - `YYYY-MM-DD` yields that date.
/// - A full ISO-8601 datetime (e.g. `2025-07-15T09:30:00Z`) yields its
///   date component.
/// - Anything else yields `None` after logging a warning.
///
/// Idempotent: a date formatted with `%Y-%m-%d` normalizes back to itself.
pub fn normalize_due_date(input: Option<&str>) -> Option<NaiveDate> {
    let raw = input?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    warn!("ignoring unparseable due date {:?}", raw);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_blank_input() {
        assert_eq!(normalize_due_date(None), None);
        assert_eq!(normalize_due_date(Some("")), None);
        assert_eq!(normalize_due_date(Some("   ")), None);
    }

    #[test]
    fn test_canonical_date() {
        let date = normalize_due_date(Some("2025-07-15"));
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 15));
    }

    #[test]
    fn test_datetime_input_keeps_date_component() {
        let date = normalize_due_date(Some("2025-07-15T09:30:00Z"));
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 15));
    }

    #[test]
    fn test_invalid_input_is_none_not_error() {
        assert_eq!(normalize_due_date(Some("not-a-date")), None);
        assert_eq!(normalize_due_date(Some("2025-13-40")), None);
        assert_eq!(normalize_due_date(Some("15/07/2025")), None);
    }

    #[test]
    fn test_idempotent_on_canonical_form() {
        let first = normalize_due_date(Some("2025-07-15")).unwrap();
        let canonical = first.format("%Y-%m-%d").to_string();
        let second = normalize_due_date(Some(&canonical)).unwrap();
        assert_eq!(first, second);
    }
}
