//! Schedule Formatting
//!
//! Schedules travel as ISO-8601 strings. The client writes the
//! `datetime-local` form (`YYYY-MM-DDTHH:MM`, local time, no offset) but
//! accepts anything with seconds or an explicit offset when reading.

use chrono::{DateTime, Local, NaiveDateTime};

/// `<input type="datetime-local">` value format
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Badge text format
pub const BADGE_FORMAT: &str = "%Y-%m-%d %H:%M";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored schedule into local wall-clock time
pub fn parse_schedule(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Text of the schedule badge; unparseable values are shown as stored
pub fn format_badge(raw: &str) -> String {
    match parse_schedule(raw) {
        Some(dt) => dt.format(BADGE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Initial value of the dialog's picker: the current schedule, else `now`
pub fn input_value(schedule: Option<&str>, now: NaiveDateTime) -> String {
    schedule
        .and_then(parse_schedule)
        .unwrap_or(now)
        .format(INPUT_FORMAT)
        .to_string()
}

/// Validate a picker value before sending it; blank or malformed is `None`
pub fn normalize_input(value: &str) -> Option<String> {
    parse_schedule(value).map(|dt| dt.format(INPUT_FORMAT).to_string())
}

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Open schedule dialog: which todo it edits and the picker's current value
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleDraft {
    pub todo_id: i64,
    pub title: String,
    pub value: String,
}

impl ScheduleDraft {
    pub fn new(todo_id: i64, title: String, schedule: Option<&str>, now: NaiveDateTime) -> Self {
        Self { todo_id, title, value: input_value(schedule, now) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn test_parse_datetime_local() {
        assert_eq!(parse_schedule("2024-05-01T14:30"), Some(at(2024, 5, 1, 14, 30)));
        assert_eq!(parse_schedule("2024-05-01T14:30:00"), Some(at(2024, 5, 1, 14, 30)));
        assert_eq!(parse_schedule("2024-05-01 14:30"), Some(at(2024, 5, 1, 14, 30)));
    }

    #[test]
    fn test_parse_with_offset() {
        let expected = DateTime::parse_from_rfc3339("2024-05-01T14:30:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_schedule("2024-05-01T14:30:00Z"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_schedule(""), None);
        assert_eq!(parse_schedule("tomorrow"), None);
    }

    #[test]
    fn test_badge() {
        assert_eq!(format_badge("2024-05-01T09:05"), "2024-05-01 09:05");
        assert_eq!(format_badge("someday"), "someday");
    }

    #[test]
    fn test_input_value_prefers_schedule() {
        let now = at(2030, 1, 1, 8, 0);
        assert_eq!(input_value(Some("2024-05-01T14:30:59"), now), "2024-05-01T14:30");
        assert_eq!(input_value(None, now), "2030-01-01T08:00");
        assert_eq!(input_value(Some("bogus"), now), "2030-01-01T08:00");
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("2024-05-01T14:30"), Some("2024-05-01T14:30".to_string()));
        assert_eq!(normalize_input("  "), None);
    }

    #[test]
    fn test_draft_prefills() {
        let draft = ScheduleDraft::new(7, "Dentist".into(), None, at(2025, 3, 2, 10, 15));
        assert_eq!(draft.todo_id, 7);
        assert_eq!(draft.value, "2025-03-02T10:15");
    }
}
