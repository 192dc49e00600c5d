use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Wire and form-input format for calendar dates.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short US-locale format used when listing records.
pub const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Today's calendar date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a calendar date from raw input.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive ISO date-time;
/// only the calendar-date part is kept. Returns `None` for anything else.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
}

/// Formats a date the way a date input holds it (`YYYY-MM-DD`).
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Formats a date for list display (`M/D/YYYY`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_calendar_date("2024-01-01"), Some(date(2024, 1, 1)));
        assert_eq!(parse_calendar_date(" 2024-02-29 "), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_datetime_keeps_date_part() {
        assert_eq!(
            parse_calendar_date("2024-03-15T00:00:00"),
            Some(date(2024, 3, 15))
        );
        assert_eq!(
            parse_calendar_date("2024-03-15T10:30:00.000Z"),
            Some(date(2024, 3, 15))
        );
        assert_eq!(
            parse_calendar_date("2024-03-15 08:00:00"),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("2023-02-29"), None);
        assert_eq!(parse_calendar_date("2024-13-01"), None);
    }

    #[test]
    fn test_formats() {
        assert_eq!(format_input_date(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_display_date(date(2024, 1, 5)), "1/5/2024");
        assert_eq!(format_display_date(date(2023, 12, 31)), "12/31/2023");
    }
}
