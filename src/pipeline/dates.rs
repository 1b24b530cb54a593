use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

/// Explicit formats tried first, in order. The first full-string parse wins
/// and no later pattern is consulted, which makes `03/04/2024` resolve as
/// March 4th: `%m/%d/%Y` precedes `%d/%m/%Y`. The ordering is part of the
/// output contract, not an implementation detail.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // YYYY-MM-DD
    "%m/%d/%Y", // MM/DD/YYYY
    "%d/%m/%Y", // DD/MM/YYYY
    "%Y/%m/%d", // YYYY/MM/DD
    "%m-%d-%Y", // MM-DD-YYYY
    "%d-%m-%Y", // DD-MM-YYYY
];

/// Permissive fallback patterns for values the strict list rejects.
/// Month-first variants stay ahead of day-first ones so ambiguous numeric
/// dates keep the same interpretation as the strict list.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%d/%m/%y",
    "%m-%d-%y",
    "%Y%m%d",
    "%Y.%m.%d",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d-%b-%Y",
    "%d %b %Y",
];

const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Coerce a raw cell to `YYYY-MM-DD`, or the empty string when the value is
/// missing or unparseable. A bad date never fails the row or the file.
pub fn parse_date(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return datetime.date().format("%Y-%m-%d").to_string();
        }
    }

    warn!("dates: failed to parse date: {}", value);
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_supported_formats_round_trip() {
        for input in [
            "2024-01-15",
            "01/15/2024",
            "15/01/2024",
            "2024/01/15",
            "01-15-2024",
            "15-01-2024",
        ] {
            assert_eq!(parse_date(input), "2024-01-15", "input: {input}");
        }
    }

    #[test]
    fn ambiguous_dates_resolve_month_first() {
        assert_eq!(parse_date("03/04/2024"), "2024-03-04");
        assert_eq!(parse_date("03-04-2024"), "2024-03-04");
    }

    #[test]
    fn day_first_is_used_when_month_first_cannot_parse() {
        // 25 is not a valid month, so the %d/%m pattern gets its turn.
        assert_eq!(parse_date("25/12/2024"), "2024-12-25");
    }

    #[test]
    fn empty_and_unparseable_yield_empty() {
        assert_eq!(parse_date(""), "");
        assert_eq!(parse_date("   "), "");
        assert_eq!(parse_date("not a date"), "");
        assert_eq!(parse_date("13/13/2024"), "");
    }

    #[test]
    fn fallback_handles_datetimes_and_textual_months() {
        assert_eq!(parse_date("2024-01-15 08:30:00"), "2024-01-15");
        assert_eq!(parse_date("Jan 15, 2024"), "2024-01-15");
        assert_eq!(parse_date("20240115"), "2024-01-15");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_date("  2024-01-15  "), "2024-01-15");
    }
}
