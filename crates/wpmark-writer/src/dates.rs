//! Date parsing and formatting

use chrono::NaiveDateTime;
use std::fmt::Write;
use tracing::debug;

/// Parse a date string with a strftime pattern
///
/// Returns `None` (and logs at debug level) when the string does not match,
/// which includes WordPress' `0000-00-00 00:00:00` placeholder for drafts.
pub fn parse_date(value: &str, pattern: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(value.trim(), pattern) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!("Error parsing date string '{}' ({}). Using default value.", value, e);
            None
        }
    }
}

/// Parse a date string, falling back to `default` on failure
pub fn parse_date_or(value: Option<&str>, pattern: &str, default: NaiveDateTime) -> NaiveDateTime {
    value.and_then(|v| parse_date(v, pattern)).unwrap_or(default)
}

/// Format a date with a strftime pattern
///
/// Patterns a naive date cannot render (offsets and zone names such as
/// `%z` or `%Z`) yield an empty string.
pub fn format_date(date: &NaiveDateTime, pattern: &str) -> String {
    try_format_date(date, pattern).unwrap_or_else(|| {
        debug!("Date pattern '{}' cannot format {}", pattern, date);
        String::new()
    })
}

/// Format a date, or `None` when the pattern is invalid or needs a time zone
pub fn try_format_date(date: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_parse_item_date() {
        let date = parse_date("2012-05-06 07:08:09", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2012, 5, 6));
        assert_eq!(date.hour(), 7);
    }

    #[test]
    fn test_parse_pub_date() {
        let date = parse_date("Sat, 12 Jan 2013 10:20:30 +0000", "%a, %d %b %Y %H:%M:%S +0000").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2013, 1, 12));
    }

    #[test]
    fn test_zero_date_is_rejected() {
        assert!(parse_date("0000-00-00 00:00:00", "%Y-%m-%d %H:%M:%S").is_none());
        assert!(parse_date("", "%Y-%m-%d %H:%M:%S").is_none());
    }

    #[test]
    fn test_fallback() {
        let default = NaiveDate::from_ymd_opt(2000, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(parse_date_or(Some("garbage"), "%Y", default), default);
        assert_eq!(parse_date_or(None, "%Y", default), default);
    }

    #[test]
    fn test_format() {
        let date = parse_date("2012-05-06 07:08:09", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_date(&date, "%Y%m%d"), "20120506");
    }

    #[test]
    fn test_zone_patterns_do_not_panic() {
        let date = parse_date("2012-05-06 07:08:09 +0000", "%Y-%m-%d %H:%M:%S %z").unwrap();
        assert_eq!(format_date(&date, "%Y-%m-%d %H:%M:%S %z"), "");
        assert_eq!(format_date(&date, "%Y%m%d%Z"), "");
        assert!(try_format_date(&date, "%:z").is_none());
        assert_eq!(try_format_date(&date, "%Y").as_deref(), Some("2012"));
    }
}
