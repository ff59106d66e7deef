use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::error::{BikeshareError, Result};

/// Patterns tried in order when parsing a trip timestamp.
///
/// `%.f` also accepts an absent fractional part, so `2017-01-01 09:07:57`
/// and `2017-06-21 08:36:34.0` both match the first entry.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a `Start Time` / `End Time` cell into a naive date-time.
///
/// The datasets carry local wall-clock times with no offset, so no timezone
/// conversion is applied. A bare date is read as midnight.
pub fn parse_trip_timestamp(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();

    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    warn!("could not parse timestamp \"{}\"", s);
    Err(BikeshareError::TimestampParse(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_plain_timestamp() {
        let dt = parse_trip_timestamp("2017-01-01 09:07:57").unwrap();
        assert_eq!(dt.year(), 2017);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 7);
        assert_eq!(dt.second(), 57);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_trip_timestamp("2017-06-21 08:36:34.0").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.second(), 34);
    }

    #[test]
    fn test_parse_iso_t_separator() {
        let dt = parse_trip_timestamp("2017-03-05T17:00:00").unwrap();
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.hour(), 17);
    }

    #[test]
    fn test_parse_us_style() {
        let dt = parse_trip_timestamp("02/14/2017 18:30").unwrap();
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 14);
        assert_eq!(dt.hour(), 18);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = parse_trip_timestamp("2017-04-02").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert!(parse_trip_timestamp("  2017-01-01 00:00:01 ").is_ok());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        let err = parse_trip_timestamp("not a time").unwrap_err();
        assert!(matches!(err, BikeshareError::TimestampParse(ref s) if s == "not a time"));
        assert!(parse_trip_timestamp("").is_err());
    }
}
