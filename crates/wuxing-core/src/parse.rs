//! Input parsing for birth moments.
//!
//! Birth moments are naive wall-clock timestamps. Accepted inputs:
//! - `2024-01-01T20:00:00`, `2024-01-01 20:00:00` (seconds optional)
//! - RFC3339 with an offset (`2024-01-01T20:00:00+08:00`); the offset is
//!   dropped and the local wall-clock part is kept
//! - a separate date (`2024-01-01`) and time (`20:00`) via [`combine_date_time`]

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, WuxingError};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a birth moment string.
///
/// # Examples
///
/// ```
/// use wuxing_core::parse::parse_birth_moment;
///
/// let ts = parse_birth_moment("2024-01-01T20:00").unwrap();
/// assert_eq!(ts.to_string(), "2024-01-01 20:00:00");
/// ```
pub fn parse_birth_moment(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local())
        .map_err(|_| {
            WuxingError::ParseError(format!(
                "Invalid birth moment '{}'. Expected: YYYY-MM-DDTHH:MM[:SS]",
                input
            ))
        })
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        WuxingError::ParseError(format!(
            "Invalid date '{}'. Expected: YYYY-MM-DD ({})",
            input, e
        ))
    })
}

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| {
            WuxingError::ParseError(format!(
                "Invalid time '{}'. Expected: HH:MM[:SS] ({})",
                input, e
            ))
        })
}

/// Combine a separately entered date and time into a birth moment.
pub fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_t_separator() {
        let ts = parse_birth_moment("2024-01-01T20:00:00").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 20);
    }

    #[test]
    fn parse_space_separator_without_seconds() {
        let ts = parse_birth_moment("2023-03-07 14:30").unwrap();
        assert_eq!(ts.day(), 7);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn parse_rfc3339_keeps_wall_clock() {
        let ts = parse_birth_moment("2024-01-01T20:00:00+08:00").unwrap();
        assert_eq!(ts.hour(), 20);
        assert_eq!(ts.day(), 1);
    }

    #[test]
    fn parse_invalid_birth_moment() {
        let result = parse_birth_moment("yesterday");
        assert!(matches!(result, Err(WuxingError::ParseError(_))));
    }

    #[test]
    fn combine_form_fields() {
        let ts = combine_date_time("2024-05-15", "10:45").unwrap();
        assert_eq!(ts.to_string(), "2024-05-15 10:45:00");
    }

    #[test]
    fn combine_rejects_bad_date() {
        assert!(combine_date_time("2024-02-30", "10:00").is_err());
        assert!(combine_date_time("2024-02-10", "25:00").is_err());
    }
}
