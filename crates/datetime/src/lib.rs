//! Date and time helpers for paperkit
//!
//! Parsing of the common `yyyy-mm-dd` shapes, checked calendar
//! arithmetic, and pattern-based formatting.
//!
//! # Examples
//!
//! ```
//! use paperkit_datetime::{add_days, add_months, parse_datetime};
//!
//! let dt = parse_datetime("2024-01-31 09:30:00").unwrap();
//! let next_day = add_days(dt, 1).unwrap();
//! assert_eq!(next_day.to_string(), "2024-02-01 09:30:00");
//!
//! // Month arithmetic clamps to the end of the target month.
//! let next_month = add_months(dt, 1).unwrap();
//! assert_eq!(next_month.to_string(), "2024-02-29 09:30:00");
//! ```

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors that can occur during date operations
#[derive(Error, Debug)]
pub enum DatetimeError {
    #[error("Parse error: {0}")]
    Parse(#[from] chrono::ParseError),

    #[error("Date arithmetic out of range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, DatetimeError>;

/// Canonical date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical datetime format
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a `yyyy-mm-dd` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

/// Parse a `yyyy-mm-dd hh:mm:ss` datetime. A date without a time
/// component parses to midnight.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
        return Ok(datetime);
    }
    Ok(parse_date(value)?.and_time(NaiveTime::MIN))
}

/// Add seconds to a datetime. Negative amounts subtract.
pub fn add_seconds(datetime: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    shift(datetime, Duration::try_seconds(amount))
}

/// Add minutes to a datetime. Negative amounts subtract.
pub fn add_minutes(datetime: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    shift(datetime, Duration::try_minutes(amount))
}

/// Add hours to a datetime. Negative amounts subtract.
pub fn add_hours(datetime: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    shift(datetime, Duration::try_hours(amount))
}

/// Add days to a datetime. Negative amounts subtract.
pub fn add_days(datetime: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    shift(datetime, Duration::try_days(amount))
}

fn shift(datetime: NaiveDateTime, duration: Option<Duration>) -> Result<NaiveDateTime> {
    duration
        .and_then(|d| datetime.checked_add_signed(d))
        .ok_or(DatetimeError::OutOfRange)
}

/// Add calendar months to a datetime. Negative amounts subtract. Days
/// past the end of the target month clamp to its last day.
pub fn add_months(datetime: NaiveDateTime, amount: i32) -> Result<NaiveDateTime> {
    let months = Months::new(amount.unsigned_abs());
    let shifted = if amount >= 0 {
        datetime.checked_add_months(months)
    } else {
        datetime.checked_sub_months(months)
    };
    shifted.ok_or(DatetimeError::OutOfRange)
}

/// Add calendar years to a datetime. Negative amounts subtract.
pub fn add_years(datetime: NaiveDateTime, amount: i32) -> Result<NaiveDateTime> {
    let months = amount.checked_mul(12).ok_or(DatetimeError::OutOfRange)?;
    add_months(datetime, months)
}

/// Day of the week as a number, 1 = Sunday through 7 = Saturday.
#[must_use]
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_sunday()
}

/// Current year in local time
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Current month in local time, 1 through 12
#[must_use]
pub fn current_month() -> u32 {
    Local::now().month()
}

/// Format a datetime according to a pattern.
pub fn format_datetime(datetime: NaiveDateTime, pattern: &str) -> String {
    // Common date format aliases
    match pattern {
        "mm/dd/yyyy" => datetime.format("%m/%d/%Y").to_string(),
        "dd/mm/yyyy" => datetime.format("%d/%m/%Y").to_string(),
        "yyyy-mm-dd" => datetime.format("%Y-%m-%d").to_string(),
        "mmm dd, yyyy" => datetime.format("%b %d, %Y").to_string(),
        _ => datetime.format(pattern).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(value: &str) -> NaiveDateTime {
        parse_datetime(value).unwrap()
    }

    #[test]
    fn test_parse_datetime_with_and_without_time() {
        assert_eq!(
            dt("2023-06-15 08:45:30").to_string(),
            "2023-06-15 08:45:30"
        );
        assert_eq!(dt("2023-06-15").to_string(), "2023-06-15 00:00:00");
        assert!(parse_datetime("15/06/2023").is_err());
    }

    #[test]
    fn test_add_seconds_minutes_hours() {
        let start = dt("2023-12-31 23:59:58");
        assert_eq!(
            add_seconds(start, 3).unwrap().to_string(),
            "2024-01-01 00:00:01"
        );
        assert_eq!(
            add_minutes(start, -59).unwrap().to_string(),
            "2023-12-31 23:00:58"
        );
        assert_eq!(
            add_hours(start, 2).unwrap().to_string(),
            "2024-01-01 01:59:58"
        );
    }

    #[test]
    fn test_add_days_crosses_month() {
        let start = dt("2024-02-28 12:00:00");
        assert_eq!(add_days(start, 2).unwrap().to_string(), "2024-03-01 12:00:00");
        assert_eq!(
            add_days(start, -28).unwrap().to_string(),
            "2024-01-31 12:00:00"
        );
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let start = dt("2024-01-31 10:00:00");
        assert_eq!(
            add_months(start, 1).unwrap().to_string(),
            "2024-02-29 10:00:00"
        );
        assert_eq!(
            add_months(start, -2).unwrap().to_string(),
            "2023-11-30 10:00:00"
        );
    }

    #[test]
    fn test_add_years() {
        let leap_day = dt("2024-02-29 06:00:00");
        assert_eq!(
            add_years(leap_day, 1).unwrap().to_string(),
            "2025-02-28 06:00:00"
        );
        assert_eq!(
            add_years(leap_day, -4).unwrap().to_string(),
            "2020-02-29 06:00:00"
        );
    }

    #[test]
    fn test_arithmetic_out_of_range() {
        let max = NaiveDateTime::MAX;
        assert!(matches!(add_days(max, 2), Err(DatetimeError::OutOfRange)));
        assert!(matches!(
            add_years(max, i32::MAX),
            Err(DatetimeError::OutOfRange)
        ));
    }

    #[test]
    fn test_weekday_number() {
        // 2024-01-07 was a Sunday.
        assert_eq!(weekday_number(dt("2024-01-07").date()), 1);
        assert_eq!(weekday_number(dt("2024-01-08").date()), 2);
        assert_eq!(weekday_number(dt("2024-01-13").date()), 7);
    }

    #[test]
    fn test_format_aliases() {
        let datetime = dt("2023-06-05 14:30:00");
        assert_eq!(format_datetime(datetime, "mm/dd/yyyy"), "06/05/2023");
        assert_eq!(format_datetime(datetime, "dd/mm/yyyy"), "05/06/2023");
        assert_eq!(format_datetime(datetime, "yyyy-mm-dd"), "2023-06-05");
        assert_eq!(format_datetime(datetime, "mmm dd, yyyy"), "Jun 05, 2023");
        assert_eq!(
            format_datetime(datetime, "%H:%M on %A"),
            "14:30 on Monday"
        );
    }
}
