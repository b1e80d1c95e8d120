use chrono::{Days, Local, NaiveDate, NaiveDateTime};

use crate::constants::{
    DAY_FIRST_DATETIME_FORMAT, DAY_FIRST_DATETIME_SHORT_FORMAT, DAY_FIRST_DATE_FORMAT,
    DEFAULT_RANGE_DAYS, EXPORT_TIMESTAMP_FORMAT,
};
use crate::errors::{Error, Result, ValidationError};

/// Returns the initial filter range: exactly 30 calendar days back from
/// `today` through `today`, both inclusive.
pub fn default_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_days(Days::new(DEFAULT_RANGE_DAYS))
        .unwrap_or(NaiveDate::MIN);
    (start, today)
}

/// The local calendar date, used to seed the default range.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `DD-MM-YYYY` date. `/` and `.` separators are accepted too.
/// The year must have exactly four digits.
pub fn parse_day_first_date(value: &str) -> Result<NaiveDate> {
    let invalid = || {
        Error::from(ValidationError::InvalidDate {
            value: value.to_string(),
            expected: "DD-MM-YYYY",
        })
    };
    let normalized = normalize_separators(value.trim());
    if !is_four_digit_year(normalized.rsplit('-').next()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(&normalized, DAY_FIRST_DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a day-first date-time with or without seconds. A bare date is
/// read as midnight.
pub fn parse_day_first_datetime(value: &str) -> Result<NaiveDateTime> {
    let invalid = || {
        Error::from(ValidationError::InvalidDate {
            value: value.to_string(),
            expected: "DD-MM-YYYY HH:MM[:SS]",
        })
    };
    let normalized = normalize_separators(value.trim());
    let date_part = normalized.split_whitespace().next().unwrap_or_default();
    if !is_four_digit_year(date_part.rsplit('-').next()) {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(&normalized, DAY_FIRST_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, DAY_FIRST_DATETIME_SHORT_FORMAT))
        .or_else(|_| {
            NaiveDate::parse_from_str(&normalized, DAY_FIRST_DATE_FORMAT)
                .map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .map_err(|_| invalid())
}

/// Day-first parse with an ISO `YYYY-MM-DD` fallback, for data files.
pub fn parse_record_date(value: &str) -> Result<NaiveDate> {
    parse_day_first_date(value).or_else(|err| {
        let trimmed = value.trim();
        if !is_four_digit_year(trimmed.split('-').next()) {
            return Err(err);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| err)
    })
}

/// Day-first parse with an ISO `YYYY-MM-DD HH:MM:SS` / `T` fallback, for data files.
pub fn parse_record_datetime(value: &str) -> Result<NaiveDateTime> {
    parse_day_first_datetime(value).or_else(|err| {
        let trimmed = value.trim();
        if !is_four_digit_year(trimmed.split('-').next()) {
            return Err(err);
        }
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|_| err)
    })
}

pub fn format_day_first_date(date: NaiveDate) -> String {
    date.format(DAY_FIRST_DATE_FORMAT).to_string()
}

pub fn format_day_first_datetime(value: NaiveDateTime) -> String {
    value.format(DAY_FIRST_DATETIME_FORMAT).to_string()
}

/// `YYYYMMDD_HHMMSS`, as embedded in export file names.
pub fn export_timestamp(now: NaiveDateTime) -> String {
    now.format(EXPORT_TIMESTAMP_FORMAT).to_string()
}

fn normalize_separators(value: &str) -> String {
    value.replace(['/', '.'], "-")
}

/// chrono's `%Y` takes any digit count, so `26` would read as year 26.
fn is_four_digit_year(segment: Option<&str>) -> bool {
    segment.is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_thirty_days_not_one_month() {
        assert_eq!(
            default_date_range(date(2026, 1, 20)),
            (date(2025, 12, 21), date(2026, 1, 20))
        );
        // A calendar month back would give 2026-02-01
        assert_eq!(default_date_range(date(2026, 3, 1)).0, date(2026, 1, 30));
    }

    #[test]
    fn test_parse_day_first_date() {
        assert_eq!(parse_day_first_date("12-01-2026").unwrap(), date(2026, 1, 12));
        assert_eq!(parse_day_first_date(" 03/02/2026 ").unwrap(), date(2026, 2, 3));
        assert!(parse_day_first_date("2026-01-12").is_err());
        assert!(parse_day_first_date("31-02-2026").is_err());
        assert!(parse_day_first_date("01-01-26").is_err());
        assert!(parse_day_first_date("01/01/026").is_err());
        assert!(parse_day_first_date("01-01-02026").is_err());
    }

    #[test]
    fn test_two_digit_years_are_rejected_everywhere() {
        assert!(parse_day_first_datetime("20-01-26 14:30").is_err());
        assert!(parse_day_first_datetime("20-01-26").is_err());
        assert!(parse_record_date("01-01-26").is_err());
        assert!(parse_record_date("26-01-01").is_err());
        assert!(parse_record_datetime("26-01-15T08:05:09").is_err());
    }

    #[test]
    fn test_parse_day_first_datetime_variants() {
        let expected = date(2026, 1, 20).and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(parse_day_first_datetime("20-01-2026 14:30").unwrap(), expected);
        assert_eq!(
            parse_day_first_datetime("20-01-2026 14:30:00").unwrap(),
            expected
        );
        assert_eq!(
            parse_day_first_datetime("20-01-2026").unwrap(),
            date(2026, 1, 20).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_record_date_accepts_iso_fallback() {
        assert_eq!(parse_record_date("2026-01-15").unwrap(), date(2026, 1, 15));
        assert_eq!(parse_record_date("15-01-2026").unwrap(), date(2026, 1, 15));
        assert_eq!(
            parse_record_datetime("2026-01-15T08:05:09").unwrap(),
            date(2026, 1, 15).and_hms_opt(8, 5, 9).unwrap()
        );
    }

    #[test]
    fn test_export_timestamp_format() {
        let now = date(2026, 1, 20).and_hms_opt(9, 5, 7).unwrap();
        assert_eq!(export_timestamp(now), "20260120_090507");
    }
}
