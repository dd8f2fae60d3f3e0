use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::Error;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M",
];
/// Offset forms RFC 3339 rejects, such as `+0100`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Parses the calendar date of a record.
///
/// # Errors
///
/// Returns [`Error::MalformedDate`] if `value` matches none of the accepted formats.
pub fn parse_date(value: &str) -> Result<NaiveDate, Error> {
    let trimmed = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| Error::MalformedDate {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2022-03-01").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date(" 2022-03-01 ").unwrap(), ymd(2022, 3, 1));
    }

    #[test]
    fn test_parse_datetime_variants() {
        assert_eq!(parse_date("2021-11-30 14:05:00").unwrap(), ymd(2021, 11, 30));
        assert_eq!(parse_date("2021-11-30T14:05:00").unwrap(), ymd(2021, 11, 30));
        assert_eq!(parse_date("2021-11-30T14:05:00Z").unwrap(), ymd(2021, 11, 30));
        assert_eq!(parse_date("2022-03-01T10:30").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date("2022-03-01 10:30").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date("2022-03-01 00:00:00.000").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date("2022-03-01T10:30:15.250").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date("2022-03-01T10:30:00+0100").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date("2022-03-01T10:30:00.5-0500").unwrap(), ymd(2022, 3, 1));
        assert_eq!(parse_date("20220301").unwrap(), ymd(2022, 3, 1));
    }

    #[test]
    fn test_parse_us_date() {
        assert_eq!(parse_date("4/15/2019").unwrap(), ymd(2019, 4, 15));
        assert_eq!(parse_date("04/15/2019 09:30").unwrap(), ymd(2019, 4, 15));
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        for bad in ["", "yesterday", "2022-13-01", "2022/03/01"] {
            match parse_date(bad) {
                Err(Error::MalformedDate { value }) => assert_eq!(value, bad),
                other => panic!("expected MalformedDate for {bad:?}, got {other:?}"),
            }
        }
    }
}
