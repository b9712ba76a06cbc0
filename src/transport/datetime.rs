//! Fixed date formats used on the wire.
//!
//! The service speaks three formats: minute precision for schedule
//! submission, second precision for entity timestamps, and day precision for
//! the last-messages date range. All helpers take the format explicitly;
//! there is no shared formatter state.

use chrono::{NaiveDate, NaiveDateTime};

/// `yyyy-MM-dd HH:mm`, used when submitting a scheduled send.
pub const SCHEDULE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `yyyy-MM-dd HH:mm:ss`, used for every entity timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `dd-MM-yyyy`, used for the `startDate`/`endDate` query parameters.
pub const QUERY_DATE_FORMAT: &str = "%d-%m-%Y";

pub fn format_datetime(value: NaiveDateTime, format: &str) -> String {
    value.format(format).to_string()
}

pub fn format_date(value: NaiveDate, format: &str) -> String {
    value.format(format).to_string()
}

pub fn parse_datetime(value: &str, format: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_round_trip_through_their_own_format() {
        let parsed = parse_datetime("2013-07-24 15:05:34", TIMESTAMP_FORMAT).unwrap();
        assert_eq!(
            format_datetime(parsed, TIMESTAMP_FORMAT),
            "2013-07-24 15:05:34"
        );

        let parsed = parse_datetime("2014-02-18 10:00", SCHEDULE_DATE_FORMAT).unwrap();
        assert_eq!(
            format_datetime(parsed, SCHEDULE_DATE_FORMAT),
            "2014-02-18 10:00"
        );

        let date = NaiveDate::from_ymd_opt(2013, 7, 23).unwrap();
        assert_eq!(format_date(date, QUERY_DATE_FORMAT), "23-07-2013");
    }

    #[test]
    fn parse_rejects_wrong_precision() {
        assert!(parse_datetime("2013-07-24 15:05:34", SCHEDULE_DATE_FORMAT).is_err());
        assert!(parse_datetime("2014-02-18 10:00", TIMESTAMP_FORMAT).is_err());
        assert!(parse_datetime("not a date", TIMESTAMP_FORMAT).is_err());
    }
}
