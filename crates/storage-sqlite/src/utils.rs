//! Parse helpers shared by the DB model conversions.
//!
//! Decimals and timestamps are stored as TEXT; these helpers decode them with
//! uniform error wrapping.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

pub fn parse_decimal(raw: &str, field: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(raw)
        .map_err(|e| StorageError::Decode(format!("{}: '{}' is not a decimal ({})", field, raw, e)))
}

pub fn parse_datetime(raw: &str, field: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::Decode(format!("{}: '{}' is not RFC3339 ({})", field, raw, e))
        })
}

pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, StorageError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        StorageError::Decode(format!("{}: '{}' is not YYYY-MM-DD ({})", field, raw, e))
    })
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn datetime_round_trips_through_text() {
        let original = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let parsed = parse_datetime(&format_datetime(&original), "ts").unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn bad_decimal_reports_the_field() {
        let err = parse_decimal("abc", "price").unwrap_err();
        assert!(err.to_string().contains("price"));
    }
}
