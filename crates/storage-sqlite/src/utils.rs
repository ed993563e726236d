//! Helpers for the TEXT-based column encodings.
//!
//! Monetary amounts are stored as decimal strings (never floats), dates as
//! `YYYY-MM-DD`, and instants as RFC 3339. Reads are tolerant: a value that
//! fails to parse is logged and replaced with a safe default rather than
//! poisoning the whole row set.

use chrono::{DateTime, NaiveDate, Utc};
use log::error;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored amount, falling back to zero on malformed data.
pub fn parse_decimal_tolerant(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to parse {} '{}' as Decimal: {}", field_name, value, e);
            Decimal::ZERO
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a stored date, falling back to the epoch date on malformed data.
pub fn parse_date_tolerant(value: &str, field_name: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to parse {} '{}' as date: {}", field_name, value, e);
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
        }
    }
}

pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// Parses a stored instant, falling back to the Unix epoch on malformed data.
pub fn parse_datetime_tolerant(value: &str, field_name: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            error!(
                "Failed to parse {} '{}' as RFC 3339 instant: {}",
                field_name, value, e
            );
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}
