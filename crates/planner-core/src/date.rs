//! Calendar dates in the `YYYYMMDD` wire form.
//!
//! Every date that crosses the engine, store or HTTP boundary is a plain
//! calendar day. Time of day never leaks past [`today_in`].

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

/// chrono format string for the external date representation.
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("expected 8 digits in YYYYMMDD form, got '{0}'")]
    Malformed(String),

    #[error("'{0}' is not a valid calendar date")]
    Invalid(String),
}

/// Parses a strict `YYYYMMDD` string.
///
/// chrono alone accepts signs and short fields, so the shape is checked
/// before the calendar is.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Malformed(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateError::Invalid(input.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's calendar date as seen from `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Validate IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))
}
