use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use crate::server::error::AppError;

/// Parses a numeric query value for the named field.
///
/// # Arguments
/// - `field` - Field name, used in the error message
/// - `value` - The raw string to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - The string is not a valid number
pub fn parse_number<T: FromStr>(field: &str, value: &str) -> Result<T, AppError> {
    value.trim().parse::<T>().map_err(|_| {
        AppError::BadRequest(format!("Invalid numeric value '{}' for {}", value, field))
    })
}

/// Parses a boolean query value, accepting `true`/`false` and `1`/`0`.
pub fn parse_bool(field: &str, value: &str) -> Result<bool, AppError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::BadRequest(format!(
            "Invalid boolean value '{}' for {}",
            value, field
        ))),
    }
}

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date value '{}' for {}", value, field)))
}
