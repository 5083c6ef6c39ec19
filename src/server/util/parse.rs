//! Lenient parsing of query string values.
//!
//! Query values that do not parse are treated as absent rather than rejected.

use chrono::NaiveDate;

/// Parses an integer, ignoring surrounding whitespace.
///
/// # Returns
/// - `Some(i64)` - The value is a valid integer
/// - `None` - Empty or not a number
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Parses an `i32` id, rejecting values out of range.
pub fn parse_id(value: &str) -> Option<i32> {
    parse_int(value).and_then(|v| i32::try_from(v).ok())
}

/// Parses a boolean flag the way HTML forms and query strings send them.
///
/// `1`, `true`, `on` and `yes` are true (case-insensitive), everything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
