// Date utility functions

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse an ISO 8601 calendar date ("2025-07-20").
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// The start of a "start - end" time range: everything before the first
/// " - " separator, or the whole trimmed string when no separator exists.
pub fn start_of_range(range: &str) -> &str {
    match range.split_once(" - ") {
        Some((start, _)) => start.trim(),
        None => range.trim(),
    }
}

/// Parse the start of a time range as a wall-clock time ("10:00").
pub fn parse_start_time(range: &str) -> Option<NaiveTime> {
    let start = start_of_range(range);
    NaiveTime::parse_from_str(start, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(start, "%H:%M:%S"))
        .ok()
}

/// Combine a calendar date with the start of a time range into a single
/// instant. `None` when either part is malformed.
pub fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(parse_iso_date(date)?.and_time(parse_start_time(time)?))
}
