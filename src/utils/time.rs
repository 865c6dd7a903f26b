//! Lenient timestamp parsing and minute bucketing.
//!
//! Exported authentication logs carry timestamps in whatever shape the
//! source platform produced: RFC 3339, zone-less ISO 8601, or the
//! `M/D/YYYY, h:mm:ss.SSS AM` form used by portal CSV downloads. The
//! time-series metric needs a single parser that accepts all of them and
//! treats anything else as a droppable row, never an error.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Zone-less formats tried after RFC 3339, in order. Values matching one
/// of these are assumed to be UTC, which is what portal exports emit.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y, %I:%M:%S%.f %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Parses a timestamp from an export cell, trying each known format.
///
/// Returns `None` for values no format accepts; callers drop such rows.
///
/// # Examples
///
/// ```
/// use authlog_tools::utils::time::parse_flexible;
///
/// assert!(parse_flexible("2024-01-01T00:00:10").is_some());
/// assert!(parse_flexible("1/2/2024, 10:30:00.000 AM").is_some());
/// assert!(parse_flexible("not a timestamp").is_none());
/// ```
pub fn parse_flexible(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    let value = value.strip_suffix(" UTC").unwrap_or(value);
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}

/// Truncates a timestamp to the calendar minute containing it.
pub fn floor_to_minute(dt: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = dt.timestamp();
    let floored = seconds - seconds.rem_euclid(60);
    Utc.timestamp_opt(floored, 0).single().unwrap_or(dt)
}

/// Formats a bucket start for display on the report and chart axis.
pub fn format_minute(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}
