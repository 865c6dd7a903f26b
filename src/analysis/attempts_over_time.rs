//! Attempt volume bucketed per calendar minute.
//!
//! Exposes volumetric timing (bursts, sustained campaigns) without
//! exposing raw per-row timestamps: only the aggregated minute series
//! leaves this module, and only via the rendered chart.

use crate::table::types::Table;
use crate::utils::time::{floor_to_minute, parse_flexible};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Buckets parseable timestamps into 1-minute calendar-aligned counts.
///
/// Unparseable values are dropped, never an error. Returns `None` when
/// the column is absent or no row survives parsing — the metric then
/// produces no output at all rather than an empty chart. Only observed
/// minutes appear; silent minutes are not zero-filled.
pub fn compute(table: &Table, time_column: &str) -> Option<BTreeMap<DateTime<Utc>, usize>> {
    let raw = table.column_values(time_column)?;

    let mut buckets: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
    for value in raw {
        if let Some(timestamp) = parse_flexible(value) {
            *buckets.entry(floor_to_minute(timestamp)).or_insert(0) += 1;
        }
    }

    if buckets.is_empty() {
        None
    } else {
        Some(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[&str]) -> Table {
        Table::new(
            vec!["TimeGenerated".into()],
            values.iter().map(|v| vec![(*v).to_string()]).collect(),
        )
    }

    #[test]
    fn buckets_by_calendar_minute() {
        let table = table(&[
            "2024-01-01T00:00:10",
            "2024-01-01T00:00:40",
            "2024-01-01T00:01:05",
            "invalid",
        ]);
        let buckets = compute(&table, "TimeGenerated").unwrap();

        assert_eq!(buckets.len(), 2);
        let counts: Vec<usize> = buckets.values().copied().collect();
        assert_eq!(counts, vec![2, 1]);
        let first = *buckets.keys().next().unwrap();
        assert_eq!(first, parse_flexible("2024-01-01T00:00:00").unwrap());
    }

    #[test]
    fn buckets_ascend_by_start_time() {
        let table = table(&[
            "2024-01-01T00:05:00",
            "2024-01-01T00:01:00",
            "2024-01-01T00:03:00",
        ]);
        let buckets = compute(&table, "TimeGenerated").unwrap();

        let starts: Vec<_> = buckets.keys().copied().collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn no_parseable_rows_yields_none() {
        assert!(compute(&table(&["bogus", "", "tomorrow"]), "TimeGenerated").is_none());
        assert!(compute(&table(&[]), "TimeGenerated").is_none());
    }

    #[test]
    fn missing_column_yields_none() {
        assert!(compute(&table(&["2024-01-01T00:00:00"]), "EventTime").is_none());
    }
}
