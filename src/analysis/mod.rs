//! The log-analysis engine.
//!
//! One analysis is a single synchronous pass: load the table once,
//! resolve which columns carry which semantic role, then run whichever
//! metric computers have their required column present. Each metric
//! cleans its own scoped slice, aggregates, renders a chart, and
//! contributes fields to one [`AnalysisResult`](types::AnalysisResult).
//!
//! Metrics are independent pure functions of the loaded table; a metric
//! whose column is unresolved is silently skipped, and a chart that
//! fails to render or persist is downgraded to a stderr warning without
//! touching any other metric's output.
//!
//! - [`schema`] - Column role resolution over arbitrary export schemas
//! - [`clean`] - Shared per-column value cleaning
//! - [`top_addresses`] - Attempts per source address + spray score
//! - [`attempts_over_time`] - Attempt volume per calendar minute
//! - [`event_codes`] - Breakdown over the literal `EventID` column
//! - [`top_identities`] - Most-targeted identities
//! - [`types`] - The result record

pub mod attempts_over_time;
pub mod clean;
pub mod event_codes;
pub mod schema;
pub mod top_addresses;
pub mod top_identities;
pub mod types;

use crate::chart::{self, ChartError, ChartKind};
use crate::table::loader::load_table;
use crate::table::types::Table;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use types::AnalysisResult;

/// Loads an export and analyzes it, writing charts under `plots_dir`.
///
/// Load failure is the only hard error; everything downstream degrades
/// per metric. Chart files are stamped with the current unix time.
pub fn analyze_file(path: impl AsRef<Path>, plots_dir: &Path) -> Result<AnalysisResult> {
    let table = load_table(path)?;
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() as i64);
    Ok(analyze_table(&table, plots_dir, stamp))
}

/// Runs every applicable metric over an already-loaded table.
///
/// `stamp` qualifies chart file names; callers that need reproducible
/// artifact paths (tests) pass a fixed value.
pub fn analyze_table(table: &Table, plots_dir: &Path, stamp: i64) -> AnalysisResult {
    let roles = schema::resolve_roles(table);

    let mut result = AnalysisResult {
        total_events: table.row_count(),
        unique_addresses: roles
            .address
            .as_deref()
            .and_then(|column| table.distinct_non_empty(column)),
        unique_identities: roles
            .identity
            .as_deref()
            .and_then(|column| table.distinct_non_empty(column)),
        address_column: roles.address.clone(),
        identity_column: roles.identity.clone(),
        time_column: roles.time.clone(),
        columns: table.columns().to_vec(),
        top_addresses: Vec::new(),
        address_chart: None,
        time_chart: None,
        event_code_counts: None,
        event_code_chart: None,
        top_identities: Vec::new(),
        identity_chart: None,
    };

    if let Some(address_column) = roles.address.as_deref() {
        let stats = top_addresses::compute(table, address_column, roles.identity.as_deref());
        if !stats.is_empty() {
            let series: Vec<(String, usize)> = stats
                .iter()
                .map(|row| (row.address.clone(), row.attempts))
                .collect();
            result.address_chart = save_metric_chart(
                chart::render_bar_chart(
                    "Top source addresses by attempts",
                    "Address",
                    "Attempts",
                    &series,
                    false,
                ),
                plots_dir,
                ChartKind::TopAddresses,
                stamp,
            );
            result.top_addresses = stats;
        }
    }

    if let Some(time_column) = roles.time.as_deref() {
        if let Some(buckets) = attempts_over_time::compute(table, time_column) {
            result.time_chart = save_metric_chart(
                chart::render_line_chart(
                    "Authentication attempts over time",
                    "Time",
                    "Attempts per minute",
                    &buckets,
                ),
                plots_dir,
                ChartKind::AttemptsOverTime,
                stamp,
            );
        }
    }

    if let Some(counts) = event_codes::compute(table) {
        let series: Vec<(String, usize)> = counts
            .iter()
            .map(|row| (row.code.clone(), row.count))
            .collect();
        result.event_code_chart = save_metric_chart(
            chart::render_bar_chart("Top event codes", "EventID", "Count", &series, false),
            plots_dir,
            ChartKind::EventCodes,
            stamp,
        );
        result.event_code_counts = Some(counts);
    }

    if let Some(identity_column) = roles.identity.as_deref() {
        let stats = top_identities::compute(table, identity_column);
        if !stats.is_empty() {
            let series: Vec<(String, usize)> = stats
                .iter()
                .map(|row| (row.identity.clone(), row.attempts))
                .collect();
            result.identity_chart = save_metric_chart(
                chart::render_bar_chart(
                    "Top targeted identities",
                    "Identity",
                    "Attempts",
                    &series,
                    true,
                ),
                plots_dir,
                ChartKind::TopIdentities,
                stamp,
            );
            result.top_identities = stats;
        }
    }

    result
}

/// Persists one metric's chart, containing failures to a warning.
fn save_metric_chart(
    rendered: Result<Vec<u8>, ChartError>,
    plots_dir: &Path,
    kind: ChartKind,
    stamp: i64,
) -> Option<String> {
    match rendered.and_then(|png| chart::save_chart(plots_dir, kind, stamp, &png)) {
        Ok(reference) => Some(reference),
        Err(err) => {
            eprintln!("warning: skipping {} chart: {err}", kind.file_stem());
            None
        }
    }
}

/// Tallies values and returns the top `limit` as `(value, count)` pairs,
/// ordered by descending count with ties broken by first occurrence.
pub(crate) fn ranked_counts<I>(values: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut tallies: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = tallies.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = tallies
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(value, count, _)| (value, count))
        .collect()
}
