//! Result record types produced by one analysis run.

use serde::Serialize;

/// One ranked source address with its credential-spray score.
///
/// `spray_score` is the ratio of distinct identities attempted to total
/// attempts, rounded to three decimals. A score near 1 means one attempt
/// per identity (breadth-first spraying); near 0 means many attempts
/// against few identities (depth-first brute force).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressStats {
    pub address: String,
    pub attempts: usize,
    pub unique_identities: usize,
    pub spray_score: f64,
}

/// One ranked targeted identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityStats {
    pub identity: String,
    pub attempts: usize,
}

/// One ranked event code with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCodeCount {
    pub code: String,
    pub count: usize,
}

/// The single output record of an analysis run.
///
/// Per-metric fields are independently null or empty when the metric's
/// required column was not resolved or no usable rows remained; the rest
/// of the record is always populated.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Input row count, regardless of how many metrics ran.
    pub total_events: usize,
    pub unique_addresses: Option<usize>,
    pub unique_identities: Option<usize>,

    /// Resolved column names, for diagnostic display.
    pub address_column: Option<String>,
    pub identity_column: Option<String>,
    pub time_column: Option<String>,
    /// Every column name the export carried.
    pub columns: Vec<String>,

    pub top_addresses: Vec<AddressStats>,
    pub address_chart: Option<String>,

    pub time_chart: Option<String>,

    pub event_code_counts: Option<Vec<EventCodeCount>>,
    pub event_code_chart: Option<String>,

    pub top_identities: Vec<IdentityStats>,
    pub identity_chart: Option<String>,
}
