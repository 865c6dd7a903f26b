//! Column role resolution over arbitrary export schemas.
//!
//! Exports from different identity platforms name the same fields
//! differently. Each semantic role is resolved by walking a static,
//! priority-ordered candidate list and taking the first name present in
//! the table. Matching is exact and case-sensitive on purpose: a fuzzy
//! match could silently pick up an unrelated column, which is worse than
//! skipping the metric.

use crate::table::types::Table;

/// Source-address column candidates, highest priority first.
pub const ADDRESS_CANDIDATES: &[&str] = &[
    "IpAddress",
    "ClientIPAddress",
    "ClientAddress",
    "RemoteIpAddress",
];

/// Targeted-identity column candidates, highest priority first.
pub const IDENTITY_CANDIDATES: &[&str] = &[
    "Account",
    "TargetUserName",
    "TargetUser",
    "SubjectUserName",
    "AccountName",
];

/// Timestamp column candidates, highest priority first.
pub const TIME_CANDIDATES: &[&str] = &[
    "TimeGenerated [UTC]",
    "TimeGenerated",
    "Timestamp",
    "EventTime",
];

/// Concrete column names resolved for each semantic role.
///
/// An unresolved role is `None`; the metrics depending on it are skipped,
/// which is expected behavior and not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub address: Option<String>,
    pub identity: Option<String>,
    pub time: Option<String>,
}

/// Resolves all three roles against a table's column set.
pub fn resolve_roles(table: &Table) -> ColumnRoles {
    ColumnRoles {
        address: pick_column(table, ADDRESS_CANDIDATES),
        identity: pick_column(table, IDENTITY_CANDIDATES),
        time: pick_column(table, TIME_CANDIDATES),
    }
}

/// First candidate present verbatim in the table, if any.
fn pick_column(table: &Table, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|candidate| table.has_column(candidate))
        .map(|candidate| (*candidate).to_string())
}
