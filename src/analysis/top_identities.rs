//! Top targeted identities.

use crate::analysis::clean;
use crate::analysis::ranked_counts;
use crate::analysis::types::IdentityStats;
use crate::table::types::Table;

/// How many identities the ranking keeps.
pub const TOP_IDENTITIES: usize = 20;

/// Ranks the most-targeted identities by attempt count, descending.
///
/// Returns an empty vector when no usable rows remain after cleaning.
pub fn compute(table: &Table, identity_column: &str) -> Vec<IdentityStats> {
    let Some(raw) = table.column_values(identity_column) else {
        return Vec::new();
    };
    let cleaned = clean::clean_column(&raw);

    ranked_counts(cleaned, TOP_IDENTITIES)
        .into_iter()
        .map(|(identity, attempts)| IdentityStats { identity, attempts })
        .collect()
}
