//! Top source addresses with credential-spray scoring.
//!
//! Counts attempts per cleaned source address and, when an identity
//! column is also resolved, how many distinct identities each address
//! went after. The ratio of the two separates spray-style campaigns
//! (many identities, few attempts each) from brute force against a
//! handful of accounts.

use crate::analysis::clean;
use crate::analysis::ranked_counts;
use crate::analysis::types::AddressStats;
use crate::table::types::Table;
use std::collections::{HashMap, HashSet};

/// How many addresses the ranking keeps.
pub const TOP_ADDRESSES: usize = 20;

/// Ranks the top addresses by attempt count.
///
/// Returns an empty vector when no usable rows remain after cleaning;
/// the caller then leaves the whole metric absent. `identity_column`
/// being `None` (or an address having no surviving identity rows)
/// yields a distinct-identity count of 0 for that address.
pub fn compute(table: &Table, address_column: &str, identity_column: Option<&str>) -> Vec<AddressStats> {
    let Some(raw) = table.column_values(address_column) else {
        return Vec::new();
    };
    let cleaned = clean::clean_column(&raw);
    if cleaned.is_empty() {
        return Vec::new();
    }
    let ranked = ranked_counts(cleaned, TOP_ADDRESSES);

    let mut identities_per_address: HashMap<String, HashSet<String>> = HashMap::new();
    if let Some(identity_column) = identity_column {
        if let Some(pairs) = table.column_pairs(address_column, identity_column) {
            for (address, identity) in clean::clean_pairs(&pairs) {
                identities_per_address
                    .entry(address)
                    .or_default()
                    .insert(identity);
            }
        }
    }

    ranked
        .into_iter()
        .map(|(address, attempts)| {
            let unique_identities = identities_per_address
                .get(&address)
                .map_or(0, HashSet::len);
            AddressStats {
                spray_score: spray_score(unique_identities, attempts),
                address,
                attempts,
                unique_identities,
            }
        })
        .collect()
}

/// `round(unique_identities / attempts, 3)`, with a zero-attempts guard.
pub fn spray_score(unique_identities: usize, attempts: usize) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    let ratio = unique_identities as f64 / attempts as f64;
    (ratio * 1000.0).round() / 1000.0
}
