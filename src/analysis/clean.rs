//! Shared value cleaning applied per analyzed column.
//!
//! Exports coerce missing values into empty cells or the literal string
//! `nan` (numeric columns round-tripped through a float representation).
//! Every metric cleans its own scoped slice; the source table is never
//! touched.

/// True when a trimmed value is a missing-value sentinel.
fn is_missing(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan")
}

/// Trims every value and drops missing ones.
pub fn clean_column(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !is_missing(value))
        .map(str::to_string)
        .collect()
}

/// Trims row-aligned pairs and drops any row where either side is missing.
pub fn clean_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(first, second)| (first.trim(), second.trim()))
        .filter(|(first, second)| !is_missing(first) && !is_missing(second))
        .map(|(first, second)| (first.to_string(), second.to_string()))
        .collect()
}
