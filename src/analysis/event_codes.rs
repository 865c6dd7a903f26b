//! Event-code breakdown over the literal `EventID` column.
//!
//! Unlike the role-resolved columns, `EventID` is a fixed external
//! convention (Windows event exports), so it is matched literally and
//! its values are counted raw rather than cleaned. This is also the only
//! metric whose numeric detail is returned as structured data for
//! tabular display, not just as a chart.

use crate::analysis::ranked_counts;
use crate::analysis::types::EventCodeCount;
use crate::table::types::Table;

/// The fixed column this metric requires.
pub const EVENT_CODE_COLUMN: &str = "EventID";

/// How many event codes the ranking keeps.
pub const TOP_EVENT_CODES: usize = 10;

/// Ranks event codes by occurrence, descending.
///
/// Missing cells (empty strings) are excluded; everything else counts
/// as-is. Returns `None` when the column is absent or holds no values.
pub fn compute(table: &Table) -> Option<Vec<EventCodeCount>> {
    let raw = table.column_values(EVENT_CODE_COLUMN)?;
    let values = raw
        .iter()
        .filter(|value| !value.is_empty())
        .map(|value| (*value).to_string());

    let ranked = ranked_counts(values, TOP_EVENT_CODES);
    if ranked.is_empty() {
        return None;
    }
    Some(
        ranked
            .into_iter()
            .map(|(code, count)| EventCodeCount { code, count })
            .collect(),
    )
}
