use std::cmp::Ordering;
use std::ops::Deref;

use tracing::debug;

use crate::engine::core::aggregate::{AggregatedResult, AggregatedRow};

/// An aggregated result ordered by metric descending and capped in length.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult(AggregatedResult);

impl RankedResult {
    pub fn into_inner(self) -> AggregatedResult {
        self.0
    }
}

impl Deref for RankedResult {
    type Target = AggregatedResult;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<RankedResult> for AggregatedResult {
    fn from(ranked: RankedResult) -> Self {
        ranked.0
    }
}

/// Descending by value, NaN after every number.
fn by_value_desc(a: &AggregatedRow, b: &AggregatedRow) -> Ordering {
    match (a.value.is_nan(), b.value.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal),
    }
}

/// The `n` rows with the largest metric. Ties keep their input order; fewer than `n`
/// rows yields all of them.
pub fn top_n(aggregated: &AggregatedResult, n: usize) -> RankedResult {
    let mut rows = aggregated.rows().to_vec();
    rows.sort_by(by_value_desc);
    rows.truncate(n);

    debug!(
        target: "warehouse_dash::rank",
        requested = n,
        returned = rows.len(),
        "Selected top rows"
    );
    RankedResult(aggregated.with_rows(rows))
}
