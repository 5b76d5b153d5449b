use serde::Serialize;

use crate::engine::core::aggregate::AggregatedResult;
use crate::engine::core::reshape::shape::require_arity;
use crate::engine::errors::PipelineError;

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub label: String,
    pub value: f64,
}

/// Bars of a single-key result, in the result's order.
pub fn categorical_series(result: &AggregatedResult) -> Result<Vec<CategoryPoint>, PipelineError> {
    require_arity(result, 1, "categorical series")?;
    Ok(result
        .rows()
        .iter()
        .map(|row| CategoryPoint {
            label: row.key[0].to_string_repr(),
            value: row.value,
        })
        .collect())
}
