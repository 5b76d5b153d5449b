use ahash::RandomState as AHashRandomState;
use std::collections::HashSet;

use crate::engine::core::aggregate::group_key::GroupValue;
use crate::engine::core::dataset::Dataset;
use crate::engine::errors::PipelineError;

/// Sum of a numeric column over all rows. Zero rows is `EmptyInput`.
pub fn total(dataset: &Dataset, column: &str) -> Result<f64, PipelineError> {
    let idx = dataset.schema().require(column)?;
    if dataset.is_empty() {
        return Err(PipelineError::EmptyInput(column.to_string()));
    }
    Ok(dataset
        .rows()
        .iter()
        .filter_map(|r| r.get(idx).and_then(|v| v.as_f64()))
        .sum())
}

/// Two-decimal rendering of `total` for a metric tile; zero rows render as "0.00".
pub fn format_total(dataset: &Dataset, column: &str) -> Result<String, PipelineError> {
    match total(dataset, column) {
        Ok(sum) => Ok(format!("{:.2}", sum)),
        Err(PipelineError::EmptyInput(_)) => Ok(format!("{:.2}", 0.0)),
        Err(e) => Err(e),
    }
}

/// Number of distinct non-missing values of a column.
pub fn distinct_count(dataset: &Dataset, column: &str) -> Result<usize, PipelineError> {
    let idx = dataset.schema().require(column)?;
    let distinct: HashSet<GroupValue, AHashRandomState> = dataset
        .rows()
        .iter()
        .filter_map(|r| r.get(idx).and_then(GroupValue::from_scalar))
        .collect();
    Ok(distinct.len())
}
