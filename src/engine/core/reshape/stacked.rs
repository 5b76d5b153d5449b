use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::core::dataset::Dataset;
use crate::engine::errors::PipelineError;
use crate::engine::types::SemanticType;

/// One instant of an area chart with a value per stacked series. Missing values are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedPoint {
    pub instant: NaiveDateTime,
    pub values: IndexMap<String, Option<f64>>,
}

/// Area-chart points from an instant column and several numeric columns, ascending by
/// instant. Rows without an instant are skipped.
pub fn stacked_series(
    dataset: &Dataset,
    time_column: &str,
    value_columns: &[&str],
) -> Result<Vec<StackedPoint>, PipelineError> {
    let schema = dataset.schema();
    let time_idx = schema.require(time_column)?;
    if schema.type_at(time_idx) != Some(SemanticType::Instant) {
        return Err(PipelineError::schema_mismatch(
            time_column,
            "stacked series needs a column normalized to instants",
        ));
    }

    let mut value_idx = Vec::with_capacity(value_columns.len());
    for column in value_columns {
        let idx = schema.require(column)?;
        if schema.type_at(idx) != Some(SemanticType::Numeric) {
            return Err(PipelineError::schema_mismatch(
                column,
                "stacked series values must be numeric",
            ));
        }
        value_idx.push((*column, idx));
    }

    let mut points: Vec<StackedPoint> = dataset
        .rows()
        .iter()
        .filter_map(|row| {
            let instant = row.get(time_idx)?.as_instant()?;
            let values = value_idx
                .iter()
                .map(|(name, idx)| (name.to_string(), row.get(*idx).and_then(|v| v.as_f64())))
                .collect();
            Some(StackedPoint { instant, values })
        })
        .collect();

    points.sort_by_key(|p| p.instant);
    Ok(points)
}
