use chrono::NaiveDateTime;
use serde::Serialize;

use crate::engine::core::aggregate::AggregatedResult;
use crate::engine::core::reshape::shape::require_arity;
use crate::engine::errors::PipelineError;
use crate::engine::types::SemanticType;

/// One point of a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    pub instant: NaiveDateTime,
    pub value: f64,
}

/// Points of a single instant-keyed result, ascending by instant.
pub fn time_series(result: &AggregatedResult) -> Result<Vec<TimePoint>, PipelineError> {
    let keys = require_arity(result, 1, "time series")?;
    let (column, ty) = &keys[0];
    if *ty != SemanticType::Instant {
        return Err(PipelineError::schema_mismatch(
            column,
            format!("time series needs an instant key, found {}", ty),
        ));
    }

    let mut points = result
        .rows()
        .iter()
        .map(|row| match row.key[0].as_instant() {
            Some(instant) => Ok(TimePoint {
                instant,
                value: row.value,
            }),
            None => Err(PipelineError::schema_mismatch(
                column,
                format!("'{}' is not an instant", row.key[0].to_string_repr()),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    points.sort_by_key(|p| p.instant);
    Ok(points)
}
