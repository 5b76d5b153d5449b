use ahash::RandomState as AHashRandomState;
use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::core::aggregate::AggregatedResult;
use crate::engine::core::reshape::shape::require_arity;
use crate::engine::errors::PipelineError;
use crate::engine::types::SemanticType;

/// One point of a scatter chart: the category's index attribute against its metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub index: f64,
    pub category: String,
    pub value: f64,
}

/// Points of a result keyed by (category, numeric attribute). Each category must carry
/// exactly one attribute value.
pub fn scatter(result: &AggregatedResult) -> Result<Vec<ScatterPoint>, PipelineError> {
    let keys = require_arity(result, 2, "scatter")?;
    let (index_column, index_type) = &keys[1];
    if *index_type != SemanticType::Numeric {
        return Err(PipelineError::schema_mismatch(
            index_column,
            format!("scatter index must be numeric, found {}", index_type),
        ));
    }

    let mut seen: IndexMap<String, f64, AHashRandomState> =
        IndexMap::with_hasher(AHashRandomState::new());
    let mut points = Vec::with_capacity(result.len());

    for row in result.rows() {
        let category = row.key[0].to_string_repr();
        let index = row.key[1].as_f64().ok_or_else(|| {
            PipelineError::schema_mismatch(
                index_column,
                format!("'{}' is not numeric", row.key[1].to_string_repr()),
            )
        })?;

        match seen.get(&category) {
            Some(previous) if *previous != index => {
                return Err(PipelineError::AmbiguousJoin {
                    category: category.clone(),
                    attribute: index_column.clone(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(category.clone(), index);
            }
        }

        points.push(ScatterPoint {
            index,
            category,
            value: row.value,
        });
    }

    Ok(points)
}
