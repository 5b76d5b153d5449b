use tracing::debug;

use crate::engine::core::dataset::Dataset;
use crate::engine::errors::PipelineError;
use crate::engine::types::{ScalarValue, SemanticType};
use crate::shared::datetime::TimeParser;

/// Coerce the named columns to the canonical instant type.
///
/// Accepts values that are already instants, date/timestamp strings and integer or
/// float epochs. Missing values stay missing. Anything else fails with
/// `PipelineError::Parse`; rows are never dropped.
pub fn normalize(dataset: &Dataset, columns: &[&str]) -> Result<Dataset, PipelineError> {
    let mut indices = Vec::with_capacity(columns.len());
    for name in columns {
        indices.push((*name, dataset.schema().require(name)?));
    }

    let (mut schema, mut rows) = dataset.clone().into_parts();
    for (name, idx) in indices {
        for row in rows.iter_mut() {
            let coerced = match row.get(idx) {
                Some(value) => to_instant(name, value)?,
                None => continue,
            };
            row.set(idx, coerced);
        }
        schema.set_type(idx, SemanticType::Instant);
        debug!(
            target: "warehouse_dash::normalize",
            column = %name,
            rows = rows.len(),
            "Normalized column to instants"
        );
    }

    Ok(Dataset::from_parts(schema, rows))
}

fn to_instant(column: &str, value: &ScalarValue) -> Result<ScalarValue, PipelineError> {
    let parsed = match value {
        ScalarValue::Null => return Ok(ScalarValue::Null),
        ScalarValue::Instant(ts) => Some(*ts),
        ScalarValue::Utf8(s) => TimeParser::parse_str(s),
        ScalarValue::Int64(i) => TimeParser::from_integer_epoch(*i as i128),
        ScalarValue::Float64(f) => TimeParser::from_float_epoch(*f),
        ScalarValue::Boolean(_) => None,
    };
    parsed
        .map(ScalarValue::Instant)
        .ok_or_else(|| PipelineError::Parse {
            column: column.to_string(),
            value: value.to_string_repr(),
        })
}
