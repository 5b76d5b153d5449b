use crate::engine::core::aggregate::AggregatedResult;
use crate::engine::errors::PipelineError;
use crate::engine::types::SemanticType;

/// Key columns of `result`, provided there are exactly `arity` of them.
pub(super) fn require_arity<'a>(
    result: &'a AggregatedResult,
    arity: usize,
    view: &str,
) -> Result<&'a [(String, SemanticType)], PipelineError> {
    let keys = result.key_columns();
    if keys.len() != arity {
        return Err(PipelineError::schema_mismatch(
            result.metric(),
            format!(
                "{} needs {} grouping key(s), result has {}",
                view,
                arity,
                keys.len()
            ),
        ));
    }
    Ok(keys)
}
