use ahash::RandomState as AHashRandomState;
use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::aggregate::group_key::{GroupKey, ResolvedKey, key_of};
use crate::engine::core::aggregate::ops::AccumulatorImpl;
use crate::engine::core::aggregate::plan::AggregateSpec;
use crate::engine::core::aggregate::result::{AggregatedResult, AggregatedRow};
use crate::engine::core::dataset::Dataset;
use crate::engine::errors::PipelineError;

/// Group the rows of `dataset` by the spec's keys and reduce its metric column.
///
/// Emits one row per distinct key in first-seen order. Rows whose key has a missing
/// component are left out of every group.
pub fn aggregate(dataset: &Dataset, spec: &AggregateSpec) -> Result<AggregatedResult, PipelineError> {
    let schema = dataset.schema();
    let keys = spec
        .keys
        .iter()
        .map(|k| ResolvedKey::resolve(k, schema))
        .collect::<Result<Vec<_>, _>>()?;
    let metric_idx = schema.require(&spec.metric)?;

    let mut groups: IndexMap<GroupKey, AccumulatorImpl, AHashRandomState> =
        IndexMap::with_hasher(AHashRandomState::new());
    let mut skipped = 0usize;

    for row in dataset.rows() {
        let Some(key) = key_of(&keys, row) else {
            skipped += 1;
            continue;
        };
        let Some(value) = row.get(metric_idx) else {
            continue;
        };
        groups
            .entry(key)
            .or_insert_with(|| AccumulatorImpl::from_reducer(spec.reducer))
            .update(value);
    }

    debug!(
        target: "warehouse_dash::aggregate",
        metric = %spec.metric,
        reducer = ?spec.reducer,
        rows = dataset.len(),
        groups = groups.len(),
        skipped,
        "Aggregated dataset"
    );

    let key_columns = keys
        .iter()
        .map(|k| (k.output_name.clone(), k.output_type))
        .collect();
    let rows = groups
        .into_iter()
        .map(|(key, acc)| AggregatedRow::new(key.to_scalars(), acc.finalize()))
        .collect();

    Ok(AggregatedResult::new(key_columns, spec.metric.clone(), rows))
}
