use chrono::NaiveDateTime;
use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::engine::core::dataset::{Dataset, Row, Schema};
use crate::engine::core::filter::filter_spec::{FilterSpec, InstantRange};
use crate::engine::errors::PipelineError;
use crate::engine::types::SemanticType;

#[derive(Debug, Clone)]
enum Predicate<'a> {
    Range { idx: usize, range: InstantRange },
    Member { idx: usize, accepted: &'a IndexSet<String> },
}

impl Predicate<'_> {
    fn matches(&self, row: &Row) -> bool {
        match self {
            Predicate::Range { idx, range } => row
                .get(*idx)
                .and_then(|v| v.as_instant())
                .is_some_and(|ts: NaiveDateTime| range.contains(ts)),
            Predicate::Member { idx, accepted } => match row.get(*idx) {
                Some(v) if !v.is_null() => accepted.contains(&v.to_string_repr()),
                _ => false,
            },
        }
    }
}

/// A filter spec resolved against one schema.
#[derive(Debug, Clone)]
pub struct CompiledFilter<'a> {
    predicates: Vec<Predicate<'a>>,
}

impl<'a> CompiledFilter<'a> {
    pub fn compile(schema: &Schema, spec: &'a FilterSpec) -> Result<Self, PipelineError> {
        let mut predicates = Vec::with_capacity(spec.accepted.len() + 1);

        if let Some((column, range)) = &spec.range {
            let idx = schema.require(column)?;
            if schema.type_at(idx) != Some(SemanticType::Instant) {
                return Err(PipelineError::schema_mismatch(
                    column,
                    "range filter needs a column normalized to instants",
                ));
            }
            predicates.push(Predicate::Range { idx, range: *range });
        }

        for (column, accepted) in &spec.accepted {
            let idx = schema.require(column)?;
            if accepted.is_empty() {
                warn!(
                    target: "warehouse_dash::filter",
                    column = %column,
                    "Empty selection excludes every row"
                );
            }
            predicates.push(Predicate::Member { idx, accepted });
        }

        Ok(Self { predicates })
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.predicates.iter().all(|p| p.matches(row))
    }
}

/// Keep the rows satisfying every predicate of `spec`, in their original order.
pub fn apply(dataset: &Dataset, spec: &FilterSpec) -> Result<Dataset, PipelineError> {
    let filter = CompiledFilter::compile(dataset.schema(), spec)?;
    let rows: Vec<Row> = dataset
        .rows()
        .iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect();

    debug!(
        target: "warehouse_dash::filter",
        kept = rows.len(),
        dropped = dataset.len() - rows.len(),
        "Applied filter"
    );
    Ok(dataset.with_rows(rows))
}
