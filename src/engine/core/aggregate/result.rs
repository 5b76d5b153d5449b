use crate::engine::core::dataset::{Dataset, Row, Schema};
use crate::engine::types::{ScalarValue, SemanticType};

/// One output row of an aggregation: the grouping values and the reduced metric
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRow {
    pub key: Vec<ScalarValue>,
    pub value: f64,
}

impl AggregatedRow {
    pub fn new(key: Vec<ScalarValue>, value: f64) -> Self {
        Self { key, value }
    }
}

/// One row per distinct grouping-key combination, in first-seen order unless a
/// downstream step reorders it.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    key_columns: Vec<(String, SemanticType)>,
    metric: String,
    rows: Vec<AggregatedRow>,
}

impl AggregatedResult {
    pub fn new(
        key_columns: Vec<(String, SemanticType)>,
        metric: impl Into<String>,
        rows: Vec<AggregatedRow>,
    ) -> Self {
        Self {
            key_columns,
            metric: metric.into(),
            rows,
        }
    }

    pub fn key_columns(&self) -> &[(String, SemanticType)] {
        &self.key_columns
    }

    pub fn key_index(&self, name: &str) -> Option<usize> {
        self.key_columns.iter().position(|(n, _)| n == name)
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn with_rows(&self, rows: Vec<AggregatedRow>) -> Self {
        Self {
            key_columns: self.key_columns.clone(),
            metric: self.metric.clone(),
            rows,
        }
    }

    /// Sum of the metric over every emitted row
    pub fn metric_total(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    /// Flatten into a dataset: grouping columns followed by the metric column
    pub fn to_dataset(&self) -> Dataset {
        let schema = Schema::from_columns(
            self.key_columns
                .iter()
                .map(|(name, ty)| (name.clone(), *ty))
                .chain(std::iter::once((self.metric.clone(), SemanticType::Numeric))),
        );
        let rows = self
            .rows
            .iter()
            .map(|r| {
                let mut values = r.key.clone();
                values.push(ScalarValue::Float64(r.value));
                Row::new(values)
            })
            .collect();
        Dataset::from_parts(schema, rows)
    }
}
