use crate::engine::core::aggregate::{AggregatedResult, AggregatedRow};
use crate::engine::types::{ScalarValue, SemanticType};

pub struct AggregatedResultFactory {
    key_columns: Vec<(String, SemanticType)>,
    metric: String,
    rows: Vec<AggregatedRow>,
}

impl AggregatedResultFactory {
    pub fn new() -> Self {
        Self {
            key_columns: Vec::new(),
            metric: "metric".to_string(),
            rows: Vec::new(),
        }
    }

    /// Single categorical key with one row per (label, value)
    pub fn categories(column: &str, metric: &str, rows: &[(&str, f64)]) -> AggregatedResult {
        rows.iter()
            .fold(
                Self::new()
                    .with_key_column(column, SemanticType::Categorical)
                    .with_metric(metric),
                |f, (label, value)| f.with_row(vec![ScalarValue::from(*label)], *value),
            )
            .create()
    }

    pub fn with_key_column(mut self, name: &str, ty: SemanticType) -> Self {
        self.key_columns.push((name.to_string(), ty));
        self
    }

    pub fn with_metric(mut self, metric: &str) -> Self {
        self.metric = metric.to_string();
        self
    }

    pub fn with_row(mut self, key: Vec<ScalarValue>, value: f64) -> Self {
        self.rows.push(AggregatedRow::new(key, value));
        self
    }

    pub fn create(self) -> AggregatedResult {
        AggregatedResult::new(self.key_columns, self.metric, self.rows)
    }
}
