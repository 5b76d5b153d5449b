use ahash::RandomState as AHashRandomState;
use indexmap::IndexMap;
use tracing::debug;

use crate::engine::core::dataset::Dataset;
use crate::engine::errors::SourceError;
use crate::engine::source::DataSource;
use crate::engine::source::query_text::relation_name;

/// In-memory source answering queries from pre-built datasets.
///
/// A query resolves by its exact text first, then by its relation name, so a dataset
/// registered as `metering_history` answers every windowed metering query.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    datasets: IndexMap<String, Dataset, AHashRandomState>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(mut self, query: &str, dataset: Dataset) -> Self {
        self.insert(query, dataset);
        self
    }

    pub fn insert(&mut self, query: &str, dataset: Dataset) {
        self.datasets.insert(query.to_string(), dataset);
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl DataSource for StaticSource {
    fn query(&self, text: &str) -> Result<Dataset, SourceError> {
        let dataset = self
            .datasets
            .get(text)
            .or_else(|| self.datasets.get(relation_name(text)))
            .ok_or_else(|| SourceError::UnknownQuery(text.to_string()))?;

        debug!(
            target: "warehouse_dash::source",
            query = %text,
            rows = dataset.len(),
            "Served static dataset"
        );
        Ok(dataset.clone())
    }
}
