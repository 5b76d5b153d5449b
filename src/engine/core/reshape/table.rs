use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::engine::core::dataset::Dataset;

/// Raw tabular view of a dataset, values rendered as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<JsonValue>>,
}

impl TableView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&JsonValue>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().filter_map(|r| r.get(idx)).collect())
    }
}

impl From<&Dataset> for TableView {
    fn from(dataset: &Dataset) -> Self {
        table(dataset)
    }
}

pub fn table(dataset: &Dataset) -> TableView {
    TableView {
        columns: dataset.schema().names().map(str::to_string).collect(),
        rows: dataset
            .rows()
            .iter()
            .map(|row| row.values().iter().map(|v| v.to_json()).collect())
            .collect(),
    }
}
