use std::sync::Arc;

use crate::engine::core::dataset::schema::Schema;
use crate::engine::errors::PipelineError;
use crate::engine::types::{ScalarValue, SemanticType};

/// One record of a dataset; values are positionally aligned with the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<ScalarValue>,
}

impl Row {
    pub fn new(values: Vec<ScalarValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, idx: usize) -> Option<&ScalarValue> {
        self.values.get(idx)
    }

    pub fn values(&self) -> &[ScalarValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn set(&mut self, idx: usize, value: ScalarValue) {
        if let Some(slot) = self.values.get_mut(idx) {
            *slot = value;
        }
    }
}

impl From<Vec<ScalarValue>> for Row {
    fn from(values: Vec<ScalarValue>) -> Self {
        Row::new(values)
    }
}

/// Immutable, schema-tagged ordered sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Arc<Schema>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, checking that every row carries one value per column and that
    /// numeric columns hold only numbers or missing values.
    pub fn new(schema: Schema, rows: Vec<Row>) -> Result<Self, PipelineError> {
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != schema.len() {
                // The first column the row fails to cover, or the overflow marker
                let column = schema.name_at(row.len()).unwrap_or("<extra>");
                return Err(PipelineError::schema_mismatch(
                    column,
                    format!(
                        "row {} has {} values, schema declares {} columns",
                        row_idx,
                        row.len(),
                        schema.len()
                    ),
                ));
            }
            for (col_idx, (name, ty)) in schema.iter().enumerate() {
                if ty == SemanticType::Numeric {
                    let value = &row.values[col_idx];
                    if !(value.is_null() || value.is_numeric()) {
                        return Err(PipelineError::schema_mismatch(
                            name,
                            format!("row {} holds non-numeric value {:?}", row_idx, value),
                        ));
                    }
                }
            }
        }
        Ok(Self {
            schema: Arc::new(schema),
            rows,
        })
    }

    pub fn empty(schema: Schema) -> Self {
        Self {
            schema: Arc::new(schema),
            rows: Vec::new(),
        }
    }

    /// Derive a dataset sharing this schema from rows already known to conform to it.
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            rows,
        }
    }

    pub(crate) fn from_parts(schema: Schema, rows: Vec<Row>) -> Self {
        Self {
            schema: Arc::new(schema),
            rows,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&ScalarValue>, PipelineError> {
        let idx = self.schema.require(name)?;
        Ok(self.rows.iter().filter_map(|r| r.get(idx)).collect())
    }

    /// Distinct non-missing values of a column in first-seen order.
    pub fn unique_values(&self, name: &str) -> Result<Vec<ScalarValue>, PipelineError> {
        let idx = self.schema.require(name)?;
        let mut seen: Vec<ScalarValue> = Vec::new();
        for row in &self.rows {
            if let Some(value) = row.get(idx) {
                if !value.is_null() && !seen.contains(value) {
                    seen.push(value.clone());
                }
            }
        }
        Ok(seen)
    }

    /// Rows stably sorted by one column.
    pub fn sorted_by(&self, name: &str, ascending: bool) -> Result<Dataset, PipelineError> {
        let idx = self.schema.require(name)?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            let (va, vb) = (&a.values[idx], &b.values[idx]);
            if ascending {
                va.compare(vb)
            } else {
                // Keep missing values last in both directions
                match (va.is_missing(), vb.is_missing()) {
                    (false, false) => vb.compare(va),
                    _ => va.compare(vb),
                }
            }
        });
        Ok(self.with_rows(rows))
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Dataset {
        self.with_rows(self.rows.iter().take(n).cloned().collect())
    }

    pub(crate) fn into_parts(self) -> (Schema, Vec<Row>) {
        let schema = Arc::try_unwrap(self.schema).unwrap_or_else(|shared| (*shared).clone());
        (schema, self.rows)
    }
}
