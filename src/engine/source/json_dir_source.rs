use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::engine::core::dataset::Dataset;
use crate::engine::errors::SourceError;
use crate::engine::source::DataSource;
use crate::engine::source::infer::dataset_from_records;
use crate::engine::source::query_text::relation_name;

/// Reads `<dir>/<relation>.json` files holding arrays of flat JSON objects.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a query text is answered from.
    pub fn path_for(&self, text: &str) -> Result<PathBuf, SourceError> {
        let name = relation_name(text);
        if name.is_empty() {
            return Err(SourceError::UnknownQuery(text.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }

    fn read_records(path: &Path) -> Result<Vec<Map<String, JsonValue>>, SourceError> {
        let reader = BufReader::new(File::open(path)?);
        let value: JsonValue = serde_json::from_reader(reader)?;

        let JsonValue::Array(items) = value else {
            return Err(SourceError::Decode(format!(
                "{} does not hold a JSON array",
                path.display()
            )));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                JsonValue::Object(map) => Ok(map),
                other => Err(SourceError::Decode(format!(
                    "record {} of {} is not an object: {}",
                    i,
                    path.display(),
                    other
                ))),
            })
            .collect()
    }
}

impl DataSource for JsonDirSource {
    fn query(&self, text: &str) -> Result<Dataset, SourceError> {
        let path = self.path_for(text)?;
        let records = Self::read_records(&path)?;
        let dataset = dataset_from_records(&records)?;

        debug!(
            target: "warehouse_dash::source",
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.schema().len(),
            "Loaded JSON dataset"
        );
        Ok(dataset)
    }
}
