mod infer;
mod json_dir_source;
mod query_text;
mod static_source;

use crate::engine::core::dataset::Dataset;
use crate::engine::errors::SourceError;

pub use infer::dataset_from_records;
pub use json_dir_source::JsonDirSource;
pub use query_text::{bind_range, relation_name};
pub use static_source::StaticSource;

/// Anything that can answer a query text with a dataset.
///
/// Query texts are opaque to the pipeline; each source decides how to resolve them.
pub trait DataSource {
    fn query(&self, text: &str) -> Result<Dataset, SourceError>;
}

#[cfg(test)]
mod infer_test;
