use thiserror::Error;
use tracing::{debug, error};

/// Errors raised by the filter → aggregate → reshape pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("Cannot interpret '{value}' in column {column} as a date/time")]
    Parse { column: String, value: String },

    #[error("Schema mismatch on column {column}: {detail}")]
    SchemaMismatch { column: String, detail: String },

    #[error("No rows available to summarize {0}")]
    EmptyInput(String),

    #[error("Ambiguous join: category '{category}' maps to more than one {attribute} value")]
    AmbiguousJoin { category: String, attribute: String },

    #[error("Invalid range: lower bound {lower} is after upper bound {upper}")]
    InvalidRange { lower: String, upper: String },
}

impl PipelineError {
    pub fn missing_column(column: &str) -> Self {
        PipelineError::SchemaMismatch {
            column: column.to_string(),
            detail: "expected column is absent".to_string(),
        }
    }

    pub fn schema_mismatch(column: &str, detail: impl Into<String>) -> Self {
        PipelineError::SchemaMismatch {
            column: column.to_string(),
            detail: detail.into(),
        }
    }

    pub fn log_error(&self) {
        match self {
            PipelineError::Parse { column, value } => {
                error!("Time parse failed on column {}", column);
                debug!("Unparseable value: {:?}", value);
            }
            PipelineError::SchemaMismatch { column, detail } => {
                error!("Schema mismatch on column {}", column);
                debug!("Schema mismatch details: {}", detail);
            }
            PipelineError::EmptyInput(metric) => {
                error!("Empty input for summary metric {}", metric);
                debug!("Summary metric {} requested over zero rows", metric);
            }
            PipelineError::AmbiguousJoin {
                category,
                attribute,
            } => {
                error!("Ambiguous join on category {}", category);
                debug!("Category {} has several {} values", category, attribute);
            }
            PipelineError::InvalidRange { lower, upper } => {
                error!("Invalid instant range");
                debug!("Range lower={} upper={}", lower, upper);
            }
        }
    }
}

/// Errors raised while fetching a dataset from a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid dataset: {0}")]
    Pipeline(#[from] PipelineError),
}

impl SourceError {
    pub fn log_error(&self) {
        match self {
            SourceError::Io(e) => {
                error!("Data source I/O failed: {}", e);
                debug!("I/O error details: {:?}", e);
            }
            SourceError::Json(e) => {
                error!("Data source returned invalid JSON: {}", e);
                debug!("JSON error details: {:?}", e);
            }
            SourceError::UnknownQuery(q) => {
                error!("Data source does not know query");
                debug!("Unknown query text: {}", q);
            }
            SourceError::Decode(e) => {
                error!("Data source decode failed: {}", e);
                debug!("Decode error details: {}", e);
            }
            SourceError::Pipeline(e) => e.log_error(),
        }
    }
}

/// Errors surfaced by a dashboard render.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl DashboardError {
    pub fn log_error(&self) {
        match self {
            DashboardError::Source(e) => e.log_error(),
            DashboardError::Pipeline(e) => e.log_error(),
        }
    }
}
