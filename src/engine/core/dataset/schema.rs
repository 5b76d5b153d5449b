use indexmap::IndexMap;

use crate::engine::errors::PipelineError;
use crate::engine::types::SemanticType;

/// Ordered column name → semantic type mapping shared by every row of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: IndexMap<String, SemanticType>,
}

impl Schema {
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, SemanticType)>,
        S: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, ty: SemanticType) -> Self {
        self.columns.insert(name.into(), ty);
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Resolve a column position, failing with `SchemaMismatch` when it is absent.
    pub fn require(&self, name: &str) -> Result<usize, PipelineError> {
        self.index_of(name)
            .ok_or_else(|| PipelineError::missing_column(name))
    }

    pub fn type_of(&self, name: &str) -> Option<SemanticType> {
        self.columns.get(name).copied()
    }

    pub fn type_at(&self, idx: usize) -> Option<SemanticType> {
        self.columns.get_index(idx).map(|(_, ty)| *ty)
    }

    pub fn name_at(&self, idx: usize) -> Option<&str> {
        self.columns.get_index(idx).map(|(name, _)| name.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SemanticType)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn set_type(&mut self, idx: usize, ty: SemanticType) {
        if let Some((_, slot)) = self.columns.get_index_mut(idx) {
            *slot = ty;
        }
    }
}
