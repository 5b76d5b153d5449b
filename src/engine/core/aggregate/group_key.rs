use chrono::NaiveDateTime;

use crate::engine::core::aggregate::plan::GroupingKey;
use crate::engine::core::dataset::{Row, Schema};
use crate::engine::errors::PipelineError;
use crate::engine::types::{ScalarValue, SemanticType};
use crate::shared::datetime::{TimeBucket, day_bucket, hour_bucket, hour_label};

/// Hashable form of a single grouping value
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GroupValue {
    Bool(bool),
    Int(i64),
    // f64 bit pattern of a non-integral value
    Float(u64),
    Str(String),
    Instant(NaiveDateTime),
}

impl GroupValue {
    /// Returns None for missing values: rows with a missing key form no group.
    pub fn from_scalar(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Null => None,
            ScalarValue::Boolean(b) => Some(GroupValue::Bool(*b)),
            ScalarValue::Int64(i) => Some(GroupValue::Int(*i)),
            ScalarValue::Float64(f) if f.is_nan() => None,
            // Integral floats share a group with the equal integer
            ScalarValue::Float64(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(GroupValue::Int(*f as i64))
            }
            ScalarValue::Float64(f) => Some(GroupValue::Float(f.to_bits())),
            ScalarValue::Utf8(s) => Some(GroupValue::Str(s.clone())),
            ScalarValue::Instant(ts) => Some(GroupValue::Instant(*ts)),
        }
    }

    pub fn to_scalar(&self) -> ScalarValue {
        match self {
            GroupValue::Bool(b) => ScalarValue::Boolean(*b),
            GroupValue::Int(i) => ScalarValue::Int64(*i),
            GroupValue::Float(bits) => ScalarValue::Float64(f64::from_bits(*bits)),
            GroupValue::Str(s) => ScalarValue::Utf8(s.clone()),
            GroupValue::Instant(ts) => ScalarValue::Instant(*ts),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GroupKey {
    pub(crate) values: Vec<GroupValue>,
}

impl GroupKey {
    pub fn to_scalars(&self) -> Vec<ScalarValue> {
        self.values.iter().map(GroupValue::to_scalar).collect()
    }
}

/// A grouping key resolved against a schema: column position plus bucketing.
#[derive(Debug, Clone)]
pub struct ResolvedKey {
    idx: usize,
    bucket: Option<TimeBucket>,
    pub(crate) output_name: String,
    pub(crate) output_type: SemanticType,
}

impl ResolvedKey {
    pub fn resolve(key: &GroupingKey, schema: &Schema) -> Result<Self, PipelineError> {
        let idx = schema.require(key.source())?;
        let source_type = schema.type_at(idx).unwrap_or(SemanticType::Categorical);
        let bucket = key.bucket();
        let output_type = match bucket {
            None => source_type,
            Some(_) if source_type != SemanticType::Instant => {
                return Err(PipelineError::schema_mismatch(
                    key.source(),
                    format!("time bucketing needs an instant column, found {}", source_type),
                ));
            }
            Some(TimeBucket::Day) => SemanticType::Instant,
            Some(TimeBucket::HourOfDay) => SemanticType::Categorical,
        };
        Ok(Self {
            idx,
            bucket,
            output_name: key.output_name().to_string(),
            output_type,
        })
    }

    fn value_of(&self, row: &Row) -> Option<GroupValue> {
        let value = row.get(self.idx)?;
        match self.bucket {
            None => GroupValue::from_scalar(value),
            Some(TimeBucket::Day) => value.as_instant().map(|ts| GroupValue::Instant(day_bucket(ts))),
            Some(TimeBucket::HourOfDay) => value
                .as_instant()
                .map(|ts| GroupValue::Str(hour_label(hour_bucket(ts)))),
        }
    }
}

/// Builds the grouping key of a row; None when any component is missing.
pub fn key_of(keys: &[ResolvedKey], row: &Row) -> Option<GroupKey> {
    let mut values = Vec::with_capacity(keys.len());
    for key in keys {
        values.push(key.value_of(row)?);
    }
    Some(GroupKey { values })
}
