use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::engine::core::dataset::{Dataset, Row, Schema};
use crate::engine::errors::SourceError;
use crate::engine::types::{ScalarValue, SemanticType};

static MISSING: JsonValue = JsonValue::Null;

fn column_type(values: &[&JsonValue]) -> SemanticType {
    let mut saw_number = false;
    for v in values {
        match v {
            JsonValue::Null => {}
            JsonValue::Number(_) => saw_number = true,
            _ => return SemanticType::Categorical,
        }
    }
    if saw_number {
        SemanticType::Numeric
    } else {
        SemanticType::Categorical
    }
}

fn to_scalar(value: &JsonValue, ty: SemanticType) -> ScalarValue {
    match (value, ty) {
        (JsonValue::Null, _) => ScalarValue::Null,
        (JsonValue::Number(_), SemanticType::Numeric) => ScalarValue::from(value.clone()),
        (JsonValue::String(s), _) => ScalarValue::Utf8(s.clone()),
        (other, _) => ScalarValue::Utf8(other.to_string()),
    }
}

/// Build a dataset from flat JSON records.
///
/// Columns appear in first-seen order across records. A column whose non-null values
/// are all numbers is numeric, any other column is categorical with its values rendered
/// as text. Keys absent from a record become nulls.
pub fn dataset_from_records(records: &[Map<String, JsonValue>]) -> Result<Dataset, SourceError> {
    let mut columns: IndexMap<&str, Vec<&JsonValue>> = IndexMap::new();
    for record in records {
        for key in record.keys() {
            columns.entry(key.as_str()).or_default();
        }
    }

    for record in records {
        for (name, values) in columns.iter_mut() {
            values.push(record.get(*name).unwrap_or(&MISSING));
        }
    }

    let types: Vec<SemanticType> = columns.values().map(|v| column_type(v)).collect();
    let schema = Schema::from_columns(
        columns
            .keys()
            .zip(types.iter())
            .map(|(name, ty)| (name.to_string(), *ty)),
    );

    let rows = (0..records.len())
        .map(|i| {
            Row::new(
                columns
                    .values()
                    .zip(types.iter())
                    .map(|(values, ty)| to_scalar(values[i], *ty))
                    .collect(),
            )
        })
        .collect();

    Ok(Dataset::new(schema, rows)?)
}
