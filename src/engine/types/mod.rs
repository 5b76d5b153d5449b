use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

/// Wire format used when an instant is rendered as text.
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Semantic type of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Categorical,
    Numeric,
    Instant,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Categorical => "Categorical",
            SemanticType::Numeric => "Numeric",
            SemanticType::Instant => "Instant",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    Instant(NaiveDateTime),
    Utf8(String),
}

impl ScalarValue {
    pub fn to_json(&self) -> JsonValue {
        match self {
            ScalarValue::Null => JsonValue::Null,
            ScalarValue::Boolean(b) => JsonValue::Bool(*b),
            ScalarValue::Int64(i) => JsonValue::Number(Number::from(*i)),
            ScalarValue::Float64(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ScalarValue::Instant(ts) => JsonValue::String(ts.format(INSTANT_FORMAT).to_string()),
            ScalarValue::Utf8(s) => JsonValue::String(s.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Null or NaN. Both sort after every present value.
    pub fn is_missing(&self) -> bool {
        match self {
            ScalarValue::Null => true,
            ScalarValue::Float64(f) => f.is_nan(),
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarValue::Int64(_) | ScalarValue::Float64(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the value. Strings are not coerced: a metric cell holding
    /// text counts as non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Float64(f) => Some(*f),
            ScalarValue::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<NaiveDateTime> {
        match self {
            ScalarValue::Instant(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Convert to string representation directly (no JsonValue intermediate).
    pub fn to_string_repr(&self) -> String {
        match self {
            ScalarValue::Null => String::new(),
            ScalarValue::Boolean(b) => b.to_string(),
            ScalarValue::Int64(i) => i.to_string(),
            ScalarValue::Float64(f) => f.to_string(),
            ScalarValue::Instant(ts) => ts.format(INSTANT_FORMAT).to_string(),
            ScalarValue::Utf8(s) => s.clone(),
        }
    }

    /// Total order used for sorting rows: nulls last, NaN after every number, then
    /// numbers, instants and text within their own kind.
    pub fn compare(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        match (self, other) {
            (ScalarValue::Null, ScalarValue::Null) => Ordering::Equal,
            (ScalarValue::Null, _) => Ordering::Greater,
            (_, ScalarValue::Null) => Ordering::Less,
            (ScalarValue::Instant(a), ScalarValue::Instant(b)) => a.cmp(b),
            _ => {
                if let (Some(va), Some(vb)) = (self.as_f64(), other.as_f64()) {
                    return match (va.is_nan(), vb.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        (false, false) => va.partial_cmp(&vb).unwrap_or(Ordering::Equal),
                    };
                }
                self.to_string_repr().cmp(&other.to_string_repr())
            }
        }
    }
}

impl From<JsonValue> for ScalarValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ScalarValue::Null,
            JsonValue::Bool(b) => ScalarValue::Boolean(b),
            JsonValue::Number(num) => {
                if let Some(i) = num.as_i64() {
                    ScalarValue::Int64(i)
                } else if let Some(f) = num.as_f64() {
                    ScalarValue::Float64(f)
                } else {
                    ScalarValue::Utf8(num.to_string())
                }
            }
            JsonValue::String(s) => ScalarValue::Utf8(s),
            JsonValue::Array(_) | JsonValue::Object(_) => {
                // Nested JSON is flattened to its text form
                ScalarValue::Utf8(value.to_string())
            }
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Utf8(value.to_string())
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float64(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int64(value)
    }
}

impl From<NaiveDateTime> for ScalarValue {
    fn from(value: NaiveDateTime) -> Self {
        ScalarValue::Instant(value)
    }
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScalarValue::Null => serializer.serialize_unit(),
            ScalarValue::Boolean(b) => serializer.serialize_bool(*b),
            ScalarValue::Int64(i) => serializer.serialize_i64(*i),
            ScalarValue::Float64(f) => serializer.serialize_f64(*f),
            ScalarValue::Instant(ts) => {
                serializer.serialize_str(&ts.format(INSTANT_FORMAT).to_string())
            }
            ScalarValue::Utf8(s) => serializer.serialize_str(s),
        }
    }
}
