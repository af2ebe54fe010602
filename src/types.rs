//! Data type classification for metric values
//!
//! Every metric value belongs to exactly one of five kinds. Typed values
//! ([`MetricValue`]) classify at compile time; values arriving from untyped
//! sources go through [`classify_json`], which is the only fallible path.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Closed set of metric value kinds.
///
/// Serialized as the single-letter code (`S`, `I`, `L`, `D`, `B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "S")]
    String,
    #[serde(rename = "I")]
    Int32,
    #[serde(rename = "L")]
    Int64,
    #[serde(rename = "D")]
    Float64,
    #[serde(rename = "B")]
    Boolean,
}

impl DataType {
    /// All data types, in code order
    pub const ALL: [DataType; 5] = [
        DataType::String,
        DataType::Int32,
        DataType::Int64,
        DataType::Float64,
        DataType::Boolean,
    ];

    /// Single-letter code used when the type is stored alongside a value
    pub fn code(&self) -> &'static str {
        match self {
            DataType::String => "S",
            DataType::Int32 => "I",
            DataType::Int64 => "L",
            DataType::Float64 => "D",
            DataType::Boolean => "B",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Float64 => "Float64",
            DataType::Boolean => "Boolean",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64 | DataType::Float64)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, DataType::String)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, DataType::Boolean)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    /// Accepts either the single-letter code or the type name.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let value = value.trim();
        if let Some(data_type) = DataType::ALL.into_iter().find(|t| t.code() == value) {
            return Ok(data_type);
        }
        DataType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::InvalidDataType(value.to_string()))
    }
}

/// Membership test against the closed set.
///
/// Any constructed `DataType` is known; this exists for call sites that
/// validate tags they did not classify themselves.
pub fn is_known_tag(data_type: DataType) -> bool {
    DataType::ALL.contains(&data_type)
}

/// Check whether an externally supplied code names a known data type
pub fn is_known_code(code: &str) -> bool {
    DataType::ALL.iter().any(|t| t.code() == code)
}

/// A metric value of one of the supported kinds
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    String(String),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Boolean(bool),
}

impl MetricValue {
    /// Data type of this value. Total over all values.
    pub fn data_type(&self) -> DataType {
        match self {
            MetricValue::String(_) => DataType::String,
            MetricValue::Int32(_) => DataType::Int32,
            MetricValue::Int64(_) => DataType::Int64,
            MetricValue::Float64(_) => DataType::Float64,
            MetricValue::Boolean(_) => DataType::Boolean,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Int32(v) => Some(*v as f64),
            MetricValue::Int64(v) => Some(*v as f64),
            MetricValue::Float64(v) => Some(*v),
            MetricValue::String(_) | MetricValue::Boolean(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetricValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetricValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::String(s) => f.write_str(s),
            MetricValue::Int32(v) => write!(f, "{}", v),
            MetricValue::Int64(v) => write!(f, "{}", v),
            MetricValue::Float64(v) => write!(f, "{}", v),
            MetricValue::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::String(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::String(value.to_string())
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        MetricValue::Int32(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Int64(value)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Float64(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Boolean(value)
    }
}

impl TryFrom<&serde_json::Value> for MetricValue {
    type Error = Error;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(MetricValue::String(s.clone())),
            Value::Bool(b) => Ok(MetricValue::Boolean(*b)),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(MetricValue::Int64(v))
                } else if n.is_u64() {
                    // Beyond i64::MAX; no lossless kind for it
                    Err(unsupported(format!("integer {} out of range", n)))
                } else {
                    n.as_f64()
                        .map(MetricValue::Float64)
                        .ok_or_else(|| unsupported(format!("number {}", n)))
                }
            }
            Value::Null => Err(unsupported("null".to_string())),
            Value::Array(_) => Err(unsupported("array".to_string())),
            Value::Object(_) => Err(unsupported("object".to_string())),
        }
    }
}

impl TryFrom<serde_json::Value> for MetricValue {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(MetricValue::String(s)),
            other => MetricValue::try_from(&other),
        }
    }
}

fn unsupported(kind: String) -> Error {
    debug!(kind = %kind, "Rejecting metric value of unsupported kind");
    Error::UnsupportedType(kind)
}

/// Classify a typed value. Never fails.
pub fn classify(value: &MetricValue) -> DataType {
    value.data_type()
}

/// Classify a value from an untyped source.
///
/// JSON integers that fit in `i64` classify as `Int64`; other numbers as
/// `Float64`. `null`, arrays and objects are rejected.
pub fn classify_json(value: &serde_json::Value) -> Result<DataType> {
    MetricValue::try_from(value).map(|v| v.data_type())
}
