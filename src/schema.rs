//! Arrow column hints for metric values
//!
//! Writers that persist metrics in a columnar layout keep one nullable value
//! column per data type. This module names those columns and maps each data
//! type to its Arrow type; it does not build batches.

use crate::types::DataType;
use arrow_schema::{DataType as ArrowType, Field};

/// Standard value column names
pub const VALUE_STR_FIELD: &str = "value_str";
pub const VALUE_I32_FIELD: &str = "value_i32";
pub const VALUE_I64_FIELD: &str = "value_i64";
pub const VALUE_F64_FIELD: &str = "value_f64";
pub const VALUE_BOOL_FIELD: &str = "value_bool";

impl DataType {
    /// Arrow type that stores values of this kind
    pub fn arrow_type(&self) -> ArrowType {
        match self {
            DataType::String => ArrowType::Utf8,
            DataType::Int32 => ArrowType::Int32,
            DataType::Int64 => ArrowType::Int64,
            DataType::Float64 => ArrowType::Float64,
            DataType::Boolean => ArrowType::Boolean,
        }
    }

    /// Name of the value column for this kind
    pub fn value_field_name(&self) -> &'static str {
        match self {
            DataType::String => VALUE_STR_FIELD,
            DataType::Int32 => VALUE_I32_FIELD,
            DataType::Int64 => VALUE_I64_FIELD,
            DataType::Float64 => VALUE_F64_FIELD,
            DataType::Boolean => VALUE_BOOL_FIELD,
        }
    }
}

/// Nullable value column for the given data type
pub fn value_field(data_type: DataType) -> Field {
    Field::new(data_type.value_field_name(), data_type.arrow_type(), true)
}

/// One value column per data type, in code order
pub fn value_fields() -> Vec<Field> {
    DataType::ALL.into_iter().map(value_field).collect()
}
