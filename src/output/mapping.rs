//! Arrow schema mapping
//!
//! Maps inferred schemas onto Arrow data types so they can drive Arrow or
//! Parquet writers downstream.

use crate::schema::{FieldType, Schema};
use arrow::datatypes::{
    DataType, Field as ArrowField, Fields, Schema as ArrowSchema, TimeUnit,
};
use std::sync::Arc;

/// Precision used for `DECIMAL` fields
pub const DECIMAL_PRECISION: u8 = 38;

/// Scale used for `DECIMAL` fields
pub const DECIMAL_SCALE: i8 = 10;

/// Convert a schema to an Arrow schema
pub fn to_arrow_schema(schema: &Schema) -> ArrowSchema {
    ArrowSchema::new(to_arrow_fields(schema))
}

fn to_arrow_fields(schema: &Schema) -> Fields {
    schema
        .iter()
        .map(|f| ArrowField::new(&f.name, field_type_to_arrow(&f.field_type), f.nullable))
        .collect::<Vec<_>>()
        .into()
}

/// Convert a field type to an Arrow data type
///
/// Array elements and map values are nullable; map keys are not.
pub fn field_type_to_arrow(field_type: &FieldType) -> DataType {
    match field_type {
        FieldType::Byte => DataType::Int8,
        FieldType::Int16 => DataType::Int16,
        FieldType::Int32 => DataType::Int32,
        FieldType::Int64 => DataType::Int64,
        FieldType::Float => DataType::Float32,
        FieldType::Double => DataType::Float64,
        FieldType::Boolean => DataType::Boolean,
        FieldType::Decimal => DataType::Decimal128(DECIMAL_PRECISION, DECIMAL_SCALE),
        FieldType::String => DataType::Utf8,
        FieldType::DateTime => DataType::Timestamp(TimeUnit::Millisecond, Some("UTC".into())),
        FieldType::Bytes => DataType::Binary,
        FieldType::Array(element) => DataType::List(Arc::new(ArrowField::new(
            "item",
            field_type_to_arrow(element),
            true,
        ))),
        FieldType::Map(key, value) => {
            let entries = Fields::from(vec![
                ArrowField::new("key", field_type_to_arrow(key), false),
                ArrowField::new("value", field_type_to_arrow(value), true),
            ]);
            DataType::Map(
                Arc::new(ArrowField::new("entries", DataType::Struct(entries), false)),
                false,
            )
        }
        FieldType::Row(schema) => DataType::Struct(to_arrow_fields(schema)),
    }
}
