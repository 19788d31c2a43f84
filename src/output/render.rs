//! JSON and text rendering of schemas

use crate::error::Result;
use crate::schema::{FieldType, Schema};
use serde_json::{json, Value};
use std::fmt::Write;

/// Convert a schema to a JSON value
///
/// Scalar types render as their name; composite types as objects:
///
/// ```json
/// {"fields": [
///   {"name": "tags", "type": {"type": "ARRAY", "element": "STRING"}, "nullable": false}
/// ]}
/// ```
pub fn schema_to_json(schema: &Schema) -> Value {
    json!({ "fields": fields_to_json(schema) })
}

fn fields_to_json(schema: &Schema) -> Vec<Value> {
    schema
        .iter()
        .map(|f| {
            json!({
                "name": f.name,
                "type": field_type_to_json(&f.field_type),
                "nullable": f.nullable,
            })
        })
        .collect()
}

/// Convert a field type to a JSON value
pub fn field_type_to_json(field_type: &FieldType) -> Value {
    match field_type {
        FieldType::Array(element) => json!({
            "type": "ARRAY",
            "element": field_type_to_json(element),
        }),
        FieldType::Map(key, value) => json!({
            "type": "MAP",
            "key": field_type_to_json(key),
            "value": field_type_to_json(value),
        }),
        FieldType::Row(schema) => json!({
            "type": "ROW",
            "fields": fields_to_json(schema),
        }),
        scalar => Value::String(scalar.type_name().to_string()),
    }
}

/// Convert a schema to a pretty JSON string
pub fn schema_to_json_pretty(schema: &Schema) -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_to_json(schema))?)
}

/// Render a schema as an indented tree
///
/// ```text
/// id: INT64
/// customer: ROW
///   name: STRING
///   email: STRING (nullable)
/// ```
pub fn render_pretty(schema: &Schema) -> String {
    let mut out = String::new();
    render_fields(schema, 0, &mut out);
    out
}

fn render_fields(schema: &Schema, indent: usize, out: &mut String) {
    for field in schema {
        let pad = "  ".repeat(indent);
        let suffix = if field.nullable { " (nullable)" } else { "" };
        match &field.field_type {
            FieldType::Row(nested) => {
                let _ = writeln!(out, "{pad}{}: ROW{suffix}", field.name);
                render_fields(nested, indent + 1, out);
            }
            other => {
                let _ = writeln!(out, "{pad}{}: {other}{suffix}", field.name);
            }
        }
    }
}
