//! Primitive lookup table

use super::types::FieldType;
use crate::types::{PrimitiveKind, RawKind, TypeHandle};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Raw kinds that classify directly, boxed and unboxed alike
static PRIMITIVE_TYPES: LazyLock<HashMap<RawKind, FieldType>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for kind in PrimitiveKind::ALL {
        let field_type = primitive_field_type(kind);
        m.insert(RawKind::Boxed(kind), field_type.clone());
        if kind.unboxed_name().is_some() {
            m.insert(RawKind::Primitive(kind), field_type);
        }
    }
    m
});

fn primitive_field_type(kind: PrimitiveKind) -> FieldType {
    match kind {
        PrimitiveKind::Byte => FieldType::Byte,
        PrimitiveKind::Int16 => FieldType::Int16,
        PrimitiveKind::Int32 => FieldType::Int32,
        PrimitiveKind::Int64 => FieldType::Int64,
        PrimitiveKind::Float => FieldType::Float,
        PrimitiveKind::Double => FieldType::Double,
        PrimitiveKind::Boolean => FieldType::Boolean,
        PrimitiveKind::Decimal => FieldType::Decimal,
    }
}

/// Classify a raw kind against the primitive table
pub fn primitive_for_kind(kind: &RawKind) -> Option<FieldType> {
    PRIMITIVE_TYPES.get(kind).cloned()
}

/// Classify a handle if its raw kind is a primitive
pub fn classify_primitive<H: TypeHandle>(type_handle: &H) -> Option<FieldType> {
    primitive_for_kind(&type_handle.raw_kind())
}
