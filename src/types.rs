//! Common types used throughout rowschema
//!
//! This module contains the vocabulary shared between the inference engine
//! and any host type system plugged into it: primitive kinds, raw kinds,
//! capability tags and the `TypeHandle` abstraction itself.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Primitive Kinds
// ============================================================================

/// Scalar kinds recognized by the primitive lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Byte,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Boolean,
    Decimal,
}

impl PrimitiveKind {
    /// Every primitive kind, in table order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
        PrimitiveKind::Decimal,
    ];

    /// Spelling of the unboxed form in type expressions.
    ///
    /// Decimal has no unboxed form.
    pub fn unboxed_name(self) -> Option<&'static str> {
        match self {
            PrimitiveKind::Byte => Some("i8"),
            PrimitiveKind::Int16 => Some("i16"),
            PrimitiveKind::Int32 => Some("i32"),
            PrimitiveKind::Int64 => Some("i64"),
            PrimitiveKind::Float => Some("f32"),
            PrimitiveKind::Double => Some("f64"),
            PrimitiveKind::Boolean => Some("bool"),
            PrimitiveKind::Decimal => None,
        }
    }

    /// Spelling of the boxed form in type expressions
    pub fn boxed_name(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "Int8",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::Float => "Float32",
            PrimitiveKind::Double => "Float64",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Decimal => "Decimal",
        }
    }

    /// Look up a primitive by its unboxed spelling
    pub fn from_unboxed_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.unboxed_name() == Some(name))
    }

    /// Look up a primitive by its boxed spelling
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.boxed_name() == name)
    }
}

// ============================================================================
// Raw Kinds
// ============================================================================

/// Identity of a declared type, ignoring generic arguments
///
/// Boxed and unboxed forms of the same primitive are distinct raw kinds; the
/// primitive lookup table maps both to the same field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawKind {
    /// Unboxed primitive (e.g. `i32`)
    Primitive(PrimitiveKind),
    /// Boxed, nullable-capable primitive (e.g. `Int32`)
    Boxed(PrimitiveKind),
    /// Array of some raw component kind
    Array(Box<RawKind>),
    /// Any other declared type, keyed by its qualified name
    Declared(String),
    /// An unbound type variable
    Variable(String),
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKind::Primitive(k) => match k.unboxed_name() {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "{}", k.boxed_name()),
            },
            RawKind::Boxed(k) => write!(f, "{}", k.boxed_name()),
            RawKind::Array(component) => write!(f, "{component}[]"),
            RawKind::Declared(name) | RawKind::Variable(name) => write!(f, "{name}"),
        }
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Structural capabilities a type handle can report
///
/// These replace open-ended subtype checks: a host resolves them once per
/// type and the engine only asks yes/no questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Iterable collection of one element type
    Collection,
    /// Key/value mapping
    Map,
    /// Character sequence
    CharSequence,
    /// Point on the time line
    Instant,
    /// Opaque byte buffer
    ByteBuffer,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Collection => write!(f, "collection"),
            Capability::Map => write!(f, "map"),
            Capability::CharSequence => write!(f, "char_sequence"),
            Capability::Instant => write!(f, "instant"),
            Capability::ByteBuffer => write!(f, "byte_buffer"),
        }
    }
}

// ============================================================================
// Accessor Kinds
// ============================================================================

/// Role of an accessor method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorKind::Getter => write!(f, "getter"),
            AccessorKind::Setter => write!(f, "setter"),
        }
    }
}

// ============================================================================
// Type Handle
// ============================================================================

/// Read-only view of a type in some host type system
///
/// Handles are inspected for shape only; the engine never needs an instance.
/// Implementations should be cheap to clone.
pub trait TypeHandle: Clone + fmt::Debug {
    /// Identity of the underlying declared type, ignoring generic arguments
    fn raw_kind(&self) -> RawKind;

    /// Whether this handle is an array type
    fn is_array(&self) -> bool;

    /// Component type of an array handle
    fn component_type(&self) -> Option<Self>;

    /// Whether this type has the given structural capability
    fn is_subtype_of(&self, capability: Capability) -> bool;

    /// Generic arguments of this handle.
    ///
    /// `None` means the type is used raw (erased); `Some(vec![])` means it is
    /// not generic at all.
    fn type_parameters(&self) -> Option<Vec<Self>>;

    /// Generic arguments as seen through the supertype that provides
    /// `capability` (e.g. the element type of a list subclass).
    fn type_parameters_for(&self, capability: Capability) -> Option<Vec<Self>> {
        let _ = capability;
        self.type_parameters()
    }

    /// This handle with its generic arguments dropped
    fn erased(&self) -> Self;

    /// Whether the type lacks a concrete member layout (interfaces, abstract
    /// types, unbound variables)
    fn is_abstract(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_boxed_name(kind.boxed_name()), Some(kind));
            if let Some(name) = kind.unboxed_name() {
                assert_eq!(PrimitiveKind::from_unboxed_name(name), Some(kind));
            }
        }
        assert_eq!(PrimitiveKind::from_unboxed_name("decimal"), None);
    }

    #[test]
    fn test_raw_kind_display() {
        assert_eq!(RawKind::Primitive(PrimitiveKind::Int32).to_string(), "i32");
        assert_eq!(RawKind::Boxed(PrimitiveKind::Int32).to_string(), "Int32");
        assert_eq!(
            RawKind::Array(Box::new(RawKind::Primitive(PrimitiveKind::Byte))).to_string(),
            "i8[]"
        );
        assert_eq!(RawKind::Declared("Order".to_string()).to_string(), "Order");
    }

    #[test]
    fn test_capability_serde() {
        let cap: Capability = serde_json::from_str("\"char_sequence\"").unwrap();
        assert_eq!(cap, Capability::CharSequence);
        assert_eq!(Capability::ByteBuffer.to_string(), "byte_buffer");
    }
}
