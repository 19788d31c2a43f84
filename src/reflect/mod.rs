//! Declarative host type system
//!
//! Rust has no runtime reflection, so types are declared up front: a
//! `TypeRegistry` holds `TypeDef`s and hands out `TypeDescriptor`s, which
//! implement `TypeHandle` for the inference engine.
//!
//! # Built-ins
//!
//! | Type           | Capability      |
//! |----------------|-----------------|
//! | `String`       | char_sequence   |
//! | `Instant`, `DateTime` | instant  |
//! | `ByteBuffer`   | byte_buffer     |
//! | `Collection<E>`, `List<E>`, `Set<E>` | collection |
//! | `Map<K, V>`, `HashMap<K, V>` | map |
//!
//! Capabilities are inherited through supertypes and resolved once when the
//! registry is built.

mod handle;
mod parser;
mod registry;
mod types;

pub use handle::TypeDescriptor;
pub use parser::{is_reserved_name, parse_type_expr};
pub use registry::{TypeRegistry, TypeRegistryBuilder, BUILTIN_TYPES};
pub use types::{
    is_ignored, is_nullable, schema_field, Annotation, FieldDef, MethodDef, ParamDef, TypeDef,
    TypeDefKind, TypeExpr,
};

#[cfg(test)]
mod tests;
