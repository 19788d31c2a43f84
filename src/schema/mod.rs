//! Schema inference module
//!
//! Derives a row schema from a static type description, without any
//! instance data.
//!
//! # Classification order
//!
//! 1. Primitive (boxed or unboxed)
//! 2. Array (`i8[]` is `BYTES`)
//! 3. Collection → `ARRAY`
//! 4. Map → `MAP` (primitive keys only)
//! 5. Char sequence → `STRING`
//! 6. Instant → `DATETIME`
//! 7. Byte buffer → `BYTES`
//! 8. Anything else → nested `ROW`

mod inference;
mod primitives;
mod types;

pub use inference::{infer_schema, SchemaInferrer};
pub use primitives::{classify_primitive, primitive_for_kind};
pub use types::{Field, FieldType, Schema, SchemaBuilder, TypeName};
