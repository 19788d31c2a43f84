//! Member extraction module
//!
//! The engine learns the members of a composite type from a pluggable
//! strategy. Any `Fn(&H) -> Result<Vec<FieldDescriptor<H>>>` works; the
//! strategies here read declarations from a `TypeRegistry`.
//!
//! # Strategies
//!
//! - **Fields**: public fields in declaration order
//! - **Getters**: methods declared as getters, `getX`/`isX` → `x`
//! - **Setters**: methods declared as setters, `setX` → `x`
//! - **Annotated**: members carrying the schema-field annotation
//!
//! Accessors that break the naming or arity conventions are reported as
//! errors, never skipped.

mod accessor;
mod strategies;
mod types;

pub use accessor::{
    accessor_field_name, check_arity, getter_field_name, setter_field_name, strip_prefix,
};
pub use strategies::{Accessors, Annotated, ExtractionStrategy, PublicFields};
pub use types::{FieldDescriptor, MemberExtractor};
