//! YAML Loader module
//!
//! Parse type catalogs from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `CatalogDefinition` - Declarative list of types
//! - `TypeDefinition` - One type with its fields and methods
//! - YAML parsing with validation into a `TypeRegistry`
//!
//! # Example
//!
//! ```yaml
//! inference:
//!   max_depth: 16
//! types:
//!   - name: Order
//!     fields:
//!       - { name: id, type: i64 }
//!       - { name: tags, type: "List<String>" }
//!       - { name: note, type: String, nullable: true }
//! ```

mod parser;
mod types;

pub use parser::{load_catalog, load_catalog_from_str, Catalog};
pub use types::{
    CatalogDefinition, FieldDefinition, KindDefinition, MethodDefinition, ParamDefinition,
    TypeDefinition,
};
