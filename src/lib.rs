// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_pass_by_value)]

//! # rowschema
//!
//! Static type-to-schema inference: derive a row schema (an ordered tree of
//! named, typed fields) from a declared record type, without any instance
//! data.
//!
//! ## Features
//!
//! - **Shape Classification**: Primitives, byte blobs, arrays, collections,
//!   maps, strings, instants and nested rows
//! - **Pluggable Extraction**: Public fields, getters, setters, annotated
//!   members, or any closure
//! - **Strict Failures**: Raw generics, non-primitive map keys, malformed
//!   accessors, abstract types and cyclic rows are errors, never guesses
//! - **Declarative Types**: YAML type catalogs backed by a type registry
//! - **Arrow Output**: Map inferred schemas onto Arrow schemas
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowschema::{infer_schema, load_catalog_from_str, ExtractionStrategy, Result};
//!
//! fn main() -> Result<()> {
//!     let catalog = load_catalog_from_str(r#"
//! types:
//!   - name: Inner
//!     fields:
//!       - { name: x, type: i64 }
//!   - name: Outer
//!     fields:
//!       - { name: inner, type: Inner }
//! "#)?;
//!
//!     let outer = catalog.handle("Outer")?;
//!     let schema = infer_schema(&outer, &ExtractionStrategy::Fields)?;
//!     println!("{schema}"); // inner ROW<x INT64>
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  extract(type)   ┌────────────────────┐
//! │   Strategy   │ ───────────────▶ │  FieldDescriptor*  │
//! │ fields/get/  │                  └─────────┬──────────┘
//! │ set/annotated│                            │ classify
//! └──────▲───────┘                  ┌─────────▼──────────┐
//!        │ row fallback (recurse)   │   SchemaInferrer   │──▶ Schema
//!        └──────────────────────────┤ primitive → array →│
//!                                   │ collection → map → │
//!                                   │ string → instant → │
//!                                   │ bytes → row        │
//!                                   └────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and the `TypeHandle` abstraction
pub mod types;

/// Inference configuration
pub mod config;

/// Schema model and the inference engine
pub mod schema;

/// Member extraction strategies
pub mod extract;

/// Declarative host type system
pub mod reflect;

/// YAML loader for type catalogs
pub mod loader;

/// Arrow and JSON output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::InferenceConfig;
pub use extract::{ExtractionStrategy, FieldDescriptor, MemberExtractor};
pub use loader::{load_catalog, load_catalog_from_str, Catalog};
pub use reflect::{TypeDescriptor, TypeRegistry};
pub use schema::{infer_schema, Field, FieldType, Schema, SchemaInferrer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
