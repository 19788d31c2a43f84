//! Output module
//!
//! Encodings of an inferred schema. `Schema` itself carries no
//! serialization; these adapters sit outside it.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Mapping schemas to Arrow schemas
//! - Rendering schemas as JSON
//! - Rendering schemas as an indented text tree

mod mapping;
mod render;

pub use mapping::{field_type_to_arrow, to_arrow_schema, DECIMAL_PRECISION, DECIMAL_SCALE};
pub use render::{field_type_to_json, render_pretty, schema_to_json, schema_to_json_pretty};
