//! Loader types
//!
//! Declarative type catalog definitions for YAML parsing.

use crate::config::InferenceConfig;
use crate::types::{AccessorKind, Capability};
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Definition
// ============================================================================

/// Top-level catalog definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogDefinition {
    /// Catalog version
    #[serde(default = "default_version")]
    pub version: String,
    /// Inference settings
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Type declarations
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

fn default_version() -> String {
    "1.0".to_string()
}

// ============================================================================
// Type Definition
// ============================================================================

/// Declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindDefinition {
    #[default]
    Class,
    Interface,
    Abstract,
}

/// One declared type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeDefinition {
    /// Type name
    pub name: String,
    /// Declaration kind
    #[serde(default)]
    pub kind: KindDefinition,
    /// Generic type variables
    #[serde(default)]
    pub params: Vec<String>,
    /// Supertype expressions (e.g. `List<String>`)
    #[serde(default)]
    pub extends: Vec<String>,
    /// Capabilities declared directly
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    /// Fields
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Methods
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

// ============================================================================
// Member Definitions
// ============================================================================

/// Field declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Type expression
    #[serde(rename = "type")]
    pub type_expr: String,
    /// Visible to the public-field strategy
    #[serde(default = "default_true")]
    pub public: bool,
    /// Marked nullable
    #[serde(default)]
    pub nullable: bool,
    /// Carries the schema-field annotation
    #[serde(default)]
    pub schema_field: bool,
    /// Name used by the schema-field annotation (implies `schema_field`)
    #[serde(default)]
    pub schema_name: Option<String>,
    /// Excluded from every strategy but the annotated one
    #[serde(default)]
    pub ignore: bool,
}

/// Method parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ParamDefinition {
    /// Parameter name
    #[serde(default = "default_param_name")]
    pub name: String,
    /// Type expression
    #[serde(rename = "type")]
    pub type_expr: String,
    /// Marked nullable
    #[serde(default)]
    pub nullable: bool,
}

fn default_param_name() -> String {
    "value".to_string()
}

/// Method declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MethodDefinition {
    /// Method name
    pub name: String,
    /// Accessor role
    #[serde(default)]
    pub accessor: Option<AccessorKind>,
    /// Return type expression
    #[serde(default)]
    pub returns: Option<String>,
    /// Parameters
    #[serde(default)]
    pub params: Vec<ParamDefinition>,
    /// Publicly visible
    #[serde(default = "default_true")]
    pub public: bool,
    /// Return value marked nullable
    #[serde(default)]
    pub nullable: bool,
    /// Carries the schema-field annotation
    #[serde(default)]
    pub schema_field: bool,
    /// Name used by the schema-field annotation (implies `schema_field`)
    #[serde(default)]
    pub schema_name: Option<String>,
    /// Excluded from accessor strategies
    #[serde(default)]
    pub ignore: bool,
}

fn default_true() -> bool {
    true
}
