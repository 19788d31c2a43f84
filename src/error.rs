//! Error types for rowschema
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Inference errors are structural: they describe a type that cannot be
//! mapped to a schema.

use thiserror::Error;

/// The main error type for rowschema
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("Cannot infer schema from unparameterized {shape} '{type_name}'")]
    UnparameterizedGeneric { shape: String, type_name: String },

    #[error("Only primitive types can be map keys, found {key_type}")]
    InvalidMapKey { key_type: String },

    #[error("Malformed accessor '{accessor}': {message}")]
    MalformedAccessor { accessor: String, message: String },

    #[error("Unsupported type shape '{type_name}': {message}")]
    UnsupportedShape { type_name: String, message: String },

    #[error("Cyclic type reference: {path}")]
    CyclicType { path: String },

    #[error("Type '{type_name}' expects {expected} type parameter(s), found {actual}")]
    TypeArity {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Maximum row nesting depth ({max_depth}) exceeded")]
    DepthExceeded { max_depth: usize },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid type expression '{input}': {message}")]
    TypeParse { input: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unparameterized generic error
    pub fn unparameterized(shape: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnparameterizedGeneric {
            shape: shape.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a malformed accessor error
    pub fn malformed_accessor(accessor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedAccessor {
            accessor: accessor.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported shape error
    pub fn unsupported(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a type expression parse error
    pub fn type_parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeParse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from classifying a type (as opposed to
    /// loading or configuration)
    pub fn is_inference_error(&self) -> bool {
        matches!(
            self,
            Error::UnparameterizedGeneric { .. }
                | Error::InvalidMapKey { .. }
                | Error::MalformedAccessor { .. }
                | Error::UnsupportedShape { .. }
                | Error::CyclicType { .. }
                | Error::TypeArity { .. }
                | Error::DepthExceeded { .. }
        )
    }

}

/// Result type alias for rowschema
pub type Result<T> = std::result::Result<T, Error>;
