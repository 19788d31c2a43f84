//! Inference configuration
//!
//! Settings that bound a single inference call. They can be set in code via
//! `SchemaInferrer` builder methods or read from the `inference:` section of a
//! type catalog.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of rows
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for schema inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Maximum number of nested rows below (and including) the root
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl InferenceConfig {
    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: InferenceConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum row nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::config("max_depth must be at least 1"));
        }
        Ok(())
    }
}
