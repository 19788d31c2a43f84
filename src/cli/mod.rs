//! CLI module
//!
//! Command-line interface for inferring schemas from type catalogs.
//!
//! # Commands
//!
//! - `infer` - Infer the schema of one type
//! - `validate` - Validate a catalog file
//! - `types` - List declared types

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, StrategyArg};
pub use runner::Runner;
