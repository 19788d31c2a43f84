//! CLI commands and argument parsing

use crate::extract::ExtractionStrategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Static schema inference for declared record types
#[derive(Parser, Debug)]
#[command(name = "rowschema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Type catalog file (YAML)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer the schema of a type
    Infer {
        /// Type expression to infer (e.g. `Order` or `Page<Order>`)
        #[arg(short = 't', long = "type")]
        type_expr: String,

        /// Member extraction strategy
        #[arg(short, long, default_value = "fields")]
        strategy: StrategyArg,

        /// Override the catalog's maximum row nesting depth
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Validate a catalog file
    Validate,

    /// List declared types
    Types {
        /// Include built-in types
        #[arg(long)]
        builtins: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented tree
    Pretty,
    /// JSON document
    Json,
    /// Arrow schema (debug form)
    Arrow,
}

/// Member extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Public fields
    Fields,
    /// Getter methods
    Getters,
    /// Setter methods
    Setters,
    /// Members with the schema-field annotation
    Annotated,
}

impl From<StrategyArg> for ExtractionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fields => ExtractionStrategy::Fields,
            StrategyArg::Getters => ExtractionStrategy::Getters,
            StrategyArg::Setters => ExtractionStrategy::Setters,
            StrategyArg::Annotated => ExtractionStrategy::Annotated,
        }
    }
}
