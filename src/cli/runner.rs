//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, StrategyArg};
use crate::error::{Error, Result};
use crate::extract::ExtractionStrategy;
use crate::loader::{load_catalog, Catalog};
use crate::output::{render_pretty, schema_to_json_pretty, to_arrow_schema};
use crate::reflect::BUILTIN_TYPES;
use crate::schema::{Schema, SchemaInferrer};
use std::fmt::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        print!("{output}");
        Ok(())
    }

    /// Run the CLI command, returning its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Infer {
                type_expr,
                strategy,
                max_depth,
            } => self.infer(type_expr, *strategy, *max_depth),
            Commands::Validate => self.validate(),
            Commands::Types { builtins } => self.types(*builtins),
        }
    }

    /// Load the catalog named on the command line
    fn load_catalog(&self) -> Result<Catalog> {
        let path = self
            .cli
            .catalog
            .as_ref()
            .ok_or_else(|| Error::config("Catalog file not specified (use -c flag)"))?;
        load_catalog(path)
    }

    fn infer(
        &self,
        type_expr: &str,
        strategy: StrategyArg,
        max_depth: Option<usize>,
    ) -> Result<String> {
        let catalog = self.load_catalog()?;
        let root = catalog.handle(type_expr)?;

        let mut config = catalog.config;
        if let Some(depth) = max_depth {
            config = config.with_max_depth(depth);
        }
        config.validate()?;

        let strategy = ExtractionStrategy::from(strategy);
        debug!("Inferring {} using {} strategy", type_expr, strategy);

        let schema = SchemaInferrer::with_config(config).infer(&root, &strategy)?;
        info!("Inferred {} field(s) for {}", schema.len(), type_expr);

        self.format_schema(&schema)
    }

    fn format_schema(&self, schema: &Schema) -> Result<String> {
        match self.cli.format {
            OutputFormat::Pretty => Ok(render_pretty(schema)),
            OutputFormat::Json => Ok(format!("{}\n", schema_to_json_pretty(schema)?)),
            OutputFormat::Arrow => Ok(format!("{:#?}\n", to_arrow_schema(schema))),
        }
    }

    fn validate(&self) -> Result<String> {
        let catalog = self.load_catalog()?;
        let names = catalog.type_names();
        match self.cli.format {
            OutputFormat::Json => Ok(format!(
                "{}\n",
                serde_json::json!({
                    "status": "valid",
                    "types": names.len(),
                    "max_depth": catalog.config.max_depth,
                })
            )),
            _ => Ok(format!("Catalog is valid: {} type(s)\n", names.len())),
        }
    }

    fn types(&self, builtins: bool) -> Result<String> {
        let catalog = self.load_catalog()?;
        let mut names: Vec<&str> = catalog.type_names().iter().map(String::as_str).collect();
        if builtins {
            names.extend(BUILTIN_TYPES);
        }

        match self.cli.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&names)?)),
            _ => {
                let mut out = String::new();
                for name in names {
                    let _ = writeln!(out, "{name}");
                }
                Ok(out)
            }
        }
    }
}
