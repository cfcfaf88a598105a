//! CLI Tooling
//!
//! Command-line interface for node location extraction. Commands are scoped to
//! a workspace directory holding the downloaded input document.

use crate::config::{ConfigLoader, ExtractorConfig};
use crate::error::ExtractError;
use crate::extract::source::download_instructions;
use crate::extract::{NodeLocationExtractor, RunOptions};
use crate::logging::{LogFormat, LogOutput, LoggingConfig};
use crate::types::ExtractionSummary;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Nodeloc CLI - CAISO pricing node locations
#[derive(Parser)]
#[command(name = "nodeloc")]
#[command(about = "Extract CAISO pricing node locations into a cleaned CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory holding the input and output files
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log output stream
    #[arg(long, value_enum)]
    pub log_output: Option<LogOutput>,
}

impl Cli {
    /// Fold logging flags over the configured logging settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.format = format;
        }
        if let Some(output) = self.log_output {
            config.output = output;
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Extract node locations and write the cleaned CSV
    Extract {
        /// Run every stage but write nothing
        #[arg(long)]
        dry_run: bool,
        /// Also write a JSON list of [name, latitude, longitude] triples
        #[arg(long, value_name = "FILE")]
        json_out: Option<PathBuf>,
        /// Summary format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the effective configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Show where to download the input document
    Source,
}

/// CLI context: workspace plus its loaded configuration.
pub struct CliContext {
    workspace_root: PathBuf,
    config: ExtractorConfig,
}

impl CliContext {
    /// Load configuration for `workspace_root`, or from `config_path` when given.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ExtractError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Context with an explicit configuration.
    pub fn with_config(workspace_root: PathBuf, config: ExtractorConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ExtractError> {
        match command {
            Commands::Extract {
                dry_run,
                json_out,
                format,
            } => self.handle_extract(*dry_run, json_out.clone(), format),
            Commands::Config { format } => self.handle_config(format),
            Commands::Source => Ok(self.handle_source()),
        }
    }

    fn extractor(&self) -> NodeLocationExtractor {
        NodeLocationExtractor::new(self.workspace_root.clone(), self.config.clone())
    }

    fn handle_extract(
        &self,
        dry_run: bool,
        json_out: Option<PathBuf>,
        format: &str,
    ) -> Result<String, ExtractError> {
        check_format(format, &["text", "json"])?;
        info!(workspace = %self.workspace_root.display(), dry_run, "Starting extraction");

        let options = RunOptions { dry_run, json_out };
        let (_, summary) = self.extractor().run(&options)?;

        match format {
            "json" => Ok(serde_json::to_string_pretty(&summary)?),
            _ => Ok(format_summary_text(&summary)),
        }
    }

    fn handle_config(&self, format: &str) -> Result<String, ExtractError> {
        check_format(format, &["toml", "json"])?;
        match format {
            "json" => Ok(serde_json::to_string_pretty(&self.config)?),
            _ => Ok(toml::to_string_pretty(&self.config)?),
        }
    }

    fn handle_source(&self) -> String {
        let input = self.config.input_in(&self.workspace_root);
        download_instructions(&input, &self.config.source_url)
    }
}

fn check_format(format: &str, allowed: &[&str]) -> Result<(), ExtractError> {
    if allowed.contains(&format) {
        return Ok(());
    }
    Err(ExtractError::Config(format!(
        "Invalid format: {} (must be one of: {})",
        format,
        allowed.join(", ")
    )))
}

fn format_summary_text(summary: &ExtractionSummary) -> String {
    let mut lines = vec![
        format!(
            "Extracted {} nodes from {}",
            summary.extracted,
            summary.input.display()
        ),
        format!("Retained {}, dropped {}", summary.retained, summary.dropped),
    ];
    match &summary.output {
        Some(path) => lines.push(format!("Wrote {}", path.display())),
        None => lines.push("Dry run: nothing written".to_string()),
    }
    lines.join("\n")
}
