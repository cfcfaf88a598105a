//! Logging
//!
//! `tracing` subscriber setup for the extractor. Run diagnostics go to stderr
//! by default so stdout carries only command output.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, ExtractError> {
        match value {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ExtractError::Config(format!(
                "Invalid log format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Log destination stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    Stderr,
}

impl LogOutput {
    pub fn parse(value: &str) -> Result<Self, ExtractError> {
        match value {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            other => Err(ExtractError::Config(format!(
                "Invalid log output: {} (must be 'stdout' or 'stderr')",
                other
            ))),
        }
    }

    fn writer(self) -> BoxMakeWriter {
        match self {
            LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

/// Logging configuration (`[logging]` table of nodeloc.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directive, e.g. `info` or `nodeloc::extract=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_format")]
    pub format: LogFormat,

    #[serde(default = "default_output")]
    pub output: LogOutput,

    /// ANSI colors for text output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> LogFormat {
    LogFormat::Text
}

fn default_output() -> LogOutput {
    LogOutput::Stderr
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
        }
    }
}

/// Install the global subscriber.
///
/// `NODELOC_LOG` replaces the configured filter; `NODELOC_LOG_FORMAT` and
/// `NODELOC_LOG_OUTPUT` replace format and destination.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ExtractError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_filter(config)?;
    let format = match std::env::var("NODELOC_LOG_FORMAT") {
        Ok(value) => LogFormat::parse(&value)?,
        Err(_) => config.format,
    };
    let output = match std::env::var("NODELOC_LOG_OUTPUT") {
        Ok(value) => LogOutput::parse(&value)?,
        Err(_) => config.output,
    };

    let subscriber = Registry::default().with(filter);
    match format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(output.writer()),
            )
            .init(),
        LogFormat::Text => subscriber
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(output.writer()),
            )
            .init(),
    }

    Ok(())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ExtractError> {
    if let Ok(filter) = EnvFilter::try_from_env("NODELOC_LOG") {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| ExtractError::Config(format!("Invalid log level '{}': {}", config.level, e)))
}
