//! Configuration
//!
//! Layered extractor settings: built-in defaults, an optional `nodeloc.toml`
//! in the workspace (or an explicit file), then `NODELOC__*` environment
//! variables. The defaults reproduce the fixed input/output names.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ExtractError;
use crate::extract::filter::FilterBounds;
use crate::extract::source::{INPUT_FILE, OUTPUT_FILE, SOURCE_URL};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Name of the optional workspace config file.
pub const WORKSPACE_CONFIG_FILE: &str = "nodeloc.toml";

fn default_input_path() -> PathBuf {
    PathBuf::from(INPUT_FILE)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(OUTPUT_FILE)
}

fn default_source_url() -> String {
    SOURCE_URL.to_string()
}

/// Extractor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Input XML path (relative to the workspace)
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Output CSV path (relative to the workspace)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Where the input has to be downloaded from by hand
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default)]
    pub bounds: FilterBounds,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            source_url: default_source_url(),
            bounds: FilterBounds::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Input path resolved against the workspace root.
    pub fn input_in(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.input_path)
    }

    /// Output path resolved against the workspace root.
    pub fn output_in(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.output_path)
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ExtractError::Config("input_path must not be empty".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ExtractError::Config("output_path must not be empty".to_string()));
        }
        if self.input_path == self.output_path {
            return Err(ExtractError::Config(
                "input_path and output_path must differ".to_string(),
            ));
        }
        if self.bounds.min_longitude.partial_cmp(&self.bounds.max_longitude) != Some(Ordering::Less) {
            return Err(ExtractError::Config(format!(
                "Empty longitude window: min_longitude {} must be below max_longitude {}",
                self.bounds.min_longitude, self.bounds.max_longitude
            )));
        }
        if self.bounds.min_latitude.is_nan() {
            return Err(ExtractError::Config("min_latitude must be a number".to_string()));
        }
        Ok(())
    }
}
