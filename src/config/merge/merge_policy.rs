//! Base layer: built-in defaults.

use crate::config::ExtractorConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with `ExtractorConfig::default()` so every later source is a partial overlay.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&ExtractorConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
