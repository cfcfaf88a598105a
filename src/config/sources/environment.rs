//! Environment variable source: NODELOC__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses NODELOC__ prefix and __ as separator for nested keys,
/// e.g. `NODELOC__BOUNDS__MIN_LATITUDE=25`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("NODELOC")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
