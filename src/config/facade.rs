//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ExtractorConfig;
use crate::error::ExtractError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the workspace file and environment, then validate.
    pub fn load(workspace_root: &Path) -> Result<ExtractorConfig, ExtractError> {
        let config = MergeService::load(workspace_root)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, then validate.
    pub fn load_from_file(path: &Path) -> Result<ExtractorConfig, ExtractError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
