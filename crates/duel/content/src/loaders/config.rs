//! Battle configuration loader.

use std::path::Path;

use anyhow::Context;
use duel_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BattleConfig`] from TOML files.
///
/// Missing keys keep their defaults, so a file may override any subset.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a battle configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BattleConfig fields
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid battle config: {}", e))?;

        Ok(config)
    }
}
