//! Content factory resolving a data directory into engine inputs.

use std::path::{Path, PathBuf};

use duel_core::{BattleConfig, CombatantStats};

use crate::catalog::SkillCatalog;
use crate::formats::Matchup;
use crate::loaders::{ConfigLoader, LoadResult, MatchupLoader};

/// Loads match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// └── matchups/
///     └── duel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    catalog: SkillCatalog,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "battle.toml";
    pub const MATCHUP_DIR: &'static str = "matchups";

    /// Creates a factory over `data_dir` using the built-in skill catalog.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog: SkillCatalog::builtin(),
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: SkillCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Load `battle.toml`, falling back to defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no battle config, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `matchups/<name>.ron`.
    pub fn load_matchup(&self, name: &str) -> LoadResult<Matchup> {
        let path = self
            .data_dir
            .join(Self::MATCHUP_DIR)
            .join(format!("{name}.ron"));
        MatchupLoader::load(&path)
    }

    /// Load a matchup and resolve both sides against the catalog.
    pub fn load_stats(&self, name: &str) -> LoadResult<(CombatantStats, CombatantStats)> {
        Ok(self.load_matchup(name)?.to_stats(&self.catalog))
    }
}
