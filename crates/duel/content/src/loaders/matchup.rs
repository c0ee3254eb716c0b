//! Matchup loader.

use std::path::Path;

use anyhow::Context;

use crate::formats::Matchup;
use crate::loaders::{LoadResult, read_file};

/// Loader for [`Matchup`] files in RON.
pub struct MatchupLoader;

impl MatchupLoader {
    /// Load a matchup from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a Matchup
    ///
    /// # Returns
    ///
    /// Returns the unresolved matchup; resolve it with a
    /// [`crate::SkillCatalog`] before building the engine.
    pub fn load(path: &Path) -> LoadResult<Matchup> {
        let content = read_file(path)?;
        let matchup = Self::parse(&content).with_context(|| format!("in {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            player1_skills = matchup.player1.skills.len(),
            player2_skills = matchup.player2.skills.len(),
            "loaded matchup"
        );
        Ok(matchup)
    }

    pub fn parse(content: &str) -> LoadResult<Matchup> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse matchup RON: {}", e))
    }
}
