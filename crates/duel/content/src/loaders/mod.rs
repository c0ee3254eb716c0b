//! Loaders for matchup and battle configuration files.
//!
//! All loaders read the formats defined in [`crate::formats`].

pub mod config;
pub mod factory;
pub mod matchup;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use matchup::MatchupLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
