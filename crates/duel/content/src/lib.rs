//! Data-driven match content for `duel-core`.
//!
//! - Built-in skill mechanics (hit counts, pacing, buff classification)
//! - Matchup files (RON): two combatant stat blocks with named skills
//! - Battle configuration (TOML)
//!
//! Content is resolved into core types before a match starts and never
//! appears in match state.

pub mod catalog;

#[cfg(feature = "serde")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{DEFAULT_PULSE_INTERVAL, SkillCatalog, SkillConfig, SkillMechanics};

#[cfg(feature = "serde")]
pub use formats::{CombatantSpec, Matchup};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MatchupLoader};
