//! Subcommands of the `duel` binary.

mod batch;
mod run;
mod simulate;

pub use batch::Batch;
pub use run::Run;
pub use simulate::Simulate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use duel_content::{ConfigLoader, Matchup, MatchupLoader, SkillCatalog};
use duel_core::{BattleConfig, BattleEngine, CombatantStats, RollMode};

use crate::config::ClientConfig;

/// Inputs shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Matchup file (RON)
    pub matchup: PathBuf,

    /// Battle configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Match seed; overrides the battle file and DUEL_SEED
    #[arg(long, conflicts_with = "expected_value")]
    pub seed: Option<u64>,

    /// Resolve every roll by its expected value instead of sampling
    #[arg(long)]
    pub expected_value: bool,
}

/// A matchup resolved into engine inputs.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub names: [String; 2],
    pub player1: CombatantStats,
    pub player2: CombatantStats,
    pub config: BattleConfig,
}

impl MatchSetup {
    pub fn engine(&self) -> Result<BattleEngine> {
        BattleEngine::new(
            self.player1.clone(),
            self.player2.clone(),
            self.config.clone(),
        )
        .context("Failed to set up match")
    }
}

impl MatchArgs {
    /// Loads the matchup and config and applies roll-mode overrides.
    ///
    /// Precedence for the roll mode: `--expected-value`, then `--seed`, then
    /// `DUEL_SEED`, then whatever the battle file says.
    pub fn load(&self, client: &ClientConfig) -> Result<MatchSetup> {
        let matchup = MatchupLoader::load(&self.matchup)?;
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => BattleConfig::default(),
        };
        Ok(self.resolve(matchup, config, client))
    }

    pub fn resolve(
        &self,
        matchup: Matchup,
        config: BattleConfig,
        client: &ClientConfig,
    ) -> MatchSetup {
        let roll_mode = if self.expected_value {
            RollMode::ExpectedValue
        } else if let Some(seed) = self.seed.or(client.seed) {
            RollMode::Seeded { seed }
        } else {
            config.roll_mode
        };

        let catalog = SkillCatalog::builtin();
        let (player1, player2) = matchup.to_stats(&catalog);
        MatchSetup {
            names: [
                matchup.player1.display_name(duel_core::Side::Player1),
                matchup.player2.display_name(duel_core::Side::Player2),
            ],
            player1,
            player2,
            config: config.with_roll_mode(roll_mode),
        }
    }
}
