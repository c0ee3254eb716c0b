//! Repeated headless matches for win-rate estimates.

use crate::config::BattleConfig;
use crate::state::Outcome;
use crate::stats::CombatantStats;

use super::BattleEngine;
use super::errors::SimulationError;

/// Aggregate over a batch of seeded runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    pub runs: u64,
    pub player1_wins: u64,
    pub player2_wins: u64,
    pub ties: u64,
    pub timeouts: u64,
    /// Sum of match lengths in simulated seconds.
    pub total_time: f64,
}

impl BatchSummary {
    fn rate(&self, count: u64) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        count as f64 / self.runs as f64 * 100.0
    }

    pub fn player1_win_rate(&self) -> f64 {
        self.rate(self.player1_wins)
    }

    pub fn player2_win_rate(&self) -> f64 {
        self.rate(self.player2_wins)
    }

    pub fn tie_rate(&self) -> f64 {
        self.rate(self.ties)
    }

    pub fn timeout_rate(&self) -> f64 {
        self.rate(self.timeouts)
    }

    pub fn average_time(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_time / self.runs as f64
    }
}

/// Runs `runs` matches to completion. Run `i` uses the config's roll mode
/// advanced by `i` (see [`crate::RollMode::for_run`]).
pub fn simulate_many(
    player1: &CombatantStats,
    player2: &CombatantStats,
    config: &BattleConfig,
    runs: u64,
) -> Result<BatchSummary, SimulationError> {
    let mut summary = BatchSummary::default();

    for run in 0..runs {
        let config = config.clone().with_roll_mode(config.roll_mode.for_run(run));
        let mut engine = BattleEngine::new(player1.clone(), player2.clone(), config)?;
        let result = engine
            .run_to_completion()
            .map_err(|error| SimulationError::Tick { run, error })?;

        summary.runs += 1;
        summary.total_time += result.time;
        if result.timeout {
            summary.timeouts += 1;
        }
        match result.outcome {
            Outcome::Player1Win => summary.player1_wins += 1,
            Outcome::Player2Win => summary.player2_wins += 1,
            Outcome::Tie => summary.ties += 1,
        }
    }

    tracing::debug!(
        runs = summary.runs,
        player1_win_rate = summary.player1_win_rate(),
        "batch complete"
    );
    Ok(summary)
}
