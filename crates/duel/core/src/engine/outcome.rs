//! Terminal-condition checks and the end-of-match summary.

use crate::config::BattleConfig;
use crate::log::LogEvent;
use crate::state::{Combatant, MatchState, Outcome};

/// Decides the outcome, in priority order:
///
/// 1. both dead: `Tie`
/// 2. one dead: the other wins
/// 3. time limit reached: higher `health / max_health` wins, equal is a `Tie`
pub(crate) fn evaluate(state: &mut MatchState, config: &BattleConfig) -> Option<Outcome> {
    let [p1, p2] = &state.combatants;
    let reached_limit = state.elapsed + BattleConfig::TIME_EPSILON >= config.time_limit;

    let outcome = match (p1.is_dead(), p2.is_dead()) {
        (true, true) => Outcome::Tie,
        (false, true) => Outcome::Player1Win,
        (true, false) => Outcome::Player2Win,
        (false, false) if reached_limit => {
            state.timed_out = true;
            let (a, b) = (p1.health_fraction(), p2.health_fraction());
            if a > b {
                Outcome::Player1Win
            } else if b > a {
                Outcome::Player2Win
            } else {
                Outcome::Tie
            }
        }
        (false, false) => return None,
    };

    let reason = if state.timed_out { "time limit" } else { "knockout" };
    tracing::debug!(time = state.elapsed, %outcome, reason, "match decided");
    state.log.push(
        state.elapsed,
        LogEvent::Outcome,
        format!("{outcome} by {reason}"),
    );
    state.outcome = Some(outcome);
    Some(outcome)
}

/// End-of-match figures for one side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideSummary {
    pub health: f64,
    pub max_health: f64,
    /// Remaining health as a percentage of max health.
    pub health_percent: f64,
    pub damage_dealt: f64,
}

impl SideSummary {
    fn of(combatant: &Combatant) -> Self {
        Self {
            health: combatant.health(),
            max_health: combatant.max_health(),
            health_percent: combatant.health_fraction() * 100.0,
            damage_dealt: combatant.damage_dealt(),
        }
    }
}

/// Summary available once the outcome is decided.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: Outcome,
    pub player1: SideSummary,
    pub player2: SideSummary,
    pub time: f64,
    pub timeout: bool,
}

impl BattleResult {
    pub(crate) fn from_state(state: &MatchState) -> Option<Self> {
        let outcome = state.outcome?;
        let [p1, p2] = &state.combatants;
        Some(Self {
            outcome,
            player1: SideSummary::of(p1),
            player2: SideSummary::of(p2),
            time: state.elapsed,
            timeout: state.timed_out,
        })
    }
}
