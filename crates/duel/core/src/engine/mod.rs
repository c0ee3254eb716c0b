//! Battle engine: the only mutator of match state.
//!
//! [`BattleEngine::tick`] runs one fixed step in a fixed order:
//!
//! 1. advance elapsed time
//! 2. health regeneration (player 1, then player 2)
//! 3. skill lifecycles, including buff apply/retract
//! 4. pending skill pulses
//! 5. projectiles, in spawn order
//! 6. movement, engagement and attack phase (player 1, then player 2)
//! 7. invariant checks, then outcome evaluation
//!
//! Player 1 always resolves first within a phase, so simultaneous lethal
//! hits land in a reproducible order.

mod attack;
mod batch;
mod errors;
mod hit;
mod movement;
mod outcome;
mod projectiles;
mod pulses;
mod regen;
mod skills;

pub use batch::{BatchSummary, simulate_many};
pub use errors::{SetupError, SimulationError, TickError};
pub use outcome::{BattleResult, SideSummary};

use crate::clock::FixedStep;
use crate::config::BattleConfig;
use crate::log::BattleLog;
use crate::rng::Roller;
use crate::snapshot::Snapshot;
use crate::state::{Combatant, MatchState, Outcome, Side};
use crate::stats::CombatantStats;

/// Largest accepted difference between a tick delta and the fixed step.
const STEP_TOLERANCE: f64 = 1e-12;

/// Deterministic two-combatant battle.
#[derive(Clone, Debug)]
pub struct BattleEngine {
    config: BattleConfig,
    state: MatchState,
    fault: Option<TickError>,
}

impl BattleEngine {
    /// Validates both stat blocks and the config, then places the combatants
    /// at their start positions.
    pub fn new(
        player1: CombatantStats,
        player2: CombatantStats,
        config: BattleConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        player1.validate().map_err(|error| SetupError::Stats {
            side: Side::Player1,
            error,
        })?;
        player2.validate().map_err(|error| SetupError::Stats {
            side: Side::Player2,
            error,
        })?;

        let (x1, x2) = config.start_positions;
        let state = MatchState {
            elapsed: 0.0,
            combatants: [
                Combatant::new(Side::Player1, player1, x1, &config),
                Combatant::new(Side::Player2, player2, x2, &config),
            ],
            projectiles: Vec::new(),
            pulses: Vec::new(),
            log: BattleLog::new(),
            roller: Roller::new(config.roll_mode),
            next_projectile_id: 0,
            outcome: None,
            timed_out: false,
        };

        tracing::debug!(roll_mode = ?config.roll_mode, "battle engine created");
        Ok(Self {
            config,
            state,
            fault: None,
        })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Simulated seconds since the match began.
    pub fn elapsed(&self) -> f64 {
        self.state.elapsed
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    pub fn is_over(&self) -> bool {
        self.state.outcome.is_some()
    }

    /// The internal fault that poisoned the engine, if any.
    pub fn fault(&self) -> Option<&TickError> {
        self.fault.as_ref()
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        self.state.combatant(side)
    }

    pub fn log(&self) -> &BattleLog {
        &self.state.log
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// End-of-match summary; `None` while the match is running.
    pub fn result(&self) -> Option<BattleResult> {
        BattleResult::from_state(&self.state)
    }

    /// Advances the match by one fixed step.
    ///
    /// `dt` must equal the configured fixed step. Rejected calls leave the
    /// state untouched; a failure inside the step poisons the engine and
    /// every later call returns [`TickError::Faulted`].
    pub fn tick(&mut self, dt: f64) -> Result<(), TickError> {
        if let Some(cause) = &self.fault {
            return Err(TickError::Faulted {
                at: self.state.elapsed,
                cause: Box::new(cause.clone()),
            });
        }
        if let Some(outcome) = self.state.outcome {
            return Err(TickError::MatchOver { outcome });
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(TickError::InvalidDelta(dt));
        }
        if (dt - self.config.fixed_step).abs() > STEP_TOLERANCE {
            return Err(TickError::StepMismatch {
                expected: self.config.fixed_step,
                got: dt,
            });
        }

        if let Err(error) = self.step_once(dt) {
            tracing::error!(time = self.state.elapsed, %error, "battle engine faulted");
            self.fault = Some(error.clone());
            return Err(error);
        }
        Ok(())
    }

    /// Ticks at the fixed step until the outcome is decided.
    pub fn run_to_completion(&mut self) -> Result<BattleResult, TickError> {
        let dt = self.config.fixed_step;
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.tick(dt)?;
        }
    }

    fn step_once(&mut self, dt: f64) -> Result<(), TickError> {
        let config = &self.config;
        let state = &mut self.state;

        state.elapsed += dt;

        for side in Side::BOTH {
            regen::regenerate(state, side, dt);
        }
        for side in Side::BOTH {
            skills::advance_skills(state, config, side, dt)?;
        }
        pulses::advance_pulses(state, config.block_policy, dt)?;
        projectiles::advance_projectiles(state, config.block_policy, dt);
        for side in Side::BOTH {
            movement::advance_combatant(state, config, side, dt);
        }

        check_health(state)?;
        outcome::evaluate(state, config);
        Ok(())
    }
}

/// `0 <= health <= max_health` must hold exactly after every step; every
/// health write clamps.
fn check_health(state: &MatchState) -> Result<(), TickError> {
    for combatant in &state.combatants {
        let (health, max_health) = (combatant.health(), combatant.max_health());
        let within = health >= 0.0 && health <= max_health;
        if !within || !health.is_finite() {
            return Err(TickError::HealthOutOfBounds {
                side: combatant.side(),
                health,
                max_health,
            });
        }
    }
    Ok(())
}

impl FixedStep for BattleEngine {
    type Error = TickError;

    fn step(&mut self, dt: f64) -> Result<(), Self::Error> {
        self.tick(dt)
    }

    fn is_terminal(&self) -> bool {
        self.is_over() || self.fault.is_some()
    }
}
