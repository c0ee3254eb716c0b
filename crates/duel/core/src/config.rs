use crate::error::{DuelError, ErrorSeverity};

/// How chance-based rolls (crit, double damage, block) are resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RollMode {
    /// Bernoulli rolls drawn from a PCG stream keyed by `seed`.
    Seeded { seed: u64 },
    /// No randomness: every roll contributes its expected value.
    ExpectedValue,
}

impl RollMode {
    /// Returns the mode for the `run`-th match of a batch.
    ///
    /// Seeded batches advance the seed per run; expected-value runs are
    /// identical by construction.
    pub fn for_run(self, run: u64) -> Self {
        match self {
            Self::Seeded { seed } => Self::Seeded {
                seed: seed.wrapping_add(run),
            },
            Self::ExpectedValue => Self::ExpectedValue,
        }
    }
}

impl Default for RollMode {
    fn default() -> Self {
        Self::Seeded { seed: 0 }
    }
}

/// What a successful block does to the incoming hit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum BlockPolicy {
    /// The hit deals no damage.
    Negate,
    /// The hit is reduced by `fraction` (0.0..=1.0).
    Reduce { fraction: f64 },
}

impl BlockPolicy {
    /// Fraction of the incoming damage removed by a successful block.
    pub fn reduction(&self) -> f64 {
        match self {
            Self::Negate => 1.0,
            Self::Reduce { fraction } => *fraction,
        }
    }
}

impl Default for BlockPolicy {
    fn default() -> Self {
        Self::Negate
    }
}

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Simulated seconds advanced by one tick.
    pub fixed_step: f64,
    /// Match length in simulated seconds before the health-percentage tie-break.
    pub time_limit: f64,
    /// Starting positions on the 1D line (player 1, player 2).
    pub start_positions: (f64, f64),
    /// One-time warm-up before any skill first becomes ready. Zero disables it.
    pub skill_startup_delay: f64,
    /// Lower bound on `1 - cooldown_reduction` when scaling skill cooldowns.
    pub min_cooldown_fraction: f64,
    /// Extra reach allowed when a charged attack resolves.
    pub resolve_range_slack: f64,
    pub roll_mode: RollMode,
    pub block_policy: BlockPolicy,
    /// Upper bound on fixed steps the battle clock runs per wall-clock frame.
    pub max_steps_per_frame: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of equipped skills per combatant.
    pub const MAX_SKILLS: usize = 8;

    /// Tolerance used for every simulated-time threshold comparison.
    pub const TIME_EPSILON: f64 = 1e-9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FIXED_STEP: f64 = 1.0 / 60.0;
    pub const DEFAULT_TIME_LIMIT: f64 = 60.0;
    pub const DEFAULT_PLAYER1_START: f64 = 2.0;
    pub const DEFAULT_PLAYER2_START: f64 = 18.0;
    pub const DEFAULT_SKILL_STARTUP_DELAY: f64 = 3.2;
    pub const DEFAULT_MIN_COOLDOWN_FRACTION: f64 = 0.1;
    pub const DEFAULT_RESOLVE_RANGE_SLACK: f64 = 0.1;
    pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 10;

    pub fn new() -> Self {
        Self {
            fixed_step: Self::DEFAULT_FIXED_STEP,
            time_limit: Self::DEFAULT_TIME_LIMIT,
            start_positions: (Self::DEFAULT_PLAYER1_START, Self::DEFAULT_PLAYER2_START),
            skill_startup_delay: Self::DEFAULT_SKILL_STARTUP_DELAY,
            min_cooldown_fraction: Self::DEFAULT_MIN_COOLDOWN_FRACTION,
            resolve_range_slack: Self::DEFAULT_RESOLVE_RANGE_SLACK,
            roll_mode: RollMode::default(),
            block_policy: BlockPolicy::default(),
            max_steps_per_frame: Self::DEFAULT_MAX_STEPS_PER_FRAME,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.roll_mode = RollMode::Seeded { seed };
        self
    }

    #[must_use]
    pub fn with_roll_mode(mut self, roll_mode: RollMode) -> Self {
        self.roll_mode = roll_mode;
        self
    }

    #[must_use]
    pub fn with_block_policy(mut self, block_policy: BlockPolicy) -> Self {
        self.block_policy = block_policy;
        self
    }

    #[must_use]
    pub fn with_start_positions(mut self, player1: f64, player2: f64) -> Self {
        self.start_positions = (player1, player2);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_skill_startup_delay(mut self, delay: f64) -> Self {
        self.skill_startup_delay = delay;
        self
    }

    #[must_use]
    pub fn with_max_steps_per_frame(mut self, max_steps: u32) -> Self {
        self.max_steps_per_frame = max_steps;
        self
    }

    /// Checks every tunable against its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fixed_step", self.fixed_step),
            ("time_limit", self.time_limit),
            ("min_cooldown_fraction", self.min_cooldown_fraction),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("skill_startup_delay", self.skill_startup_delay),
            ("resolve_range_slack", self.resolve_range_slack),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let (p1, p2) = self.start_positions;
        if !p1.is_finite() || !p2.is_finite() {
            return Err(ConfigError::NonFiniteStart);
        }

        if let BlockPolicy::Reduce { fraction } = self.block_policy
            && !(0.0..=1.0).contains(&fraction)
        {
            return Err(ConfigError::BlockFraction(fraction));
        }

        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }

        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A battle configuration value outside its domain.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("start positions must be finite")]
    NonFiniteStart,

    #[error("block reduction fraction must be within 0.0..=1.0, got {0}")]
    BlockFraction(f64),

    #[error("max_steps_per_frame must be at least 1")]
    ZeroStepBudget,
}

impl DuelError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
            Self::Negative { .. } => "CONFIG_NEGATIVE",
            Self::NonFiniteStart => "CONFIG_NON_FINITE_START",
            Self::BlockFraction(_) => "CONFIG_BLOCK_FRACTION",
            Self::ZeroStepBudget => "CONFIG_ZERO_STEP_BUDGET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(BattleConfig::default().validate().is_ok());
        assert_eq!(BattleConfig::default().time_limit, 60.0);
    }

    #[test]
    fn rejects_zero_fixed_step() {
        let config = BattleConfig {
            fixed_step: 0.0,
            ..BattleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "fixed_step",
                ..
            })
        ));
    }

    #[test]
    fn rejects_block_fraction_above_one() {
        let config =
            BattleConfig::default().with_block_policy(BlockPolicy::Reduce { fraction: 1.5 });
        assert_eq!(config.validate(), Err(ConfigError::BlockFraction(1.5)));
    }

    #[test]
    fn seeded_runs_advance_seed() {
        let mode = RollMode::Seeded { seed: 10 };
        assert_eq!(mode.for_run(3), RollMode::Seeded { seed: 13 });
        assert_eq!(RollMode::ExpectedValue.for_run(3), RollMode::ExpectedValue);
    }
}
