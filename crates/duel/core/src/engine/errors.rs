//! Error types for engine construction and ticking.

use crate::config::ConfigError;
use crate::error::{DuelError, ErrorSeverity};
use crate::state::{Outcome, Side};
use crate::stats::StatsError;

/// Engine construction rejected its inputs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("invalid stats for {side}: {error}")]
    Stats {
        side: Side,
        #[source]
        error: StatsError,
    },

    #[error("invalid battle config: {0}")]
    Config(#[from] ConfigError),
}

impl DuelError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Stats { error, .. } => error.error_code(),
            Self::Config(error) => error.error_code(),
        }
    }
}

/// A tick was rejected or failed mid-step.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TickError {
    #[error("match is over ({outcome})")]
    MatchOver { outcome: Outcome },

    #[error("tick delta must be finite and positive, got {0}")]
    InvalidDelta(f64),

    #[error("tick delta {got} does not match the fixed step {expected}")]
    StepMismatch { expected: f64, got: f64 },

    #[error("{side} holds buff '{skill_id}' but that skill is not active")]
    OrphanBuff { side: Side, skill_id: String },

    #[error("{side} has no free buff slot for '{skill_id}'")]
    BuffCapacity { side: Side, skill_id: String },

    #[error("{side} health {health} outside 0..={max_health}")]
    HealthOutOfBounds {
        side: Side,
        health: f64,
        max_health: f64,
    },

    #[error("engine faulted at {at:.3}s: {cause}")]
    Faulted { at: f64, cause: Box<TickError> },
}

impl DuelError for TickError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MatchOver { .. } | Self::InvalidDelta(_) | Self::StepMismatch { .. } => {
                ErrorSeverity::Validation
            }
            Self::OrphanBuff { .. } | Self::BuffCapacity { .. } | Self::HealthOutOfBounds { .. } => {
                ErrorSeverity::Internal
            }
            Self::Faulted { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MatchOver { .. } => "TICK_MATCH_OVER",
            Self::InvalidDelta(_) => "TICK_INVALID_DELTA",
            Self::StepMismatch { .. } => "TICK_STEP_MISMATCH",
            Self::OrphanBuff { .. } => "TICK_ORPHAN_BUFF",
            Self::BuffCapacity { .. } => "TICK_BUFF_CAPACITY",
            Self::HealthOutOfBounds { .. } => "TICK_HEALTH_OUT_OF_BOUNDS",
            Self::Faulted { .. } => "TICK_FAULTED",
        }
    }
}

/// Failure of a multi-run simulation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("run {run} failed: {error}")]
    Tick {
        run: u64,
        #[source]
        error: TickError,
    },
}

impl DuelError for SimulationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Setup(error) => error.severity(),
            Self::Tick { error, .. } => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Setup(error) => error.error_code(),
            Self::Tick { error, .. } => error.error_code(),
        }
    }
}
