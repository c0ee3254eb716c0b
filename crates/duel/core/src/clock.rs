//! Fixed-step accumulator that turns wall-clock frames into simulation ticks.

use crate::error::{DuelError, ErrorSeverity};

/// Anything that advances in fixed increments.
pub trait FixedStep {
    type Error;

    /// Advances by exactly one fixed step of `dt` seconds.
    fn step(&mut self, dt: f64) -> Result<(), Self::Error>;

    /// True once no further steps are accepted.
    fn is_terminal(&self) -> bool;
}

/// What one call to [`BattleClock::advance`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Fixed steps run this frame.
    pub steps: u32,
    /// Simulated seconds discarded by the spiral-of-death valve.
    pub dropped: f64,
    /// The target reached its terminal state.
    pub terminal: bool,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ClockError {
    #[error("fixed step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("max steps per frame must be at least 1")]
    ZeroStepBudget,

    #[error("playback speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f64),

    #[error("wall delta must be finite and non-negative, got {0}")]
    InvalidDelta(f64),
}

impl DuelError for ClockError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStep(_) => "CLOCK_INVALID_STEP",
            Self::ZeroStepBudget => "CLOCK_ZERO_STEP_BUDGET",
            Self::InvalidSpeed(_) => "CLOCK_INVALID_SPEED",
            Self::InvalidDelta(_) => "CLOCK_INVALID_DELTA",
        }
    }
}

/// A frame failed either at the clock or inside a step.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FrameError<E> {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error("fixed step failed: {0}")]
    Step(E),
}

/// Accumulates scaled wall time and spends it in fixed steps.
///
/// Holds no combat state; the same clock can drive any [`FixedStep`] target.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleClock {
    fixed_step: f64,
    max_steps: u32,
    speed: f64,
    accumulator: f64,
}

impl BattleClock {
    pub fn new(fixed_step: f64, max_steps: u32) -> Result<Self, ClockError> {
        if !fixed_step.is_finite() || fixed_step <= 0.0 {
            return Err(ClockError::InvalidStep(fixed_step));
        }
        if max_steps == 0 {
            return Err(ClockError::ZeroStepBudget);
        }
        Ok(Self {
            fixed_step,
            max_steps,
            speed: 1.0,
            accumulator: 0.0,
        })
    }

    pub fn with_speed(mut self, speed: f64) -> Result<Self, ClockError> {
        self.set_speed(speed)?;
        Ok(self)
    }

    /// Sets the playback multiplier. Not capped; zero pauses.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ClockError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ClockError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    /// Unspent scaled time carried into the next frame.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Feeds one wall-clock frame of `wall_delta` seconds.
    ///
    /// Runs up to `max_steps` fixed steps. If the leftover still exceeds
    /// `fixed_step * max_steps`, it is dropped so a slow host never falls
    /// further and further behind. Stops early when the target goes terminal.
    pub fn advance<T: FixedStep>(
        &mut self,
        wall_delta: f64,
        target: &mut T,
    ) -> Result<FrameReport, FrameError<T::Error>> {
        if !wall_delta.is_finite() || wall_delta < 0.0 {
            return Err(ClockError::InvalidDelta(wall_delta).into());
        }

        let mut report = FrameReport::default();
        if target.is_terminal() {
            self.accumulator = 0.0;
            report.terminal = true;
            return Ok(report);
        }

        self.accumulator += wall_delta * self.speed;
        while self.accumulator >= self.fixed_step && report.steps < self.max_steps {
            target.step(self.fixed_step).map_err(FrameError::Step)?;
            self.accumulator -= self.fixed_step;
            report.steps += 1;

            if target.is_terminal() {
                self.accumulator = 0.0;
                report.terminal = true;
                return Ok(report);
            }
        }

        let budget = self.fixed_step * f64::from(self.max_steps);
        if self.accumulator > budget {
            report.dropped = self.accumulator;
            self.accumulator = 0.0;
            tracing::warn!(
                dropped = report.dropped,
                max_steps = self.max_steps,
                "simulation fell behind; discarding backlog"
            );
        }

        Ok(report)
    }
}
