use crate::stats::SkillSpec;

/// Skill lifecycle. After the one-time `Startup` the cycle is strictly
/// `Ready -> Active -> Cooldown -> Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SkillState {
    Startup,
    Ready,
    Active,
    Cooldown,
}

/// An equipped skill and its lifecycle timer.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillInstance {
    spec: SkillSpec,
    pub(crate) state: SkillState,
    /// Seconds remaining in the current state. Zero while `Ready`.
    pub(crate) timer: f64,
    cooldown: f64,
    pub(crate) activations: u32,
}

impl SkillInstance {
    pub(crate) fn new(spec: SkillSpec, startup_delay: f64, cooldown: f64) -> Self {
        let (state, timer) = if startup_delay > 0.0 {
            (SkillState::Startup, startup_delay)
        } else {
            (SkillState::Ready, 0.0)
        };
        Self {
            spec,
            state,
            timer,
            cooldown,
            activations: 0,
        }
    }

    pub fn spec(&self) -> &SkillSpec {
        &self.spec
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn state(&self) -> SkillState {
        self.state
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Cooldown after reduction and flooring, fixed at construction.
    pub fn cooldown_duration(&self) -> f64 {
        self.cooldown
    }

    pub fn activations(&self) -> u32 {
        self.activations
    }
}
