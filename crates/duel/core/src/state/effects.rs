use crate::stats::SkillEffect;

use super::Side;

/// Additive stat bonus granted by an active skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub skill_id: String,
    pub bonus_damage: f64,
    pub bonus_max_health: f64,
    /// Seconds until the owning skill leaves `Active`.
    pub remaining: f64,
}

/// Scheduled damage/heal pulses from one skill activation.
///
/// Pulses outlive the skill's `Active` window; they stop when the hits run
/// out or their recipient is dead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingPulse {
    pub source: Side,
    pub skill_id: String,
    /// Pulsed effects only; buffs never appear here.
    pub effects: Vec<SkillEffect>,
    pub hits_remaining: u32,
    pub interval: f64,
    /// Seconds until the next pulse.
    pub timer: f64,
    /// False on the tick the pulse was scheduled; time starts counting after.
    pub(crate) armed: bool,
}
