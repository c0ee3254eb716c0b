//! Skill definitions: what a skill does and when its payloads land.

/// One effect of a skill activation.
///
/// `Damage` and `Heal` amounts are per pulse. `Buff` lasts for the skill's
/// active duration and is retracted when the skill leaves `Active`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillEffect {
    Damage { amount: f64 },
    Heal { amount: f64 },
    Buff {
        bonus_damage: f64,
        bonus_max_health: f64,
    },
}

/// Effect discriminant, used in logs and validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SkillEffectKind {
    Damage,
    Heal,
    Buff,
}

impl SkillEffect {
    pub fn kind(&self) -> SkillEffectKind {
        match self {
            Self::Damage { .. } => SkillEffectKind::Damage,
            Self::Heal { .. } => SkillEffectKind::Heal,
            Self::Buff { .. } => SkillEffectKind::Buff,
        }
    }

    /// Damage and heal effects are delivered through the pulse schedule.
    pub fn is_pulsed(&self) -> bool {
        !matches!(self, Self::Buff { .. })
    }

    /// Named numeric fields, for validation.
    pub(crate) fn fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Damage { amount } => vec![("damage", amount)],
            Self::Heal { amount } => vec![("heal", amount)],
            Self::Buff {
                bonus_damage,
                bonus_max_health,
            } => vec![
                ("bonus_damage", bonus_damage),
                ("bonus_max_health", bonus_max_health),
            ],
        }
    }
}

/// Delivery of pulsed effects: `count` pulses, the first `delay` seconds after
/// activation, then one every `interval` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PulseSchedule {
    pub count: u32,
    pub interval: f64,
    pub delay: f64,
}

impl PulseSchedule {
    /// Most pulses one activation may schedule.
    pub const MAX_COUNT: u32 = 1_000;

    /// A single pulse at the activation instant.
    pub const ONE_SHOT: Self = Self {
        count: 1,
        interval: 0.0,
        delay: 0.0,
    };

    pub fn new(count: u32, interval: f64, delay: f64) -> Self {
        Self {
            count,
            interval,
            delay,
        }
    }
}

impl Default for PulseSchedule {
    fn default() -> Self {
        Self::ONE_SHOT
    }
}

/// Static definition of an equipped skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub id: String,
    pub base_cooldown: f64,
    /// Seconds spent in `Active`. Zero means the skill passes through
    /// `Active` within one tick.
    pub active_duration: f64,
    pub effects: Vec<SkillEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pulses: PulseSchedule,
}

impl SkillSpec {
    pub fn new(id: impl Into<String>, base_cooldown: f64, active_duration: f64) -> Self {
        Self {
            id: id.into(),
            base_cooldown,
            active_duration,
            effects: Vec::new(),
            pulses: PulseSchedule::ONE_SHOT,
        }
    }

    /// Skill whose only effect is a timed buff.
    pub fn buff(
        id: impl Into<String>,
        base_cooldown: f64,
        active_duration: f64,
        bonus_damage: f64,
        bonus_max_health: f64,
    ) -> Self {
        Self::new(id, base_cooldown, active_duration).with_effect(SkillEffect::Buff {
            bonus_damage,
            bonus_max_health,
        })
    }

    #[must_use]
    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_pulses(mut self, pulses: PulseSchedule) -> Self {
        self.pulses = pulses;
        self
    }

    pub fn has_pulsed_effects(&self) -> bool {
        self.effects.iter().any(SkillEffect::is_pulsed)
    }

    /// Cooldown after leaving `Active`, floored at `min_fraction` of the base.
    pub fn effective_cooldown(&self, cooldown_reduction: f64, min_fraction: f64) -> f64 {
        self.base_cooldown * (1.0 - cooldown_reduction).max(min_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_reduction_is_floored() {
        let skill = SkillSpec::new("meteor", 10.0, 0.0);
        assert!((skill.effective_cooldown(0.25, 0.1) - 7.5).abs() < 1e-12);
        assert!((skill.effective_cooldown(5.0, 0.1) - 1.0).abs() < 1e-12);
        assert!((skill.effective_cooldown(-0.5, 0.1) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn buff_constructor_carries_bonuses() {
        let skill = SkillSpec::buff("berserk", 12.0, 5.0, 40.0, 0.0);
        assert_eq!(skill.effects.len(), 1);
        assert_eq!(skill.effects[0].kind(), SkillEffectKind::Buff);
        assert!(!skill.has_pulsed_effects());
    }

    #[test]
    fn effect_kind_renders_snake_case() {
        assert_eq!(SkillEffectKind::Damage.to_string(), "damage");
        assert_eq!(SkillEffectKind::Buff.as_ref(), "buff");
    }
}
