//! Resolved combatant stat blocks.
//!
//! Stats arrive already aggregated (equipment, pets, mounts and the rest are
//! resolved upstream) and stay immutable for the whole match. The only
//! mid-match changes come from buffs, which live on the combatant.

mod error;
mod skill;

pub use error::StatsError;
pub use skill::{PulseSchedule, SkillEffect, SkillEffectKind, SkillSpec};

use crate::config::BattleConfig;

/// Weapon timing and reach.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponProfile {
    /// Charge time before the hit resolves, before attack-speed scaling.
    pub windup: f64,
    /// Recovery after the hit, before attack-speed scaling.
    pub attack_duration: f64,
    pub range: f64,
}

impl WeaponProfile {
    pub const DEFAULT_WINDUP: f64 = 0.5;
    pub const DEFAULT_ATTACK_DURATION: f64 = 1.5;
    pub const DEFAULT_RANGE: f64 = 0.3;

    pub fn new(windup: f64, attack_duration: f64, range: f64) -> Self {
        Self {
            windup,
            attack_duration,
            range,
        }
    }
}

impl Default for WeaponProfile {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WINDUP,
            Self::DEFAULT_ATTACK_DURATION,
            Self::DEFAULT_RANGE,
        )
    }
}

/// Immutable input stats for one combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    pub damage: f64,
    pub max_health: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub double_damage_chance: f64,
    pub block_chance: f64,
    /// Fraction of weapon damage dealt returned as healing.
    pub life_steal: f64,
    /// Fraction of max health regenerated per second.
    pub health_regen: f64,
    pub attack_speed_multiplier: f64,
    pub movement_speed: f64,
    pub weapon: WeaponProfile,
    pub is_ranged: bool,
    pub projectile_speed: Option<f64>,
    pub skill_cooldown_reduction: f64,
    pub skills: Vec<SkillSpec>,
}

impl CombatantStats {
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_MOVEMENT_SPEED: f64 = 4.0;
    pub const DEFAULT_PROJECTILE_SPEED: f64 = 10.0;

    /// Melee combatant with the default weapon and no secondary stats.
    pub fn new(damage: f64, max_health: f64) -> Self {
        Self {
            damage,
            max_health,
            crit_chance: 0.0,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            double_damage_chance: 0.0,
            block_chance: 0.0,
            life_steal: 0.0,
            health_regen: 0.0,
            attack_speed_multiplier: 1.0,
            movement_speed: Self::DEFAULT_MOVEMENT_SPEED,
            weapon: WeaponProfile::default(),
            is_ranged: false,
            projectile_speed: None,
            skill_cooldown_reduction: 0.0,
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: WeaponProfile) -> Self {
        self.weapon = weapon;
        self
    }

    #[must_use]
    pub fn with_crit(mut self, chance: f64, multiplier: f64) -> Self {
        self.crit_chance = chance;
        self.crit_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_double_damage(mut self, chance: f64) -> Self {
        self.double_damage_chance = chance;
        self
    }

    #[must_use]
    pub fn with_block(mut self, chance: f64) -> Self {
        self.block_chance = chance;
        self
    }

    #[must_use]
    pub fn with_life_steal(mut self, ratio: f64) -> Self {
        self.life_steal = ratio;
        self
    }

    #[must_use]
    pub fn with_health_regen(mut self, per_second: f64) -> Self {
        self.health_regen = per_second;
        self
    }

    #[must_use]
    pub fn with_attack_speed(mut self, multiplier: f64) -> Self {
        self.attack_speed_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_movement_speed(mut self, speed: f64) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Marks the combatant ranged; weapon hits travel as projectiles.
    #[must_use]
    pub fn ranged(mut self, projectile_speed: f64) -> Self {
        self.is_ranged = true;
        self.projectile_speed = Some(projectile_speed);
        self
    }

    #[must_use]
    pub fn with_cooldown_reduction(mut self, reduction: f64) -> Self {
        self.skill_cooldown_reduction = reduction;
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: SkillSpec) -> Self {
        self.skills.push(skill);
        self
    }

    /// Charge time after attack-speed scaling.
    pub fn effective_windup(&self) -> f64 {
        self.weapon.windup / self.attack_speed_multiplier
    }

    /// Recovery time after attack-speed scaling.
    pub fn effective_recovery(&self) -> f64 {
        self.weapon.attack_duration / self.attack_speed_multiplier
    }

    /// Rejects any stat outside its domain. Nothing is clamped.
    pub fn validate(&self) -> Result<(), StatsError> {
        let fields = [
            ("damage", self.damage),
            ("max_health", self.max_health),
            ("crit_chance", self.crit_chance),
            ("crit_multiplier", self.crit_multiplier),
            ("double_damage_chance", self.double_damage_chance),
            ("block_chance", self.block_chance),
            ("life_steal", self.life_steal),
            ("health_regen", self.health_regen),
            ("attack_speed_multiplier", self.attack_speed_multiplier),
            ("movement_speed", self.movement_speed),
            ("weapon.windup", self.weapon.windup),
            ("weapon.attack_duration", self.weapon.attack_duration),
            ("weapon.range", self.weapon.range),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(StatsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(StatsError::Negative { field, value });
            }
        }

        // Cooldown reduction may be negative (a penalty), but must be a number.
        if !self.skill_cooldown_reduction.is_finite() {
            return Err(StatsError::NonFinite {
                field: "skill_cooldown_reduction",
                value: self.skill_cooldown_reduction,
            });
        }

        for (field, value) in [
            ("max_health", self.max_health),
            ("attack_speed_multiplier", self.attack_speed_multiplier),
        ] {
            if value <= 0.0 {
                return Err(StatsError::NotPositive { field, value });
            }
        }

        if self.is_ranged {
            match self.projectile_speed {
                Some(speed) if speed.is_finite() && speed > 0.0 => {}
                _ => return Err(StatsError::MissingProjectileSpeed),
            }
        }

        self.validate_skills()
    }

    fn validate_skills(&self) -> Result<(), StatsError> {
        if self.skills.len() > BattleConfig::MAX_SKILLS {
            return Err(StatsError::TooManySkills {
                count: self.skills.len(),
                max: BattleConfig::MAX_SKILLS,
            });
        }

        for (slot, skill) in self.skills.iter().enumerate() {
            if skill.id.trim().is_empty() {
                return Err(StatsError::EmptySkillId { slot });
            }
            if self.skills[..slot].iter().any(|other| other.id == skill.id) {
                return Err(StatsError::DuplicateSkill {
                    id: skill.id.clone(),
                });
            }

            let mut values = vec![
                ("base_cooldown", skill.base_cooldown),
                ("active_duration", skill.active_duration),
                ("pulses.interval", skill.pulses.interval),
                ("pulses.delay", skill.pulses.delay),
            ];
            for effect in &skill.effects {
                values.extend(effect.fields());
            }
            if let Some((field, value)) = values
                .into_iter()
                .find(|(_, value)| !value.is_finite() || *value < 0.0)
            {
                return Err(StatsError::InvalidSkillValue {
                    id: skill.id.clone(),
                    field,
                    value,
                });
            }

            if skill.has_pulsed_effects() && skill.pulses.count == 0 {
                return Err(StatsError::EmptyPulseSchedule {
                    id: skill.id.clone(),
                });
            }
            if skill.pulses.count > PulseSchedule::MAX_COUNT {
                return Err(StatsError::TooManyPulses {
                    id: skill.id.clone(),
                    count: skill.pulses.count,
                    max: PulseSchedule::MAX_COUNT,
                });
            }

            let has_buff = skill
                .effects
                .iter()
                .any(|effect| effect.kind() == SkillEffectKind::Buff);
            if has_buff && skill.active_duration <= 0.0 {
                return Err(StatsError::InstantBuff {
                    id: skill.id.clone(),
                });
            }
        }

        Ok(())
    }
}
