//! Built-in skill mechanics.
//!
//! Skill entries in content files only carry the numbers shown on a skill
//! card: total damage, total health, cooldown and duration. How those numbers
//! are delivered (hit count, pacing, whether the skill is a buff) is a
//! property of the skill itself and lives in this catalog.

use std::collections::HashMap;

use duel_core::{PulseSchedule, SkillEffect, SkillSpec};

/// Pacing used for multi-hit skills that do not name an interval.
pub const DEFAULT_PULSE_INTERVAL: f64 = 0.1;

/// Delivery rules for one named skill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillMechanics {
    /// Number of hits a single activation delivers.
    pub count: u32,
    pub interval: f64,
    /// Seconds from activation to the first hit.
    pub delay: f64,
    /// Card damage is already per hit and must not be split across `count`.
    pub damage_is_per_hit: bool,
    /// Skill adds its values to the caster's stats while active.
    pub buff: bool,
}

impl SkillMechanics {
    pub const fn hits(count: u32) -> Self {
        Self {
            count,
            interval: DEFAULT_PULSE_INTERVAL,
            delay: 0.0,
            damage_is_per_hit: false,
            buff: false,
        }
    }

    pub const fn buff() -> Self {
        Self {
            buff: true,
            ..Self::hits(1)
        }
    }

    pub const fn every(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub const fn after(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn per_hit(mut self) -> Self {
        self.damage_is_per_hit = true;
        self
    }
}

impl Default for SkillMechanics {
    fn default() -> Self {
        Self::hits(1)
    }
}

/// A skill as written in a matchup file.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillConfig {
    pub id: String,
    /// Total damage across all hits.
    pub damage: f64,
    /// Total healing across all hits, or bonus max health for buffs.
    pub health: f64,
    pub cooldown: f64,
    pub duration: f64,
    /// Overrides the catalog hit count.
    pub count: Option<u32>,
}

impl SkillConfig {
    pub fn new(id: impl Into<String>, cooldown: f64, duration: f64) -> Self {
        Self {
            id: id.into(),
            cooldown,
            duration,
            ..Self::default()
        }
    }

    pub fn with_damage(mut self, damage: f64) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }
}

const BUILTIN: &[(&str, SkillMechanics)] = &[
    ("Meat", SkillMechanics::buff()),
    ("Morale", SkillMechanics::buff()),
    ("Berserk", SkillMechanics::buff()),
    ("Buff", SkillMechanics::buff()),
    ("HigherMorale", SkillMechanics::buff()),
    ("Arrows", SkillMechanics::hits(3).after(0.2)),
    ("Shuriken", SkillMechanics::hits(5).after(0.2)),
    ("Lightning", SkillMechanics::hits(5).every(0.2).after(0.1)),
    ("Shout", SkillMechanics::hits(8).every(0.15)),
    ("Meteorite", SkillMechanics::hits(5).every(0.3).after(1.0)),
    ("CannonBarrage", SkillMechanics::hits(3).every(0.3).after(0.5)),
    ("Stampede", SkillMechanics::hits(1).after(0.25)),
    ("Thorns", SkillMechanics::hits(1).after(0.5)),
    ("Bomb", SkillMechanics::hits(1).after(1.5)),
    ("Worm", SkillMechanics::hits(1).after(0.5)),
    ("RainOfArrows", SkillMechanics::hits(15).every(0.2).after(0.5)),
    ("StrafeRun", SkillMechanics::hits(3).every(0.25).after(0.5).per_hit()),
    ("Drone", SkillMechanics::hits(10).every(0.8).per_hit()),
];

/// Numeric ids used by exported skill tables.
const ALIASES: &[(&str, &str)] = &[
    ("0", "Meat"),
    ("1", "Morale"),
    ("2", "Arrows"),
    ("3", "Shuriken"),
    ("4", "Shout"),
    ("5", "Meteorite"),
    ("6", "Berserk"),
    ("7", "Stampede"),
    ("8", "Thorns"),
    ("9", "Bomb"),
    ("10", "Worm"),
    ("11", "Lightning"),
    ("12", "Buff"),
    ("13", "HigherMorale"),
    ("14", "RainOfArrows"),
    ("15", "StrafeRun"),
    ("16", "CannonBarrage"),
    ("17", "Drone"),
];

/// Lookup from skill id to delivery rules.
///
/// Unknown ids resolve to a single immediate hit.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    mechanics: HashMap<String, SkillMechanics>,
    aliases: HashMap<String, String>,
}

impl SkillCatalog {
    /// An empty catalog: every skill is a single immediate hit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog of all shipped skills.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (id, mechanics) in BUILTIN {
            catalog.insert(*id, *mechanics);
        }
        for (alias, id) in ALIASES {
            catalog
                .aliases
                .insert((*alias).to_string(), (*id).to_string());
        }
        catalog
    }

    /// Registers or replaces the mechanics for `id`.
    pub fn insert(&mut self, id: impl Into<String>, mechanics: SkillMechanics) {
        self.mechanics.insert(id.into(), mechanics);
    }

    pub fn get(&self, id: &str) -> Option<&SkillMechanics> {
        let canonical = self.aliases.get(id).map(String::as_str).unwrap_or(id);
        self.mechanics.get(canonical)
    }

    pub fn len(&self) -> usize {
        self.mechanics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mechanics.is_empty()
    }

    /// Turns a skill card into an engine skill.
    ///
    /// Total damage is split across the hit count unless the catalog marks it
    /// per hit; total health is always split. Buff skills with a positive
    /// duration become a single `Buff` effect carrying the totals. Everything
    /// else becomes pulsed `Damage`/`Heal` effects.
    pub fn resolve(&self, skill: &SkillConfig) -> SkillSpec {
        let mechanics = self.get(&skill.id).copied().unwrap_or_default();
        let count = skill.count.unwrap_or(mechanics.count).max(1);
        let hits = f64::from(count);

        let damage_per_hit = if skill.damage <= 0.0 {
            0.0
        } else if mechanics.damage_is_per_hit {
            skill.damage
        } else {
            skill.damage / hits
        };
        let health_per_hit = if skill.health > 0.0 {
            skill.health / hits
        } else {
            0.0
        };

        let spec = SkillSpec::new(skill.id.clone(), skill.cooldown, skill.duration);
        if mechanics.buff && skill.duration > 0.0 {
            return spec.with_effect(SkillEffect::Buff {
                bonus_damage: damage_per_hit * hits,
                bonus_max_health: health_per_hit * hits,
            });
        }

        let mut spec = spec.with_pulses(PulseSchedule::new(
            count,
            mechanics.interval,
            mechanics.delay,
        ));
        if damage_per_hit > 0.0 {
            spec = spec.with_effect(SkillEffect::Damage {
                amount: damage_per_hit,
            });
        }
        if health_per_hit > 0.0 {
            spec = spec.with_effect(SkillEffect::Heal {
                amount: health_per_hit,
            });
        }
        if spec.effects.is_empty() {
            tracing::debug!(skill = %skill.id, "skill resolves to no effects");
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_damage_is_split_across_hits() {
        let catalog = SkillCatalog::builtin();
        let spec = catalog.resolve(&SkillConfig::new("Meteorite", 8.0, 0.0).with_damage(500.0));

        assert_eq!(spec.pulses, PulseSchedule::new(5, 0.3, 1.0));
        assert_eq!(spec.effects, vec![SkillEffect::Damage { amount: 100.0 }]);
    }

    #[test]
    fn test_per_hit_damage_is_not_split() {
        let catalog = SkillCatalog::builtin();
        let spec = catalog.resolve(
            &SkillConfig::new("Drone", 12.0, 8.0)
                .with_damage(40.0)
                .with_health(100.0),
        );

        assert_eq!(spec.pulses.count, 10);
        assert_eq!(
            spec.effects,
            vec![
                SkillEffect::Damage { amount: 40.0 },
                SkillEffect::Heal { amount: 10.0 },
            ]
        );
    }

    #[test]
    fn test_buff_skill_keeps_totals() {
        let catalog = SkillCatalog::builtin();
        let spec = catalog.resolve(
            &SkillConfig::new("Morale", 10.0, 5.0)
                .with_damage(30.0)
                .with_health(200.0),
        );

        assert_eq!(
            spec.effects,
            vec![SkillEffect::Buff {
                bonus_damage: 30.0,
                bonus_max_health: 200.0,
            }]
        );
        assert_eq!(spec.active_duration, 5.0);
    }

    #[test]
    fn test_buff_without_duration_becomes_instant_heal() {
        let catalog = SkillCatalog::builtin();
        let spec = catalog.resolve(&SkillConfig::new("Meat", 6.0, 0.0).with_health(90.0));

        assert_eq!(spec.pulses, PulseSchedule::new(1, DEFAULT_PULSE_INTERVAL, 0.0));
        assert_eq!(spec.effects, vec![SkillEffect::Heal { amount: 90.0 }]);
    }

    #[test]
    fn test_numeric_alias_and_unknown_ids() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.get("5"), catalog.get("Meteorite"));

        let spec = catalog.resolve(&SkillConfig::new("Mystery", 4.0, 0.0).with_damage(12.0));
        assert_eq!(spec.pulses.count, 1);
        assert_eq!(spec.pulses.delay, 0.0);
        assert_eq!(spec.effects, vec![SkillEffect::Damage { amount: 12.0 }]);
    }

    #[test]
    fn test_count_override() {
        let catalog = SkillCatalog::builtin();
        let mut config = SkillConfig::new("Arrows", 5.0, 0.0).with_damage(90.0);
        config.count = Some(6);

        let spec = catalog.resolve(&config);
        assert_eq!(spec.pulses.count, 6);
        assert_eq!(spec.effects, vec![SkillEffect::Damage { amount: 15.0 }]);
    }
}
