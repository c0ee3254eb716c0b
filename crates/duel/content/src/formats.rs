//! Serialized shapes of matchup files.

use duel_core::{CombatantStats, WeaponProfile};
use serde::{Deserialize, Serialize};

use crate::catalog::{SkillCatalog, SkillConfig};

/// Weapons reaching further than this are treated as ranged when the file
/// does not say otherwise.
pub const RANGED_REACH: f64 = 1.0;

/// Stat block for one side of a matchup.
///
/// Flat `damage`/`health` are scaled by their multipliers on conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantSpec {
    pub name: String,
    pub damage: f64,
    pub health: f64,
    pub damage_multiplier: f64,
    pub health_multiplier: f64,
    pub skill_damage_multiplier: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub double_damage_chance: f64,
    pub block_chance: f64,
    pub life_steal: f64,
    pub health_regen: f64,
    pub attack_speed: f64,
    pub movement_speed: f64,
    pub weapon: WeaponProfile,
    pub ranged: Option<bool>,
    pub projectile_speed: Option<f64>,
    pub skill_cooldown_reduction: f64,
    pub skills: Vec<SkillConfig>,
}

impl Default for CombatantSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            damage: 0.0,
            health: 0.0,
            damage_multiplier: 0.0,
            health_multiplier: 0.0,
            skill_damage_multiplier: 1.0,
            crit_chance: 0.0,
            crit_multiplier: CombatantStats::DEFAULT_CRIT_MULTIPLIER,
            double_damage_chance: 0.0,
            block_chance: 0.0,
            life_steal: 0.0,
            health_regen: 0.0,
            attack_speed: 1.0,
            movement_speed: CombatantStats::DEFAULT_MOVEMENT_SPEED,
            weapon: WeaponProfile::default(),
            ranged: None,
            projectile_speed: None,
            skill_cooldown_reduction: 0.0,
            skills: Vec::new(),
        }
    }
}

impl CombatantSpec {
    pub fn is_ranged(&self) -> bool {
        self.ranged.unwrap_or(self.weapon.range > RANGED_REACH)
    }

    /// Resolves this stat block into engine stats, expanding skills through `catalog`.
    ///
    /// No validation happens here; the engine rejects bad stat blocks.
    pub fn to_stats(&self, catalog: &SkillCatalog) -> CombatantStats {
        let mut stats = CombatantStats::new(
            self.damage * (1.0 + self.damage_multiplier),
            self.health * (1.0 + self.health_multiplier),
        )
        .with_weapon(self.weapon)
        .with_crit(self.crit_chance, self.crit_multiplier)
        .with_double_damage(self.double_damage_chance)
        .with_block(self.block_chance)
        .with_life_steal(self.life_steal)
        .with_health_regen(self.health_regen)
        .with_attack_speed(self.attack_speed)
        .with_movement_speed(self.movement_speed)
        .with_cooldown_reduction(self.skill_cooldown_reduction);

        if self.is_ranged() {
            stats = stats.ranged(
                self.projectile_speed
                    .unwrap_or(CombatantStats::DEFAULT_PROJECTILE_SPEED),
            );
        }

        for skill in &self.skills {
            let scaled = SkillConfig {
                damage: skill.damage * self.skill_damage_multiplier,
                ..skill.clone()
            };
            stats = stats.with_skill(catalog.resolve(&scaled));
        }
        stats
    }

    pub fn display_name(&self, side: duel_core::Side) -> String {
        if self.name.is_empty() {
            side.to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Both sides of a match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub player1: CombatantSpec,
    pub player2: CombatantSpec,
}

impl Matchup {
    pub fn to_stats(&self, catalog: &SkillCatalog) -> (CombatantStats, CombatantStats) {
        (
            self.player1.to_stats(catalog),
            self.player2.to_stats(catalog),
        )
    }
}
