use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::stats::CombatantStats;

use super::{Buff, Side, SkillInstance};

/// Movement/engagement state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatState {
    Moving,
    Fighting,
}

/// Weapon attack cycle, advanced only while `Fighting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatPhase {
    Idle,
    Charging,
    Resolving,
    Recovering,
}

/// A combatant in the simulation.
///
/// Effective damage and max health are base stats plus the sum of active
/// buffs, so removing a buff retracts its contribution with no separate
/// bookkeeping.
#[derive(Clone, Debug)]
pub struct Combatant {
    side: Side,
    stats: CombatantStats,
    pub(crate) health: f64,
    pub(crate) position: f64,
    pub(crate) combat_state: CombatState,
    pub(crate) combat_phase: CombatPhase,
    /// Seconds spent in the current attack phase.
    pub(crate) attack_timer: f64,
    pub(crate) skills: ArrayVec<SkillInstance, { BattleConfig::MAX_SKILLS }>,
    pub(crate) buffs: ArrayVec<Buff, { BattleConfig::MAX_SKILLS }>,
    /// Regeneration per second, refreshed from max health once a second.
    pub(crate) regen_rate: f64,
    pub(crate) regen_timer: f64,
    pub(crate) damage_dealt: f64,
}

impl Combatant {
    /// Builds a combatant from validated stats.
    pub(crate) fn new(side: Side, stats: CombatantStats, position: f64, config: &BattleConfig) -> Self {
        let skills = stats
            .skills
            .iter()
            .take(BattleConfig::MAX_SKILLS)
            .map(|spec| {
                let cooldown = spec
                    .effective_cooldown(stats.skill_cooldown_reduction, config.min_cooldown_fraction);
                SkillInstance::new(spec.clone(), config.skill_startup_delay, cooldown)
            })
            .collect();

        Self {
            side,
            health: stats.max_health,
            position,
            combat_state: CombatState::Moving,
            combat_phase: CombatPhase::Idle,
            attack_timer: 0.0,
            skills,
            buffs: ArrayVec::new(),
            regen_rate: stats.health_regen * stats.max_health,
            regen_timer: 0.0,
            damage_dealt: 0.0,
            stats,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Base stats as supplied at construction.
    pub fn stats(&self) -> &CombatantStats {
        &self.stats
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.stats.max_health + self.buffs.iter().map(|buff| buff.bonus_max_health).sum::<f64>()
    }

    pub fn effective_damage(&self) -> f64 {
        self.stats.damage + self.buffs.iter().map(|buff| buff.bonus_damage).sum::<f64>()
    }

    pub fn health_fraction(&self) -> f64 {
        self.health / self.max_health()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn combat_state(&self) -> CombatState {
        self.combat_state
    }

    pub fn combat_phase(&self) -> CombatPhase {
        self.combat_phase
    }

    pub fn attack_timer(&self) -> f64 {
        self.attack_timer
    }

    pub fn skills(&self) -> &[SkillInstance] {
        &self.skills
    }

    pub fn buffs(&self) -> &[Buff] {
        &self.buffs
    }

    /// Total damage this combatant has dealt (after block, capped by health).
    pub fn damage_dealt(&self) -> f64 {
        self.damage_dealt
    }

    /// Removes up to `amount` health. Returns the health actually lost.
    pub(crate) fn take_damage(&mut self, amount: f64) -> f64 {
        let lost = amount.max(0.0).min(self.health);
        self.health -= lost;
        if self.health <= 0.0 {
            self.health = 0.0;
        }
        lost
    }

    /// Restores up to `amount` health, clamped to max health. Returns the gain.
    pub(crate) fn heal(&mut self, amount: f64) -> f64 {
        if self.is_dead() {
            return 0.0;
        }
        let before = self.health;
        self.health = (self.health + amount.max(0.0)).min(self.max_health());
        self.health - before
    }

    /// Applies a buff; a health bonus also heals by the same amount. A second
    /// buff from the same skill stacks into the first.
    ///
    /// Returns the buff back if every slot is taken.
    pub(crate) fn add_buff(&mut self, buff: Buff) -> Result<(), Buff> {
        let heal = buff.bonus_max_health;
        match self.buffs.iter_mut().find(|held| held.skill_id == buff.skill_id) {
            Some(held) => {
                held.bonus_damage += buff.bonus_damage;
                held.bonus_max_health += buff.bonus_max_health;
                held.remaining = held.remaining.max(buff.remaining);
            }
            None => self.buffs.try_push(buff).map_err(|err| err.element())?,
        }
        self.health = (self.health + heal).min(self.max_health());
        Ok(())
    }

    /// Retracts the buff granted by `skill_id` and re-clamps health.
    pub(crate) fn remove_buff(&mut self, skill_id: &str) -> Option<Buff> {
        let index = self.buffs.iter().position(|buff| buff.skill_id == skill_id)?;
        let buff = self.buffs.remove(index);
        self.health = self.health.min(self.max_health());
        Some(buff)
    }

    /// Switches engagement state; any change resets the attack cycle.
    pub(crate) fn set_combat_state(&mut self, state: CombatState) -> bool {
        if self.combat_state == state {
            return false;
        }
        self.combat_state = state;
        self.combat_phase = CombatPhase::Idle;
        self.attack_timer = 0.0;
        true
    }
}
