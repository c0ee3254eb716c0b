//! Read model handed to presentation layers.
//!
//! A [`Snapshot`] is a deep owned copy; holding one never borrows the engine
//! and later ticks never change it.

use crate::log::BattleLogEntry;
use crate::state::{
    Buff, CombatPhase, CombatState, Combatant, MatchState, Outcome, PendingPulse, Projectile, Side,
    SkillState,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillView {
    pub id: String,
    pub state: SkillState,
    /// Seconds remaining in `state`.
    pub timer: f64,
    pub cooldown: f64,
    pub activations: u32,
}

/// Public fields and effective stats of one combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub side: Side,
    pub health: f64,
    pub max_health: f64,
    pub is_dead: bool,
    pub position: f64,
    pub combat_state: CombatState,
    pub combat_phase: CombatPhase,
    pub attack_timer: f64,
    /// Base damage plus active buff bonuses.
    pub damage: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub double_damage_chance: f64,
    pub block_chance: f64,
    pub life_steal: f64,
    pub health_regen: f64,
    pub attack_speed_multiplier: f64,
    pub movement_speed: f64,
    pub range: f64,
    pub is_ranged: bool,
    pub damage_dealt: f64,
    pub skills: Vec<SkillView>,
    pub buffs: Vec<Buff>,
}

impl CombatantView {
    pub(crate) fn of(combatant: &Combatant) -> Self {
        let stats = combatant.stats();
        Self {
            side: combatant.side(),
            health: combatant.health(),
            max_health: combatant.max_health(),
            is_dead: combatant.is_dead(),
            position: combatant.position(),
            combat_state: combatant.combat_state(),
            combat_phase: combatant.combat_phase(),
            attack_timer: combatant.attack_timer(),
            damage: combatant.effective_damage(),
            crit_chance: stats.crit_chance,
            crit_multiplier: stats.crit_multiplier,
            double_damage_chance: stats.double_damage_chance,
            block_chance: stats.block_chance,
            life_steal: stats.life_steal,
            health_regen: stats.health_regen,
            attack_speed_multiplier: stats.attack_speed_multiplier,
            movement_speed: stats.movement_speed,
            range: stats.weapon.range,
            is_ranged: stats.is_ranged,
            damage_dealt: combatant.damage_dealt(),
            skills: combatant
                .skills()
                .iter()
                .map(|skill| SkillView {
                    id: skill.id().to_owned(),
                    state: skill.state(),
                    timer: skill.timer(),
                    cooldown: skill.cooldown_duration(),
                    activations: skill.activations(),
                })
                .collect(),
            buffs: combatant.buffs().to_vec(),
        }
    }

    pub fn health_fraction(&self) -> f64 {
        self.health / self.max_health
    }

    pub fn skill(&self, id: &str) -> Option<&SkillView> {
        self.skills.iter().find(|skill| skill.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Simulated seconds elapsed.
    pub time: f64,
    pub outcome: Option<Outcome>,
    pub player1: CombatantView,
    pub player2: CombatantView,
    pub projectiles: Vec<Projectile>,
    pub pulses: Vec<PendingPulse>,
    pub log: Vec<BattleLogEntry>,
}

impl Snapshot {
    pub(crate) fn capture(state: &MatchState) -> Self {
        let [p1, p2] = &state.combatants;
        Self {
            time: state.elapsed,
            outcome: state.outcome,
            player1: CombatantView::of(p1),
            player2: CombatantView::of(p2),
            projectiles: state.projectiles.clone(),
            pulses: state.pulses.clone(),
            log: state.log.entries().to_vec(),
        }
    }

    pub fn combatant(&self, side: Side) -> &CombatantView {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    /// SHA-256 over the bincode encoding of the snapshot.
    ///
    /// Two engines given identical inputs produce identical digests at every
    /// tick.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hasher.finalize().into())
    }
}
