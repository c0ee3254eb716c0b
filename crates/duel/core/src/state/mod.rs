//! Mutable simulation state owned by the engine.

mod combatant;
mod effects;
mod projectile;
mod skill;

pub use combatant::{CombatPhase, CombatState, Combatant};
pub use effects::{Buff, PendingPulse};
pub use projectile::Projectile;
pub use skill::{SkillInstance, SkillState};

use crate::log::BattleLog;
use crate::rng::Roller;

/// One of the two combatants.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player1, Side::Player2];

    pub const fn index(self) -> usize {
        match self {
            Self::Player1 => 0,
            Self::Player2 => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

/// Terminal result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Player1Win,
    Player2Win,
    Tie,
}

impl Outcome {
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Player1 => Self::Player1Win,
            Side::Player2 => Self::Player2Win,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Player1Win => Some(Side::Player1),
            Self::Player2Win => Some(Side::Player2),
            Self::Tie => None,
        }
    }
}

/// Everything a tick mutates.
#[derive(Clone, Debug)]
pub(crate) struct MatchState {
    pub(crate) elapsed: f64,
    pub(crate) combatants: [Combatant; 2],
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) pulses: Vec<PendingPulse>,
    pub(crate) log: BattleLog,
    pub(crate) roller: Roller,
    pub(crate) next_projectile_id: u64,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) timed_out: bool,
}

impl MatchState {
    pub(crate) fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    pub(crate) fn distance(&self) -> f64 {
        let [a, b] = &self.combatants;
        (a.position() - b.position()).abs()
    }
}

/// Splits the pair into (`side`, opponent) mutable borrows.
pub(crate) fn pair_mut(combatants: &mut [Combatant; 2], side: Side) -> (&mut Combatant, &mut Combatant) {
    let [first, second] = combatants;
    match side {
        Side::Player1 => (first, second),
        Side::Player2 => (second, first),
    }
}
