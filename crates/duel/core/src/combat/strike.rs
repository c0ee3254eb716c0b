//! Outgoing weapon damage: crit and double-damage rolls.

use crate::rng::{RollContext, Roller};
use crate::state::Side;
use crate::stats::CombatantStats;

/// Resolved outgoing weapon hit, before the defender's block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strike {
    pub amount: f64,
    pub crit: bool,
    pub double: bool,
}

/// Rolls crit and double damage for a weapon hit of `base` damage.
///
/// # Formula
///
/// ```text
/// seeded:
///     amount = base
///     if roll(min(crit_chance, 1)):          amount *= crit_multiplier
///     if roll(min(double_damage_chance, 1)): amount *= 2
///
/// expected value:
///     amount = base
///            * (1 + min(crit_chance, 1) * (crit_multiplier - 1))
///            * (1 + min(double_damage_chance, 1))
/// ```
///
/// The two rolls are independent and always made in this order.
pub fn roll_strike(base: f64, stats: &CombatantStats, roller: &mut Roller, side: Side) -> Strike {
    let crit_p = stats.crit_chance.clamp(0.0, 1.0);
    let double_p = stats.double_damage_chance.clamp(0.0, 1.0);

    if roller.is_expected_value() {
        let amount = base * (1.0 + crit_p * (stats.crit_multiplier - 1.0)) * (1.0 + double_p);
        return Strike {
            amount,
            crit: false,
            double: false,
        };
    }

    let crit = roller.roll(side, RollContext::Crit, crit_p);
    let double = roller.roll(side, RollContext::DoubleDamage, double_p);

    let mut amount = base;
    if crit {
        amount *= stats.crit_multiplier;
    }
    if double {
        amount *= 2.0;
    }

    Strike {
        amount,
        crit,
        double,
    }
}
