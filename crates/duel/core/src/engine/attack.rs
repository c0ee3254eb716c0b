//! Weapon attack cycle: `Idle -> Charging -> Resolving -> Recovering -> Idle`.

use crate::combat::roll_strike;
use crate::config::BattleConfig;
use crate::log::LogEvent;
use crate::state::{CombatPhase, MatchState, Side};

use super::hit::{HitKind, deliver_hit};
use super::projectiles;

/// Advances the attack phase of a `Fighting` combatant by one step.
///
/// `Idle` and `Resolving` each last exactly one tick. The hit fires on the
/// transition into `Resolving`; a charge that completes with the opponent
/// beyond `range + resolve_range_slack` is held until it is back in reach.
pub(crate) fn advance_attack(state: &mut MatchState, config: &BattleConfig, side: Side, dt: f64) {
    let distance = state.distance();
    let combatant = &mut state.combatants[side.index()];

    match combatant.combat_phase {
        CombatPhase::Idle => {
            combatant.combat_phase = CombatPhase::Charging;
            combatant.attack_timer = 0.0;
        }
        CombatPhase::Charging => {
            combatant.attack_timer += dt;
            let charged = combatant.attack_timer + BattleConfig::TIME_EPSILON
                >= combatant.stats().effective_windup();
            let reach = combatant.stats().weapon.range + config.resolve_range_slack;
            if charged && distance <= reach {
                combatant.combat_phase = CombatPhase::Resolving;
                combatant.attack_timer = 0.0;
                resolve_strike(state, config, side);
            }
        }
        CombatPhase::Resolving => {
            combatant.combat_phase = CombatPhase::Recovering;
            combatant.attack_timer = 0.0;
        }
        CombatPhase::Recovering => {
            combatant.attack_timer += dt;
            if combatant.attack_timer + BattleConfig::TIME_EPSILON
                >= combatant.stats().effective_recovery()
            {
                combatant.combat_phase = CombatPhase::Idle;
                combatant.attack_timer = 0.0;
            }
        }
    }
}

fn resolve_strike(state: &mut MatchState, config: &BattleConfig, side: Side) {
    let time = state.elapsed;
    let attacker = &state.combatants[side.index()];
    let base = attacker.effective_damage();
    let ranged = attacker.stats().is_ranged;
    let strike = roll_strike(base, attacker.stats(), &mut state.roller, side);

    state.log.push(
        time,
        LogEvent::Attack,
        format!("{side} attacks for {:.1}", strike.amount),
    );
    if strike.crit {
        state
            .log
            .push(time, LogEvent::Crit, format!("{side} landed a critical hit"));
    }
    if strike.double {
        state
            .log
            .push(time, LogEvent::DoubleDamage, format!("{side} doubled the hit"));
    }

    if ranged {
        projectiles::spawn(state, side, strike.amount, strike.crit);
    } else {
        deliver_hit(state, config.block_policy, side, strike.amount, HitKind::Weapon);
    }
}
