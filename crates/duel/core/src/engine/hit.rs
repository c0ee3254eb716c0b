//! Damage application shared by weapon hits, projectiles and skill pulses.

use crate::combat::{lifesteal_heal, resolve_block};
use crate::config::BlockPolicy;
use crate::log::LogEvent;
use crate::state::{MatchState, Side, pair_mut};

/// Where a hit came from. Only weapon hits lifesteal.
#[derive(Clone, Copy, Debug)]
pub(crate) enum HitKind<'a> {
    Weapon,
    Skill(&'a str),
}

/// Applies `amount` from `attacker` to its opponent: block, clamp, lifesteal,
/// death. Returns the health the defender actually lost.
pub(crate) fn deliver_hit(
    state: &mut MatchState,
    policy: BlockPolicy,
    attacker: Side,
    amount: f64,
    kind: HitKind<'_>,
) -> f64 {
    let time = state.elapsed;
    let defender = attacker.opponent();
    if amount <= 0.0 || state.combatant(defender).is_dead() {
        return 0.0;
    }

    let block_chance = state.combatant(defender).stats().block_chance;
    let mitigated = resolve_block(amount, block_chance, policy, &mut state.roller, defender);
    if mitigated.was_blocked() {
        state.log.push(
            time,
            LogEvent::Blocked,
            format!("{defender} blocked {:.1} from {attacker}", amount - mitigated.damage()),
        );
    }
    let damage = mitigated.damage();
    if damage <= 0.0 {
        return 0.0;
    }

    let (source, target) = pair_mut(&mut state.combatants, attacker);
    let dealt = target.take_damage(damage);
    source.damage_dealt += dealt;

    let (event, label) = match kind {
        HitKind::Skill(skill_id) => (LogEvent::SkillHit, skill_id),
        HitKind::Weapon if defender == Side::Player1 => (LogEvent::DamageTaken, "hit"),
        HitKind::Weapon => (LogEvent::DamageDealt, "hit"),
    };
    state.log.push(
        time,
        event,
        format!(
            "{attacker} {label} {defender} for {dealt:.1} ({:.1}/{:.1})",
            target.health(),
            target.max_health()
        ),
    );

    if matches!(kind, HitKind::Weapon) {
        let ratio = source.stats().life_steal;
        let healed = source.heal(lifesteal_heal(dealt, ratio));
        if healed > 0.0 {
            state.log.push(
                time,
                LogEvent::Lifesteal,
                format!("{attacker} healed {healed:.1}"),
            );
        }
    }

    if target.is_dead() {
        tracing::debug!(time, side = %defender, "combatant defeated");
        state
            .log
            .push(time, LogEvent::Death, format!("{defender} was defeated"));
    }

    dealt
}
