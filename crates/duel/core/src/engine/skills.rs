//! Skill lifecycle resolver and the single effect dispatch point.

use crate::config::{BattleConfig, BlockPolicy};
use crate::log::LogEvent;
use crate::state::{Buff, CombatState, MatchState, PendingPulse, Side, SkillState};
use crate::stats::SkillEffect;

use super::errors::TickError;
use super::hit::{HitKind, deliver_hit};

/// Advances every skill owned by `side` by one step.
///
/// Each skill moves at most one lifecycle edge per tick, except instant
/// skills, which enter and leave `Active` in the step that activates them.
pub(crate) fn advance_skills(
    state: &mut MatchState,
    config: &BattleConfig,
    side: Side,
    dt: f64,
) -> Result<(), TickError> {
    if state.combatant(side).is_dead() {
        return Ok(());
    }

    let fighting = state.combatant(side).combat_state() == CombatState::Fighting;
    let slots = state.combatant(side).skills().len();

    for slot in 0..slots {
        let time = state.elapsed;
        let combatant = &mut state.combatants[side.index()];
        let skill = &mut combatant.skills[slot];
        let current = skill.state;

        match current {
            SkillState::Startup | SkillState::Cooldown => {
                skill.timer -= dt;
                if skill.timer <= BattleConfig::TIME_EPSILON {
                    skill.state = SkillState::Ready;
                    skill.timer = 0.0;
                    let message = format!("{side} {} ready", skill.id());
                    state.log.push(time, LogEvent::SkillReady, message);
                }
            }
            SkillState::Ready => {
                if fighting {
                    activate(state, config.block_policy, side, slot)?;
                }
            }
            SkillState::Active => {
                skill.timer -= dt;
                let remaining = skill.timer.max(0.0);
                let done = skill.timer <= BattleConfig::TIME_EPSILON;
                let id = skill.id().to_owned();
                if let Some(buff) = combatant.buffs.iter_mut().find(|buff| buff.skill_id == id) {
                    buff.remaining = remaining;
                }
                if done {
                    expire(state, side, slot);
                }
            }
        }
    }

    check_buffs(state, side)
}

fn activate(
    state: &mut MatchState,
    policy: BlockPolicy,
    side: Side,
    slot: usize,
) -> Result<(), TickError> {
    let time = state.elapsed;
    let skill = &mut state.combatants[side.index()].skills[slot];
    skill.state = SkillState::Active;
    skill.timer = skill.spec().active_duration;
    skill.activations += 1;
    let spec = skill.spec().clone();

    tracing::trace!(time, side = %side, skill = %spec.id, "skill activated");
    let instant = spec.active_duration <= BattleConfig::TIME_EPSILON;
    if instant {
        state
            .log
            .push(time, LogEvent::SkillUsed, format!("{side} used {}", spec.id));
    } else {
        state.log.push(
            time,
            LogEvent::SkillActivated,
            format!("{side} {} active for {:.1}s", spec.id, spec.active_duration),
        );
    }

    let (pulsed, immediate): (Vec<SkillEffect>, Vec<SkillEffect>) =
        spec.effects.iter().cloned().partition(SkillEffect::is_pulsed);

    for effect in &immediate {
        resolve_effect(state, policy, side, &spec.id, effect, spec.active_duration)?;
    }

    if !pulsed.is_empty() {
        state.pulses.push(PendingPulse {
            source: side,
            skill_id: spec.id.clone(),
            effects: pulsed,
            hits_remaining: spec.pulses.count,
            interval: spec.pulses.interval,
            timer: spec.pulses.delay,
            armed: false,
        });
    }

    if instant {
        expire(state, side, slot);
    }
    Ok(())
}

/// `Active -> Cooldown`, retracting the skill's buff in the same step.
fn expire(state: &mut MatchState, side: Side, slot: usize) {
    let time = state.elapsed;
    let combatant = &mut state.combatants[side.index()];
    let skill = &mut combatant.skills[slot];
    skill.state = SkillState::Cooldown;
    skill.timer = skill.cooldown_duration();
    let id = skill.id().to_owned();

    if let Some(buff) = combatant.remove_buff(&id) {
        state.log.push(
            time,
            LogEvent::BuffExpired,
            format!(
                "{side} {id} faded (-{:.1} damage, -{:.1} max health)",
                buff.bonus_damage, buff.bonus_max_health
            ),
        );
    }
}

/// Applies one skill effect on behalf of `side`.
pub(crate) fn resolve_effect(
    state: &mut MatchState,
    policy: BlockPolicy,
    side: Side,
    skill_id: &str,
    effect: &SkillEffect,
    active_duration: f64,
) -> Result<(), TickError> {
    let time = state.elapsed;
    match *effect {
        SkillEffect::Damage { amount } => {
            deliver_hit(state, policy, side, amount, HitKind::Skill(skill_id));
        }
        SkillEffect::Heal { amount } => {
            let combatant = &mut state.combatants[side.index()];
            let healed = combatant.heal(amount);
            if healed > 0.0 {
                let message = format!(
                    "{side} {skill_id} healed {healed:.1} ({:.1}/{:.1})",
                    combatant.health(),
                    combatant.max_health()
                );
                state.log.push(time, LogEvent::SkillHeal, message);
            }
        }
        SkillEffect::Buff {
            bonus_damage,
            bonus_max_health,
        } => {
            let buff = Buff {
                skill_id: skill_id.to_owned(),
                bonus_damage,
                bonus_max_health,
                remaining: active_duration,
            };
            state.combatants[side.index()]
                .add_buff(buff)
                .map_err(|buff| TickError::BuffCapacity {
                    side,
                    skill_id: buff.skill_id,
                })?;
            state.log.push(
                time,
                LogEvent::BuffApplied,
                format!("{side} {skill_id}: +{bonus_damage:.1} damage, +{bonus_max_health:.1} max health"),
            );
        }
    }
    Ok(())
}

/// Every held buff must belong to a skill that is currently `Active`.
fn check_buffs(state: &MatchState, side: Side) -> Result<(), TickError> {
    let combatant = state.combatant(side);
    for buff in combatant.buffs() {
        let backed = combatant
            .skills()
            .iter()
            .any(|skill| skill.id() == buff.skill_id && skill.state() == SkillState::Active);
        if !backed {
            return Err(TickError::OrphanBuff {
                side,
                skill_id: buff.skill_id.clone(),
            });
        }
    }
    Ok(())
}
