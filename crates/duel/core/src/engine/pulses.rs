use crate::config::{BattleConfig, BlockPolicy};
use crate::state::{MatchState, Side};

use super::errors::TickError;
use super::skills::resolve_effect;

/// Fires every pulse that has come due, player 1's first, each side in
/// scheduling order. A zero interval fires all remaining hits at once.
pub(crate) fn advance_pulses(
    state: &mut MatchState,
    policy: BlockPolicy,
    dt: f64,
) -> Result<(), TickError> {
    let mut pulses = std::mem::take(&mut state.pulses);

    for side in Side::BOTH {
        for pulse in pulses.iter_mut().filter(|pulse| pulse.source == side) {
            if pulse.armed {
                pulse.timer -= dt;
            } else {
                pulse.armed = true;
            }

            while pulse.hits_remaining > 0 && pulse.timer <= BattleConfig::TIME_EPSILON {
                for effect in &pulse.effects {
                    resolve_effect(state, policy, pulse.source, &pulse.skill_id, effect, 0.0)?;
                }
                pulse.hits_remaining -= 1;
                pulse.timer += pulse.interval;
            }
        }
    }

    let anyone_dead = state.combatants.iter().any(|combatant| combatant.is_dead());
    pulses.retain(|pulse| pulse.hits_remaining > 0 && !anyone_dead);
    state.pulses = pulses;
    Ok(())
}
