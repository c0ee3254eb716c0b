use crate::config::BattleConfig;
use crate::state::{MatchState, Side};

/// Seconds between refreshes of the regeneration rate.
const REGEN_REFRESH: f64 = 1.0;

/// Heals `health_regen * max_health` per second at the current rate, then
/// refreshes the rate once a second so it follows max health changes from
/// buffs. The heal on a refresh tick still uses the old rate.
pub(crate) fn regenerate(state: &mut MatchState, side: Side, dt: f64) {
    let combatant = state.combatant_mut(side);
    if combatant.is_dead() || combatant.stats().health_regen <= 0.0 {
        return;
    }

    combatant.regen_timer += dt;
    let amount = combatant.regen_rate * dt;
    combatant.heal(amount);

    if combatant.regen_timer + BattleConfig::TIME_EPSILON >= REGEN_REFRESH {
        combatant.regen_timer -= REGEN_REFRESH;
        combatant.regen_rate = combatant.stats().health_regen * combatant.max_health();
    }
}
