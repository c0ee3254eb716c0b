use crate::config::BattleConfig;
use crate::log::LogEvent;
use crate::state::{CombatState, MatchState, Side};

use super::attack::advance_attack;

/// Movement and engagement for one combatant, followed by its attack step
/// when it was already fighting at the start of the step.
pub(crate) fn advance_combatant(state: &mut MatchState, config: &BattleConfig, side: Side, dt: f64) {
    if state.combatant(side).is_dead() || state.combatant(side.opponent()).is_dead() {
        return;
    }

    let range = state.combatant(side).stats().weapon.range;
    if in_range(state, range) {
        if engage(state, side) {
            return;
        }
        advance_attack(state, config, side, dt);
        return;
    }

    if state.combatant_mut(side).set_combat_state(CombatState::Moving) {
        tracing::trace!(time = state.elapsed, side = %side, "disengaged");
        state.log.push(
            state.elapsed,
            LogEvent::Disengaged,
            format!("{side} lost range"),
        );
    }

    step_toward(state, side, range, dt);

    if in_range(state, range) {
        engage(state, side);
    }
}

fn in_range(state: &MatchState, range: f64) -> bool {
    state.distance() <= range + BattleConfig::TIME_EPSILON
}

/// Enters `Fighting`. Returns true if the state changed this step.
fn engage(state: &mut MatchState, side: Side) -> bool {
    if !state.combatant_mut(side).set_combat_state(CombatState::Fighting) {
        return false;
    }
    let distance = state.distance();
    tracing::debug!(time = state.elapsed, side = %side, distance, "engaged");
    state.log.push(
        state.elapsed,
        LogEvent::Engaged,
        format!("{side} engaged at distance {distance:.2}"),
    );
    true
}

/// Moves toward the opponent by `movement_speed * dt`, stopping exactly at
/// weapon range.
fn step_toward(state: &mut MatchState, side: Side, range: f64, dt: f64) {
    let target = state.combatant(side.opponent()).position();
    let mover = state.combatant_mut(side);
    let gap = (target - mover.position()).abs() - range;
    let step = (mover.stats().movement_speed * dt).min(gap.max(0.0));
    let direction = (target - mover.position()).signum();
    mover.position += direction * step;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BattleEngine;
    use crate::stats::CombatantStats;

    #[test]
    fn mover_stops_exactly_at_range() {
        let config = BattleConfig::default().with_start_positions(0.0, 1.0);
        let slow = CombatantStats::new(1.0, 100.0).with_movement_speed(0.0);
        let fast = CombatantStats::new(1.0, 100.0).with_movement_speed(600.0);
        let mut engine = BattleEngine::new(fast, slow, config).unwrap();
        engine.tick(BattleConfig::DEFAULT_FIXED_STEP).unwrap();

        let snapshot = engine.snapshot();
        let gap = snapshot.player2.position - snapshot.player1.position;
        assert!((gap - 0.3).abs() < 1e-12);
        assert_eq!(snapshot.player1.combat_state, CombatState::Fighting);
    }

    #[test]
    fn losing_range_disengages_and_resets_attack() {
        use crate::log::LogEvent;
        use crate::state::CombatPhase;

        const DT: f64 = BattleConfig::DEFAULT_FIXED_STEP;
        let config = BattleConfig::default().with_start_positions(0.0, 0.2);
        let stats = CombatantStats::new(0.0, 100.0);
        let mut engine = BattleEngine::new(stats.clone(), stats, config).unwrap();

        for _ in 0..5 {
            engine.tick(DT).unwrap();
        }
        assert_eq!(engine.state.combatants[0].combat_phase(), CombatPhase::Charging);

        // Nothing in combat pushes a fighter back, so move it by hand.
        engine.state.combatants[1].position = 5.0;
        engine.tick(DT).unwrap();

        let p1 = &engine.state.combatants[0];
        assert_eq!(p1.combat_state(), CombatState::Moving);
        assert_eq!(p1.combat_phase(), CombatPhase::Idle);
        assert_eq!(p1.attack_timer(), 0.0);
        assert!(p1.position() > 0.0);
        assert_eq!(engine.log().count(LogEvent::Disengaged), 2);
        let last = engine.log().entries().iter().rev().find(|e| e.event == LogEvent::Disengaged);
        assert_eq!(last.map(|e| e.time), Some(engine.elapsed()));
    }

    #[test]
    fn both_close_from_default_positions() {
        let stats = CombatantStats::new(0.0, 100.0);
        let mut engine = BattleEngine::new(stats.clone(), stats, BattleConfig::default()).unwrap();
        engine.tick(BattleConfig::DEFAULT_FIXED_STEP).unwrap();
        let snapshot = engine.snapshot();
        assert!(snapshot.player1.position > 2.0);
        assert!(snapshot.player2.position < 18.0);
        assert_eq!(snapshot.player1.combat_state, CombatState::Moving);
    }
}
