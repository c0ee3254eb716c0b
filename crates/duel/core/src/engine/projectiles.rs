use crate::config::BlockPolicy;
use crate::log::LogEvent;
use crate::state::{MatchState, Projectile, Side};
use crate::stats::CombatantStats;

use super::hit::{HitKind, deliver_hit};

/// Launches a weapon hit from `source` at the opponent's current position.
pub(crate) fn spawn(state: &mut MatchState, source: Side, payload: f64, crit: bool) {
    let id = state.next_projectile_id;
    state.next_projectile_id += 1;

    let shooter = state.combatant(source);
    let origin_x = shooter.position();
    let target_x = state.combatant(source.opponent()).position();
    let speed = shooter
        .stats()
        .projectile_speed
        .unwrap_or(CombatantStats::DEFAULT_PROJECTILE_SPEED);

    state.projectiles.push(Projectile {
        id,
        source,
        origin_x,
        target_x,
        current_x: origin_x,
        speed,
        payload,
        crit,
    });
    state.log.push(
        state.elapsed,
        LogEvent::ProjectileSpawned,
        format!("{source} fired #{id} ({payload:.1}) from {origin_x:.2} toward {target_x:.2}"),
    );
}

/// Moves every projectile in spawn order; arrivals apply their payload once.
pub(crate) fn advance_projectiles(state: &mut MatchState, policy: BlockPolicy, dt: f64) {
    let flying = std::mem::take(&mut state.projectiles);
    let mut in_flight = Vec::with_capacity(flying.len());

    for mut projectile in flying {
        let time = state.elapsed;
        let target = projectile.source.opponent();
        if state.combatant(target).is_dead() {
            state.log.push(
                time,
                LogEvent::ProjectileLost,
                format!("#{} from {} lost its target", projectile.id, projectile.source),
            );
            continue;
        }

        if projectile.advance(dt) {
            let tag = if projectile.crit { " (crit)" } else { "" };
            state.log.push(
                time,
                LogEvent::ProjectileImpact,
                format!("#{} from {} struck {target}{tag}", projectile.id, projectile.source),
            );
            deliver_hit(
                state,
                policy,
                projectile.source,
                projectile.payload,
                HitKind::Weapon,
            );
        } else {
            in_flight.push(projectile);
        }
    }

    state.projectiles = in_flight;
}
