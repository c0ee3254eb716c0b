use duel_core::{
    BattleConfig, BattleEngine, CombatState, CombatantStats, LogEvent, Outcome, SkillSpec,
    SkillState, WeaponProfile,
};

const DT: f64 = BattleConfig::DEFAULT_FIXED_STEP;

/// Start positions inside melee range so both sides engage on the first tick.
fn close_quarters() -> BattleConfig {
    BattleConfig::default()
        .with_start_positions(0.0, 0.2)
        .with_skill_startup_delay(0.0)
}

fn tick_n(engine: &mut BattleEngine, n: usize) {
    for _ in 0..n {
        engine.tick(DT).expect("tick should succeed");
    }
}

// ================================================================
// Health bounds
// ================================================================

#[test]
fn test_health_stays_within_bounds_every_tick() {
    let p1 = CombatantStats::new(18.0, 300.0)
        .with_crit(0.4, 2.5)
        .with_double_damage(0.3)
        .with_life_steal(0.5)
        .with_health_regen(0.02)
        .with_skill(SkillSpec::buff("meat", 6.0, 3.0, 0.0, 120.0));
    let p2 = CombatantStats::new(22.0, 280.0)
        .with_block(0.35)
        .with_attack_speed(1.6)
        .ranged(12.0)
        .with_weapon(WeaponProfile::new(0.3, 1.0, 6.0))
        .with_skill(SkillSpec::buff("berserk", 8.0, 4.0, 15.0, 40.0));
    let config = BattleConfig::default().with_seed(77);
    let mut engine = BattleEngine::new(p1, p2, config).expect("valid setup");

    while !engine.is_over() {
        engine.tick(DT).expect("tick should succeed");
        let snapshot = engine.snapshot();
        for view in [&snapshot.player1, &snapshot.player2] {
            assert!(view.health >= 0.0, "{:?} health below zero", view.side);
            assert!(
                view.health <= view.max_health + 1e-9,
                "{:?} health {} above max {}",
                view.side,
                view.health,
                view.max_health
            );
        }
    }
}

// ================================================================
// Skill cooldowns
// ================================================================

#[test]
fn test_cooldown_never_below_ten_percent_of_base() {
    let skill = SkillSpec::buff("morale", 10.0, 1.0, 5.0, 0.0);
    for reduction in [0.0, 0.5, 0.9, 0.95, 2.0, 100.0] {
        let stats = CombatantStats::new(1.0, 100.0)
            .with_cooldown_reduction(reduction)
            .with_skill(skill.clone());
        let engine = BattleEngine::new(stats.clone(), stats, BattleConfig::default())
            .expect("valid setup");
        let cooldown = engine.snapshot().player1.skills[0].cooldown;
        assert!(
            cooldown >= 10.0 * 0.1 - 1e-12,
            "reduction {reduction} gave cooldown {cooldown}"
        );
    }
}

#[test]
fn test_skill_cycles_active_cooldown_ready() {
    let stats = CombatantStats::new(0.0, 1000.0)
        .with_skill(SkillSpec::buff("morale", 1.0, 0.5, 5.0, 0.0));
    let mut engine =
        BattleEngine::new(stats.clone(), stats, close_quarters()).expect("valid setup");

    let mut seen = Vec::new();
    for _ in 0..300 {
        engine.tick(DT).expect("tick should succeed");
        let state = engine.snapshot().player1.skills[0].state;
        if seen.last() != Some(&state) {
            seen.push(state);
        }
    }

    // Ready at start, then strictly Active -> Cooldown -> Ready.
    assert_eq!(seen[0], SkillState::Ready);
    for pair in seen.windows(2) {
        let expected = match pair[0] {
            SkillState::Ready => SkillState::Active,
            SkillState::Active => SkillState::Cooldown,
            SkillState::Cooldown => SkillState::Ready,
            SkillState::Startup => SkillState::Ready,
        };
        assert_eq!(pair[1], expected, "illegal transition in {seen:?}");
    }
    assert!(engine.snapshot().player1.skills[0].activations >= 2);
}

// ================================================================
// Outcome rules
// ================================================================

#[test]
fn test_terminal_state_is_frozen() {
    let p1 = CombatantStats::new(40.0, 100.0).with_weapon(WeaponProfile::new(0.0, 0.5, 0.3));
    let p2 = CombatantStats::new(10.0, 100.0);
    let mut engine = BattleEngine::new(p1, p2, close_quarters()).expect("valid setup");

    engine.run_to_completion().expect("match should finish");
    let before = engine.snapshot();

    for _ in 0..10 {
        assert!(engine.tick(DT).is_err());
    }
    assert_eq!(engine.snapshot(), before);
    assert_eq!(before.log.last().map(|entry| entry.event), Some(LogEvent::Outcome));
}

#[test]
fn test_timeout_tie_for_symmetric_harmless_combatants() {
    let stats = CombatantStats::new(0.0, 100.0);
    let mut engine =
        BattleEngine::new(stats.clone(), stats, BattleConfig::default()).expect("valid setup");

    let result = engine.run_to_completion().expect("match should finish");
    assert_eq!(result.outcome, Outcome::Tie);
    assert!(result.timeout);
    assert!((result.time - 60.0).abs() < 1e-6, "ended at {}", result.time);
    assert_eq!(result.player1.health_percent, 100.0);
}

#[test]
fn test_timeout_awards_higher_health_fraction() {
    // Small absolute damage against a tiny pool beats big damage against a big one.
    let p1 = CombatantStats::new(1.0, 1_000_000.0);
    let p2 = CombatantStats::new(1.0, 2_000_000.0);
    let config = BattleConfig::default().with_time_limit(10.0);
    let mut engine = BattleEngine::new(p1, p2, config).expect("valid setup");

    let result = engine.run_to_completion().expect("match should finish");
    assert!(result.timeout);
    assert_eq!(result.outcome, Outcome::Player2Win);
    assert!(result.player2.health_percent > result.player1.health_percent);
}

#[test]
fn test_lethal_exchange_ends_in_player1_win() {
    let p1 = CombatantStats::new(150.0, 100.0).with_weapon(WeaponProfile::new(0.0, 1.5, 0.3));
    let p2 = CombatantStats::new(5.0, 100.0);
    let mut engine =
        BattleEngine::new(p1, p2, BattleConfig::default()).expect("valid setup");

    let result = engine.run_to_completion().expect("match should finish");
    assert_eq!(result.outcome, Outcome::Player1Win);
    assert!(!result.timeout);
    assert_eq!(result.player2.health, 0.0);
    assert!(engine.snapshot().player2.is_dead);
    assert_eq!(engine.log().count(LogEvent::Death), 1);
}

#[test]
fn test_same_tick_lethal_hits_resolve_player1_first() {
    let fighter = CombatantStats::new(200.0, 100.0).with_weapon(WeaponProfile::new(0.0, 1.0, 0.3));
    let mut engine =
        BattleEngine::new(fighter.clone(), fighter, close_quarters()).expect("valid setup");

    // Melee hits resolve player 1 first; player 2 is dead before its own step.
    let result = engine.run_to_completion().expect("match should finish");
    assert_eq!(result.outcome, Outcome::Player1Win);

    // Ranged hits from both land in the same projectile phase.
    let archer = CombatantStats::new(200.0, 100.0)
        .ranged(1.0)
        .with_weapon(WeaponProfile::new(0.0, 1.0, 5.0));
    let mut engine = BattleEngine::new(
        archer.clone(),
        archer,
        BattleConfig::default().with_start_positions(0.0, 1.0),
    )
    .expect("valid setup");
    let result = engine.run_to_completion().expect("match should finish");
    assert_eq!(result.outcome, Outcome::Tie);
    assert!(!result.timeout);
}

// ================================================================
// Projectiles
// ================================================================

#[test]
fn test_projectile_resolves_after_distance_over_speed() {
    // Distance 4, speed 4: one simulated second in flight.
    let archer = CombatantStats::new(10.0, 100.0)
        .ranged(4.0)
        .with_weapon(WeaponProfile::new(0.0, 100.0, 10.0));
    let dummy = CombatantStats::new(0.0, 100.0).with_movement_speed(0.0);
    let config = BattleConfig::default().with_start_positions(0.0, 4.0);
    let mut engine = BattleEngine::new(archer, dummy, config).expect("valid setup");

    // Tick 1 engages, tick 2 starts charging, tick 3 fires.
    tick_n(&mut engine, 3);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.projectiles.len(), 1);
    let spawned_at = snapshot.time;

    let mut ticks = 0;
    while !engine.snapshot().projectiles.is_empty() {
        assert_eq!(engine.snapshot().player2.health, 100.0);
        engine.tick(DT).expect("tick should succeed");
        ticks += 1;
        assert!(ticks <= 61, "projectile still in flight after {ticks} ticks");
    }

    let snapshot = engine.snapshot();
    assert!((snapshot.time - spawned_at - 1.0).abs() < 1e-6);
    assert_eq!(snapshot.player2.health, 90.0);
    assert_eq!(engine.log().count(LogEvent::ProjectileImpact), 1);
}

#[test]
fn test_projectile_ids_are_monotonic() {
    let archer = CombatantStats::new(1.0, 10_000.0)
        .ranged(2.0)
        .with_weapon(WeaponProfile::new(0.0, 0.1, 10.0));
    let dummy = CombatantStats::new(0.0, 10_000.0).with_movement_speed(0.0);
    let config = BattleConfig::default().with_start_positions(0.0, 8.0);
    let mut engine = BattleEngine::new(archer, dummy, config).expect("valid setup");

    let mut highest = 0;
    for _ in 0..240 {
        engine.tick(DT).expect("tick should succeed");
        let ids: Vec<u64> = engine.snapshot().projectiles.iter().map(|p| p.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "unordered ids {ids:?}");
        highest = highest.max(ids.last().copied().unwrap_or(0));
    }
    assert!(highest >= 3);
}

// ================================================================
// Buffs
// ================================================================

#[test]
fn test_buff_contributes_only_while_active() {
    const BASE: f64 = 10.0;
    const BONUS: f64 = 25.0;
    const DURATION: f64 = 1.0;

    let p1 = CombatantStats::new(BASE, 1_000_000.0)
        .with_skill(SkillSpec::buff("berserk", 100.0, DURATION, BONUS, 0.0));
    let p2 = CombatantStats::new(0.0, 1_000_000.0);
    let mut engine = BattleEngine::new(p1, p2, close_quarters()).expect("valid setup");

    // Run until the buff is applied.
    let activated_at = loop {
        engine.tick(DT).expect("tick should succeed");
        let view = engine.snapshot().player1;
        if view.skills[0].state == SkillState::Active {
            assert_eq!(view.damage, BASE + BONUS);
            break engine.elapsed();
        }
        assert_eq!(view.damage, BASE);
    };

    loop {
        engine.tick(DT).expect("tick should succeed");
        let view = engine.snapshot().player1;
        let since = engine.elapsed() - activated_at;
        if since < DURATION - 1e-6 {
            assert_eq!(view.damage, BASE + BONUS, "buff missing at +{since}");
            assert_eq!(view.buffs.len(), 1);
        } else {
            assert_eq!(view.damage, BASE, "buff still applied at +{since}");
            assert!(view.buffs.is_empty());
            assert_eq!(view.skills[0].state, SkillState::Cooldown);
            assert!((since - DURATION).abs() < 1e-6);
            break;
        }
    }
}

#[test]
fn test_health_buff_retraction_clamps_health() {
    let p1 = CombatantStats::new(0.0, 100.0)
        .with_skill(SkillSpec::buff("meat", 100.0, 0.5, 0.0, 50.0));
    let p2 = CombatantStats::new(0.0, 100.0);
    let mut engine = BattleEngine::new(p1, p2, close_quarters()).expect("valid setup");

    tick_n(&mut engine, 2);
    let view = engine.snapshot().player1;
    assert_eq!(view.max_health, 150.0);
    assert_eq!(view.health, 150.0);

    tick_n(&mut engine, 40);
    let view = engine.snapshot().player1;
    assert_eq!(view.max_health, 100.0);
    assert_eq!(view.health, 100.0);
    assert_eq!(engine.log().count(LogEvent::BuffExpired), 1);
}

// ================================================================
// Engagement
// ================================================================

#[test]
fn test_combatants_close_distance_then_fight() {
    let stats = CombatantStats::new(1.0, 1000.0);
    let mut engine =
        BattleEngine::new(stats.clone(), stats, BattleConfig::default()).expect("valid setup");

    // 16 units apart, closing at 8 units/s combined: about two seconds.
    tick_n(&mut engine, 60);
    assert_eq!(engine.snapshot().player1.combat_state, CombatState::Moving);
    tick_n(&mut engine, 70);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.player1.combat_state, CombatState::Fighting);
    assert_eq!(snapshot.player2.combat_state, CombatState::Fighting);
    let gap = snapshot.player2.position - snapshot.player1.position;
    assert!(gap <= 0.3 + 1e-9 && gap >= 0.0, "gap {gap}");
    assert_eq!(engine.log().count(LogEvent::Engaged), 2);
}
