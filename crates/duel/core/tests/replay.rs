//! Replays: identical inputs give identical matches, however the caller
//! slices wall time.

use duel_core::{
    BattleClock, BattleConfig, BattleEngine, CombatantStats, PulseSchedule, RollMode, SkillEffect,
    SkillSpec, WeaponProfile,
};

const DT: f64 = BattleConfig::DEFAULT_FIXED_STEP;

fn knight() -> CombatantStats {
    CombatantStats::new(24.0, 420.0)
        .with_crit(0.3, 2.0)
        .with_double_damage(0.15)
        .with_block(0.2)
        .with_life_steal(0.1)
        .with_skill(SkillSpec::buff("berserk", 9.0, 4.0, 12.0, 0.0))
        .with_skill(
            SkillSpec::new("meteorite", 7.0, 0.0)
                .with_effect(SkillEffect::Damage { amount: 15.0 })
                .with_pulses(PulseSchedule::new(5, 0.3, 1.0)),
        )
}

fn ranger() -> CombatantStats {
    CombatantStats::new(19.0, 360.0)
        .with_crit(0.45, 1.8)
        .with_block(0.1)
        .with_health_regen(0.01)
        .with_attack_speed(1.3)
        .ranged(10.0)
        .with_weapon(WeaponProfile::new(0.4, 1.2, 7.0))
        .with_skill(
            SkillSpec::new("drone", 12.0, 0.0)
                .with_effect(SkillEffect::Damage { amount: 6.0 })
                .with_effect(SkillEffect::Heal { amount: 4.0 })
                .with_pulses(PulseSchedule::new(10, 0.8, 0.0)),
        )
}

fn engine(mode: RollMode) -> BattleEngine {
    let config = BattleConfig::default().with_roll_mode(mode);
    BattleEngine::new(knight(), ranger(), config).expect("valid setup")
}

#[test]
fn test_seeded_replays_have_identical_digests_every_tick() {
    let mut a = engine(RollMode::Seeded { seed: 0xDEC0DE });
    let mut b = engine(RollMode::Seeded { seed: 0xDEC0DE });

    while !a.is_over() {
        a.tick(DT).expect("tick a");
        b.tick(DT).expect("tick b");
        let (da, db) = (
            a.snapshot().digest().expect("digest a"),
            b.snapshot().digest().expect("digest b"),
        );
        assert_eq!(hex::encode(da), hex::encode(db), "diverged at {}", a.elapsed());
    }
    assert!(b.is_over());
    assert_eq!(a.result(), b.result());
}

#[test]
fn test_expected_value_mode_is_deterministic() {
    let mut a = engine(RollMode::ExpectedValue);
    let mut b = engine(RollMode::ExpectedValue);
    let ra = a.run_to_completion().expect("run a");
    let rb = b.run_to_completion().expect("run b");
    assert_eq!(ra, rb);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = engine(RollMode::Seeded { seed: 1 });
    let mut b = engine(RollMode::Seeded { seed: 2 });
    a.run_to_completion().expect("run a");
    b.run_to_completion().expect("run b");
    assert_ne!(a.snapshot().log, b.snapshot().log);
}

#[test]
fn test_clock_frames_match_direct_ticking() {
    let mut direct = engine(RollMode::Seeded { seed: 42 });
    let mut clocked = engine(RollMode::Seeded { seed: 42 });
    let mut clock = BattleClock::new(DT, 1_000).expect("valid clock");

    // Uneven frame sizes, all summing to whole ticks in the end.
    let frames = [0.004, 0.021, 0.0333, 0.0167, 0.1, 0.05, 0.0083];
    let mut ticks_run = 0u32;
    for frame in frames.iter().cycle().take(4_000) {
        if clocked.is_over() {
            break;
        }
        let report = clock.advance(*frame, &mut clocked).expect("frame");
        assert_eq!(report.dropped, 0.0);
        ticks_run += report.steps;
    }

    for _ in 0..ticks_run {
        if direct.is_over() {
            break;
        }
        direct.tick(DT).expect("direct tick");
    }
    assert_eq!(direct.snapshot(), clocked.snapshot());
}

#[test]
fn test_clock_speed_multiplier_runs_more_ticks() {
    let config = BattleConfig {
        fixed_step: 0.125,
        ..BattleConfig::default()
    };
    let mut engine = BattleEngine::new(knight(), ranger(), config).expect("valid setup");
    let mut clock = BattleClock::new(0.125, 100)
        .expect("valid clock")
        .with_speed(5.0)
        .expect("valid speed");

    let report = clock.advance(0.2, &mut engine).expect("frame");
    assert_eq!(report.steps, 8);
    assert_eq!(engine.elapsed(), 1.0);
}
