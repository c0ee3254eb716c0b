//! Loading matchups from disk through the command layer.

use std::fs;

use duel_client::ClientConfig;
use duel_client::commands::MatchArgs;
use duel_client::report::format_result;
use duel_core::{RollMode, simulate_many};

const MATCHUP: &str = r#"
(
    player1: (name: "Brute", damage: 60.0, health: 400.0, crit_chance: 0.3),
    player2: (
        name: "Archer",
        damage: 35.0,
        health: 380.0,
        weapon: (windup: 0.4, attack_duration: 1.1, range: 5.0),
        skills: [(id: "Arrows", damage: 90.0, cooldown: 7.0, duration: 0.0)],
    ),
)
"#;

fn write_inputs(dir: &std::path::Path, config: &str) -> MatchArgs {
    let matchup = dir.join("matchup.ron");
    let battle = dir.join("battle.toml");
    fs::write(&matchup, MATCHUP).expect("write matchup");
    fs::write(&battle, config).expect("write config");
    MatchArgs {
        matchup,
        config: Some(battle),
        seed: None,
        expected_value: false,
    }
}

#[test]
fn test_loaded_match_runs_with_file_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = write_inputs(dir.path(), "[roll_mode]\nkind = \"seeded\"\nseed = 11\n");

    let setup = args.load(&ClientConfig::default()).expect("load setup");
    assert_eq!(setup.config.roll_mode, RollMode::Seeded { seed: 11 });
    assert!(setup.player2.is_ranged);

    let mut first = setup.engine().expect("engine");
    let mut second = setup.engine().expect("engine");
    let a = first.run_to_completion().expect("run");
    let b = second.run_to_completion().expect("run");
    assert_eq!(a, b);

    let text = format_result(&a, &setup.names);
    assert!(text.contains("Brute") && text.contains("Archer"));
}

#[test]
fn test_batch_over_loaded_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = write_inputs(dir.path(), "time_limit = 30.0\n");

    let setup = args.load(&ClientConfig::default()).expect("load setup");
    let summary =
        simulate_many(&setup.player1, &setup.player2, &setup.config, 20).expect("batch");
    assert_eq!(summary.runs, 20);
    assert_eq!(summary.player1_wins + summary.player2_wins + summary.ties, 20);
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = write_inputs(dir.path(), "fixed_step = -1.0\n");

    let err = args.load(&ClientConfig::default()).expect_err("negative step");
    assert!(format!("{err:#}").contains("battle.toml"));
}
