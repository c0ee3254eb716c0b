//! Human-readable match and batch summaries.

use std::fmt::Write as _;

use duel_core::{BatchSummary, BattleResult, Outcome, SideSummary};

pub fn outcome_line(outcome: Outcome, names: &[String; 2]) -> String {
    match outcome {
        Outcome::Player1Win => format!("{} wins", names[0]),
        Outcome::Player2Win => format!("{} wins", names[1]),
        Outcome::Tie => "Tie".to_string(),
    }
}

fn side_line(name: &str, side: &SideSummary) -> String {
    format!(
        "  {name:<12} {:>10.1} / {:<10.1} ({:>5.1}%)  dealt {:.1}",
        side.health, side.max_health, side.health_percent, side.damage_dealt
    )
}

pub fn format_result(result: &BattleResult, names: &[String; 2]) -> String {
    let mut out = String::new();
    let reason = if result.timeout { " on time" } else { "" };
    let _ = writeln!(
        out,
        "{}{} after {:.2}s",
        outcome_line(result.outcome, names),
        reason,
        result.time
    );
    let _ = writeln!(out, "{}", side_line(&names[0], &result.player1));
    let _ = write!(out, "{}", side_line(&names[1], &result.player2));
    out
}

pub fn format_batch(summary: &BatchSummary, names: &[String; 2]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} runs", summary.runs);
    let _ = writeln!(
        out,
        "  {:<12} {:>6.2}%",
        names[0],
        summary.player1_win_rate()
    );
    let _ = writeln!(
        out,
        "  {:<12} {:>6.2}%",
        names[1],
        summary.player2_win_rate()
    );
    let _ = writeln!(out, "  {:<12} {:>6.2}%", "Tie", summary.tie_rate());
    let _ = writeln!(out, "  {:<12} {:>6.2}%", "Timeouts", summary.timeout_rate());
    let _ = write!(out, "  average length {:.2}s", summary.average_time());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [String; 2] {
        ["Knight".to_string(), "Ranger".to_string()]
    }

    fn side(health: f64) -> SideSummary {
        SideSummary {
            health,
            max_health: 100.0,
            health_percent: health,
            damage_dealt: 100.0 - health,
        }
    }

    #[test]
    fn test_result_mentions_winner_and_timeout() {
        let result = BattleResult {
            outcome: Outcome::Player2Win,
            player1: side(40.0),
            player2: side(55.0),
            time: 60.0,
            timeout: true,
        };
        let text = format_result(&result, &names());
        assert!(text.starts_with("Ranger wins on time after 60.00s"));
        assert!(text.contains("Knight"));
    }

    #[test]
    fn test_batch_lists_rates() {
        let summary = BatchSummary {
            runs: 4,
            player1_wins: 3,
            player2_wins: 1,
            ties: 0,
            timeouts: 1,
            total_time: 80.0,
        };
        let text = format_batch(&summary, &names());
        assert!(text.contains("75.00%"));
        assert!(text.contains("25.00%"));
        assert!(text.contains("average length 20.00s"));
    }
}
