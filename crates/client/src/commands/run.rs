//! `duel run`: real-time playback.

use anyhow::{Context, Result};
use clap::Parser;
use duel_core::BattleClock;

use super::MatchArgs;
use crate::config::ClientConfig;
use crate::playback::{LogPrinter, play};
use crate::report::format_result;

/// Play a match in real time, printing events as they happen
#[derive(Parser, Debug)]
pub struct Run {
    #[command(flatten)]
    pub args: MatchArgs,

    /// Simulated seconds per wall second; overrides DUEL_SPEED
    #[arg(long)]
    pub speed: Option<f64>,
}

impl Run {
    pub async fn execute(self, client: &ClientConfig) -> Result<()> {
        let setup = self.args.load(client)?;
        let mut engine = setup.engine()?;
        let speed = self.speed.unwrap_or(client.speed);
        let mut clock = BattleClock::new(setup.config.fixed_step, setup.config.max_steps_per_frame)
            .and_then(|clock| clock.with_speed(speed))
            .context("Invalid playback clock")?;

        tracing::info!(
            player1 = %setup.names[0],
            player2 = %setup.names[1],
            speed,
            "starting playback"
        );

        let mut printer = LogPrinter::new(std::io::stdout());
        match play(&mut engine, &mut clock, client.frame_interval, &mut printer).await? {
            Some(result) => println!("\n{}", format_result(&result, &setup.names)),
            None => println!("\nInterrupted at {:.2}s", engine.elapsed()),
        }
        Ok(())
    }
}
