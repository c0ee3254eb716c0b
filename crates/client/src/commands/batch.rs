//! `duel batch`: win rates over many seeded runs.

use anyhow::{Context, Result};
use clap::Parser;
use duel_core::simulate_many;

use super::MatchArgs;
use crate::config::ClientConfig;
use crate::report::format_batch;

/// Estimate win rates over many seeded runs
#[derive(Parser, Debug)]
pub struct Batch {
    #[command(flatten)]
    pub args: MatchArgs,

    /// Number of matches; run i uses the base seed plus i
    #[arg(short = 'n', long, default_value = "1000")]
    pub runs: u64,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Batch {
    pub fn execute(self, client: &ClientConfig) -> Result<()> {
        let setup = self.args.load(client)?;
        tracing::info!(runs = self.runs, roll_mode = ?setup.config.roll_mode, "starting batch");

        let summary = simulate_many(&setup.player1, &setup.player2, &setup.config, self.runs)
            .context("Batch failed")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", format_batch(&summary, &setup.names));
        }
        Ok(())
    }
}
