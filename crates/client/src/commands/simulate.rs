//! `duel simulate`: one headless match.

use anyhow::{Context, Result};
use clap::Parser;

use super::MatchArgs;
use crate::config::ClientConfig;
use crate::report::format_result;

/// Run a single match to completion without pacing
#[derive(Parser, Debug)]
pub struct Simulate {
    #[command(flatten)]
    pub args: MatchArgs,

    /// Print the full battle log before the result
    #[arg(long)]
    pub log: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Simulate {
    pub fn execute(self, client: &ClientConfig) -> Result<()> {
        let setup = self.args.load(client)?;
        let mut engine = setup.engine()?;
        let result = engine.run_to_completion().context("Match failed")?;

        if self.log {
            for entry in engine.log().entries() {
                println!("{entry}");
            }
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", format_result(&result, &setup.names));
        }
        Ok(())
    }
}
