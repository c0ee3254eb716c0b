//! Duel client binary.
//!
//! ```bash
//! # Watch a match at four times real speed
//! cargo run -p duel-client -- run crates/duel/content/data/matchups/duel.ron --speed 4
//!
//! # Win rates over 10k seeded runs
//! cargo run -p duel-client -- batch crates/duel/content/data/matchups/duel.ron \
//!     --config crates/duel/content/data/battle.toml --runs 10000
//! ```

use anyhow::Result;
use clap::Parser;
use duel_client::ClientConfig;
use duel_client::commands::{Batch, Run, Simulate};
use duel_client::logging::setup_logging;

/// Deterministic PvP duel simulator
#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Deterministic fixed-timestep PvP combat simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a match in real time
    Run(Run),

    /// Run one match headless and print the result
    Simulate(Simulate),

    /// Estimate win rates over many seeded runs
    Batch(Batch),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let client = ClientConfig::from_env();
    let _guard = setup_logging(client.log_dir.as_deref())?;

    tracing::debug!(?client, "client configured");

    match cli.command {
        Command::Run(cmd) => cmd.execute(&client).await,
        Command::Simulate(cmd) => cmd.execute(&client),
        Command::Batch(cmd) => cmd.execute(&client),
    }
}
