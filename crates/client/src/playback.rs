//! Real-time playback: paces the engine against the wall clock and streams
//! battle log entries as they are written.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use duel_core::{BattleClock, BattleEngine, BattleLog, BattleResult};
use tokio::time::{Instant, MissedTickBehavior};

/// Prints each battle log entry exactly once.
pub struct LogPrinter<W> {
    out: W,
    printed: usize,
}

impl<W: Write> LogPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, printed: 0 }
    }

    /// Writes entries added since the last call. Returns how many.
    pub fn flush(&mut self, log: &BattleLog) -> std::io::Result<usize> {
        let fresh = log.since(self.printed);
        for entry in fresh {
            writeln!(self.out, "{entry}")?;
        }
        self.printed += fresh.len();
        self.out.flush()?;
        Ok(fresh.len())
    }

    pub fn printed(&self) -> usize {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Drives `engine` through `clock` once per `frame_interval` until the match
/// ends. Returns `None` when interrupted with Ctrl-C.
pub async fn play<W: Write>(
    engine: &mut BattleEngine,
    clock: &mut BattleClock,
    frame_interval: Duration,
    printer: &mut LogPrinter<W>,
) -> Result<Option<BattleResult>> {
    let mut ticker = tokio::time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    printer.flush(engine.log())?;
    let mut last = Instant::now();
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut interrupt => {
                tracing::info!(elapsed = engine.elapsed(), "playback interrupted");
                return Ok(None);
            }
        }

        let now = Instant::now();
        let wall = now.duration_since(last).as_secs_f64();
        last = now;

        let report = clock
            .advance(wall, engine)
            .with_context(|| format!("Match failed at {:.3}s", engine.elapsed()))?;
        printer.flush(engine.log())?;
        if report.dropped > 0.0 {
            tracing::debug!(dropped = report.dropped, "frame budget exceeded");
        }
        if report.terminal {
            break;
        }
    }

    engine
        .result()
        .map(Some)
        .context("Match stopped without an outcome")
}
