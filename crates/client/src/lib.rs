//! Command-line front end for `duel-core`.
//!
//! # Architecture
//!
//! ```text
//! duel (binary, composition root)
//!   ├─→ duel-content (matchup + battle config loading, skill catalog)
//!   ├─→ duel-core    (engine, battle clock)
//!   └─→ playback     (tokio frame pacing, log streaming)
//! ```
//!
//! Everything the engine needs is resolved before the first tick; the
//! client only decides how fast ticks are requested and what gets printed.

pub mod commands;
pub mod config;
pub mod logging;
pub mod playback;
pub mod report;

pub use config::ClientConfig;
