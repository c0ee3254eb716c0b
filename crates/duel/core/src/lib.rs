//! Deterministic fixed-timestep PvP combat simulation.
//!
//! `duel-core` advances two stat-driven combatants through movement, weapon
//! attacks, skills and projectiles until one of them wins or time runs out.
//! All state mutation flows through [`engine::BattleEngine::tick`]; callers
//! read the match through owned [`snapshot::Snapshot`]s and drive real time
//! through a [`clock::BattleClock`].
pub mod clock;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod stats;

pub use clock::{BattleClock, ClockError, FixedStep, FrameError, FrameReport};
pub use config::{BattleConfig, BlockPolicy, ConfigError, RollMode};
pub use engine::{
    BatchSummary, BattleEngine, BattleResult, SetupError, SideSummary, SimulationError, TickError,
    simulate_many,
};
pub use error::{DuelError, ErrorSeverity};
pub use log::{BattleLog, BattleLogEntry, LogEvent};
pub use snapshot::{CombatantView, SkillView, Snapshot};
pub use state::{
    Buff, CombatPhase, CombatState, Combatant, Outcome, PendingPulse, Projectile, Side,
    SkillInstance, SkillState,
};
pub use stats::{
    CombatantStats, PulseSchedule, SkillEffect, SkillEffectKind, SkillSpec, StatsError,
    WeaponProfile,
};
