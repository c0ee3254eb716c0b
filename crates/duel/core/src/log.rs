//! Append-only battle log.
//!
//! This is the domain record of what happened in a match, carried in every
//! snapshot. Operational diagnostics go through `tracing` instead.

/// Event tag of a log entry. Renders as `SCREAMING_SNAKE_CASE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LogEvent {
    Attack,
    Crit,
    DoubleDamage,
    Blocked,
    /// Player 1 landed damage.
    DamageDealt,
    /// Player 1 received damage.
    DamageTaken,
    Lifesteal,
    SkillActivated,
    SkillUsed,
    SkillReady,
    BuffApplied,
    BuffExpired,
    SkillHit,
    SkillHeal,
    ProjectileSpawned,
    ProjectileImpact,
    ProjectileLost,
    Engaged,
    Disengaged,
    Death,
    Outcome,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogEntry {
    /// Simulated seconds since the match began.
    pub time: f64,
    pub event: LogEvent,
    pub details: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BattleLog {
    entries: Vec<BattleLogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Timestamps never go backwards; an earlier `time` is
    /// raised to the latest recorded one.
    pub fn push(&mut self, time: f64, event: LogEvent, details: impl Into<String>) {
        let floor = self.entries.last().map_or(time, |last| last.time);
        self.entries.push(BattleLogEntry {
            time: time.max(floor),
            event,
            details: details.into(),
        });
    }

    pub fn entries(&self) -> &[BattleLogEntry] {
        &self.entries
    }

    /// Entries appended after the first `offset`, for incremental readers.
    pub fn since(&self, offset: usize) -> &[BattleLogEntry] {
        self.entries.get(offset..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, event: LogEvent) -> usize {
        self.entries.iter().filter(|entry| entry.event == event).count()
    }
}

impl core::fmt::Display for BattleLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{:>6.2}s] {}: {}", self.time, self.event, self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_screaming_snake_case() {
        assert_eq!(LogEvent::DoubleDamage.to_string(), "DOUBLE_DAMAGE");
        assert_eq!(LogEvent::SkillActivated.as_ref(), "SKILL_ACTIVATED");
    }

    #[test]
    fn timestamps_never_decrease() {
        let mut log = BattleLog::new();
        log.push(1.0, LogEvent::Attack, "a");
        log.push(0.5, LogEvent::Attack, "b");
        assert_eq!(log.entries()[1].time, 1.0);
    }

    #[test]
    fn since_returns_tail() {
        let mut log = BattleLog::new();
        log.push(0.1, LogEvent::Engaged, "Player1");
        log.push(0.2, LogEvent::Attack, "Player1");
        assert_eq!(log.since(1).len(), 1);
        assert!(log.since(5).is_empty());
        assert_eq!(log.count(LogEvent::Attack), 1);
    }

    #[test]
    fn entry_display() {
        let entry = BattleLogEntry {
            time: 1.5,
            event: LogEvent::Crit,
            details: "Player1 crit for 30.0".into(),
        };
        assert_eq!(entry.to_string(), "[  1.50s] CRIT: Player1 crit for 30.0");
    }
}
