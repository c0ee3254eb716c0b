use crate::error::{DuelError, ErrorSeverity};

/// A stat block rejected at engine construction.
///
/// Values are reported as given; nothing is clamped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("ranged combatant requires a positive projectile speed")]
    MissingProjectileSpeed,

    #[error("too many skills equipped: {count} (max {max})")]
    TooManySkills { count: usize, max: usize },

    #[error("skill at slot {slot} has an empty id")]
    EmptySkillId { slot: usize },

    #[error("skill '{id}' is equipped more than once")]
    DuplicateSkill { id: String },

    #[error("skill '{id}': {field} must be finite and non-negative, got {value}")]
    InvalidSkillValue {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("skill '{id}': pulse count must be at least 1")]
    EmptyPulseSchedule { id: String },

    #[error("skill '{id}': pulse count {count} exceeds {max}")]
    TooManyPulses { id: String, count: u32, max: u32 },

    #[error("skill '{id}': buff effect requires a positive active duration")]
    InstantBuff { id: String },
}

impl DuelError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "STATS_NON_FINITE",
            Self::Negative { .. } => "STATS_NEGATIVE",
            Self::NotPositive { .. } => "STATS_NOT_POSITIVE",
            Self::MissingProjectileSpeed => "STATS_MISSING_PROJECTILE_SPEED",
            Self::TooManySkills { .. } => "STATS_TOO_MANY_SKILLS",
            Self::EmptySkillId { .. } => "STATS_EMPTY_SKILL_ID",
            Self::DuplicateSkill { .. } => "STATS_DUPLICATE_SKILL",
            Self::InvalidSkillValue { .. } => "STATS_INVALID_SKILL_VALUE",
            Self::EmptyPulseSchedule { .. } => "STATS_EMPTY_PULSE_SCHEDULE",
            Self::TooManyPulses { .. } => "STATS_TOO_MANY_PULSES",
            Self::InstantBuff { .. } => "STATS_INSTANT_BUFF",
        }
    }
}
