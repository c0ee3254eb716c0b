//! Common error infrastructure for duel-core.
//!
//! Domain errors live next to the code that raises them (`StatsError` with the
//! stat blocks, `TickError` with the engine, `ClockError` with the clock). This
//! module holds the shared classification they all implement.

/// Severity level of an error, used for categorization and handling.
///
/// - **Validation**: invalid input, rejected before any state changes
/// - **Internal**: an engine invariant broke; indicates a bug
/// - **Fatal**: the engine is poisoned and cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: negative stat, tick after the outcome, zero fixed step
    Validation,

    /// Unexpected state inconsistency detected mid-tick.
    ///
    /// Examples: buff without an active skill, health outside its bounds
    Internal,

    /// The engine refused to continue after an earlier internal fault.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an engine bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by what the caller can do about it, not by impact
/// - Give every variant a stable `error_code` for tests and log filtering
pub trait DuelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
