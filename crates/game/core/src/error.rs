//! Common error infrastructure for duel-core.
//!
//! The rules themselves cannot fail: resolution and search only ever see
//! actions that already passed the legality predicate. The single fallible
//! surface is that predicate, which callers run on untrusted input.

use crate::action::Tier;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: selecting an exhausted offense tier
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all duel-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// An action the acting side has no resources left for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IllegalActionError {
    #[error("no uses left for offense tier {}", .tier.damage())]
    OffenseExhausted { tier: Tier },

    #[error("no guards left")]
    GuardsExhausted,
}

impl GameError for IllegalActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OffenseExhausted { .. } => "OFFENSE_EXHAUSTED",
            Self::GuardsExhausted => "GUARDS_EXHAUSTED",
        }
    }
}
