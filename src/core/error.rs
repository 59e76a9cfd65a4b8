//! Engine error type.
//!
//! The engine has exactly one failure mode: an operation that needs a
//! non-empty set of (living) combatants was handed none. That is a
//! malformed-roster configuration error, not a gameplay outcome, so it is
//! propagated to the caller and aborts the current battle.

use thiserror::Error;

/// Errors produced by the combat engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An operation requiring at least one (living) combatant found none.
    ///
    /// Raised when the adversary picks a defense from an empty roster, or
    /// when a health-transfer power finds no living ally to receive it.
    #[error("invalid roster: {0}")]
    InvalidRoster(&'static str),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
