//! Error types for the dice engine.

use crate::symbol::Symbol;

/// Errors that can occur during dice operations.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A pool-encoding character does not name a die kind.
    #[error("invalid die kind character: {0:?}")]
    InvalidKindChar(char),

    /// A die kind name could not be parsed.
    #[error("unknown die kind: {0}")]
    UnknownKind(String),

    /// A pool result was requested before the pool was rolled.
    #[error("no pool result: the pool has not been rolled")]
    NoPoolResult,

    /// A net result holds both symbols of an opposed pair.
    #[error("net result holds both {0} and {1}")]
    UncancelledSymbols(Symbol, Symbol),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
