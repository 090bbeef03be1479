//! Die and pool roll results.

use serde::{Deserialize, Serialize};

use super::DieKind;
use crate::resolution::{self, NormalizedPoolResult, SymbolCounts};
use crate::symbol::Symbol;

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The kind of die that was rolled.
    pub kind: DieKind,
    /// The symbols on the face that came up (at most two).
    pub symbols: Vec<Symbol>,
}

impl DieResult {
    /// Create a result for a die of `kind` showing `symbols`.
    pub fn new(kind: DieKind, symbols: Vec<Symbol>) -> Self {
        Self { kind, symbols }
    }

    /// A result with no symbols.
    pub fn blank(kind: DieKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Returns true if the face showed no symbols.
    pub fn is_blank(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The result of rolling an entire pool, in pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolResult {
    /// Individual die results.
    pub die_results: Vec<DieResult>,
}

impl PoolResult {
    /// Create a pool result from individual die results.
    pub fn new(die_results: Vec<DieResult>) -> Self {
        Self { die_results }
    }

    /// Raw per-symbol counts, with triumphs and despairs promoted.
    pub fn aggregate(&self) -> SymbolCounts {
        resolution::aggregate(self.die_results.iter().flat_map(|r| r.symbols.iter().copied()))
    }

    /// The net narrative outcome after cancelling opposed symbols.
    pub fn normalize(&self) -> NormalizedPoolResult {
        resolution::normalize(&self.aggregate())
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.die_results.len()
    }
}

impl std::fmt::Display for PoolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalize())
    }
}
