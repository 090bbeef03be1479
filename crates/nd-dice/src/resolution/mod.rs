//! Symbol aggregation and cancellation.
//!
//! Interpreting a narrative roll happens in two steps:
//! - **Aggregate**: tally every rolled symbol. Each Triumph also counts as a
//!   Success and each Despair also counts as a Failure.
//! - **Normalize**: cancel Success against Failure and Advantage against
//!   Threat one for one. Triumph, Despair, Light Side and Dark Side are
//!   reported as rolled. Only symbols with a positive net count remain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DiceError;
use crate::symbol::Symbol;

/// A count for every symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Symbol, u32>", from = "BTreeMap<Symbol, u32>")]
pub struct SymbolCounts([u32; 8]);

impl SymbolCounts {
    /// The count for `symbol`.
    pub fn get(&self, symbol: Symbol) -> u32 {
        self.0[symbol.index()]
    }

    /// Add one occurrence of `symbol`.
    pub fn increment(&mut self, symbol: Symbol) {
        self.0[symbol.index()] += 1;
    }

    fn set(&mut self, symbol: Symbol, count: u32) {
        self.0[symbol.index()] = count;
    }

    /// All symbols with their counts, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        Symbol::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl From<SymbolCounts> for BTreeMap<Symbol, u32> {
    fn from(counts: SymbolCounts) -> Self {
        counts.iter().collect()
    }
}

impl From<BTreeMap<Symbol, u32>> for SymbolCounts {
    fn from(map: BTreeMap<Symbol, u32>) -> Self {
        let mut counts = Self::default();
        for (symbol, count) in map {
            counts.set(symbol, count);
        }
        counts
    }
}

/// The net outcome of a roll. Symbols that cancelled out are absent.
///
/// Deserializing rejects a map that holds both symbols of an opposed pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Symbol, u32>", try_from = "BTreeMap<Symbol, u32>")]
pub struct NormalizedPoolResult(SymbolCounts);

/// Symbols that cancel one for one.
const OPPOSED_PAIRS: [(Symbol, Symbol); 2] = [
    (Symbol::Success, Symbol::Failure),
    (Symbol::Advantage, Symbol::Threat),
];

/// Order in which symbols appear in a formatted result.
const DISPLAY_ORDER: [Symbol; 8] = [
    Symbol::Success,
    Symbol::Advantage,
    Symbol::Triumph,
    Symbol::Failure,
    Symbol::Threat,
    Symbol::Despair,
    Symbol::LightSide,
    Symbol::DarkSide,
];

impl NormalizedPoolResult {
    /// The net count for `symbol`, or `None` if it is absent.
    pub fn get(&self, symbol: Symbol) -> Option<u32> {
        match self.0.get(symbol) {
            0 => None,
            n => Some(n),
        }
    }

    /// The present symbols with their net counts, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        DISPLAY_ORDER
            .into_iter()
            .filter_map(|s| self.get(s).map(|n| (s, n)))
    }

    /// Returns true if every symbol cancelled out.
    pub fn is_empty(&self) -> bool {
        self.0.total() == 0
    }

    /// Net successes (0 if absent).
    pub fn success(&self) -> u32 {
        self.0.get(Symbol::Success)
    }

    /// Net advantages (0 if absent).
    pub fn advantage(&self) -> u32 {
        self.0.get(Symbol::Advantage)
    }

    /// Net failures (0 if absent).
    pub fn failure(&self) -> u32 {
        self.0.get(Symbol::Failure)
    }

    /// Net threats (0 if absent).
    pub fn threat(&self) -> u32 {
        self.0.get(Symbol::Threat)
    }

    /// Triumphs rolled (0 if absent).
    pub fn triumph(&self) -> u32 {
        self.0.get(Symbol::Triumph)
    }

    /// Despairs rolled (0 if absent).
    pub fn despair(&self) -> u32 {
        self.0.get(Symbol::Despair)
    }

    /// Light side points rolled (0 if absent).
    pub fn light_side(&self) -> u32 {
        self.0.get(Symbol::LightSide)
    }

    /// Dark side points rolled (0 if absent).
    pub fn dark_side(&self) -> u32 {
        self.0.get(Symbol::DarkSide)
    }

    /// Whether the check succeeded: at least one net success remains.
    pub fn is_success(&self) -> bool {
        self.success() > 0
    }
}

impl From<NormalizedPoolResult> for BTreeMap<Symbol, u32> {
    fn from(result: NormalizedPoolResult) -> Self {
        result.iter().collect()
    }
}

impl TryFrom<BTreeMap<Symbol, u32>> for NormalizedPoolResult {
    type Error = DiceError;

    fn try_from(map: BTreeMap<Symbol, u32>) -> Result<Self, Self::Error> {
        let counts = SymbolCounts::from(map);
        for (left, right) in OPPOSED_PAIRS {
            if counts.get(left) > 0 && counts.get(right) > 0 {
                return Err(DiceError::UncancelledSymbols(left, right));
            }
        }
        Ok(Self(counts))
    }
}

impl std::fmt::Display for NormalizedPoolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Blank");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(symbol, count)| format!("{count} {}", symbol.label(count)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Tally symbols, promoting each Triumph to an extra Success and each
/// Despair to an extra Failure.
pub fn aggregate(symbols: impl IntoIterator<Item = Symbol>) -> SymbolCounts {
    let mut counts = SymbolCounts::default();
    for symbol in symbols {
        counts.increment(symbol);
        match symbol {
            Symbol::Triumph => counts.increment(Symbol::Success),
            Symbol::Despair => counts.increment(Symbol::Failure),
            _ => {}
        }
    }
    counts
}

/// Cancel opposed symbols in an aggregate.
pub fn normalize(aggregate: &SymbolCounts) -> NormalizedPoolResult {
    let mut net = SymbolCounts::default();

    for (left, right) in OPPOSED_PAIRS {
        let (l, r) = (aggregate.get(left), aggregate.get(right));
        if l > r {
            net.set(left, l - r);
        } else if r > l {
            net.set(right, r - l);
        }
    }

    for symbol in [
        Symbol::Triumph,
        Symbol::Despair,
        Symbol::LightSide,
        Symbol::DarkSide,
    ] {
        net.set(symbol, aggregate.get(symbol));
    }

    NormalizedPoolResult(net)
}
