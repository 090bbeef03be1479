//! Auxiliary numeric dice (d10 and d100).

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform pick in `[0, max)`, or `[1, max]` when `starts_at_one` is set.
///
/// A `max` of zero has no valid values and yields 0.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, max: u32, starts_at_one: bool) -> u32 {
    if max == 0 {
        return 0;
    }
    let value = rng.random_range(0..max);
    if starts_at_one { value + 1 } else { value }
}

/// A numeric die rolled alongside the narrative pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericDie {
    /// Ten-sided die (1-10).
    D10,
    /// Percentile die (1-100).
    D100,
}

impl NumericDie {
    /// The highest value this die can show.
    pub fn max(self) -> u32 {
        match self {
            Self::D10 => 10,
            Self::D100 => 100,
        }
    }

    /// Roll the die.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> NumericDieResult {
        let value = random_number(rng, self.max(), true);
        tracing::debug!(die = %self, value, "rolled numeric die");
        NumericDieResult { die: self, value }
    }

    /// Parse a die from a string like "d10" or "D100".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "d10" | "10" => Some(Self::D10),
            "d100" | "100" | "d%" => Some(Self::D100),
            _ => None,
        }
    }
}

impl std::fmt::Display for NumericDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D10 => write!(f, "d10"),
            Self::D100 => write!(f, "d100"),
        }
    }
}

/// The result of rolling a numeric die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericDieResult {
    /// The die that was rolled.
    pub die: NumericDie,
    /// The value rolled (1 to `die.max()`).
    pub value: u32,
}

impl std::fmt::Display for NumericDieResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.die, self.value)
    }
}
