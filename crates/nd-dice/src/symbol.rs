//! The closed vocabulary of narrative symbols printed on die faces.

use serde::{Deserialize, Serialize};

/// A narrative outcome symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Moves a check towards success.
    Success,
    /// A positive side effect, independent of success.
    Advantage,
    /// Cancels one success.
    Failure,
    /// A negative side effect, cancels one advantage.
    Threat,
    /// A critical success; also counts as a success.
    Triumph,
    /// A critical failure; also counts as a failure.
    Despair,
    /// A light side force point.
    LightSide,
    /// A dark side force point.
    DarkSide,
}

impl Symbol {
    /// Every symbol, in count-array order.
    pub const ALL: [Symbol; 8] = [
        Self::Success,
        Self::Advantage,
        Self::Failure,
        Self::Threat,
        Self::Triumph,
        Self::Despair,
        Self::LightSide,
        Self::DarkSide,
    ];

    /// Position of this symbol in fixed-size count arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Success => 0,
            Self::Advantage => 1,
            Self::Failure => 2,
            Self::Threat => 3,
            Self::Triumph => 4,
            Self::Despair => 5,
            Self::LightSide => 6,
            Self::DarkSide => 7,
        }
    }

    /// Label for a count of this symbol, e.g. "Success" or "Successes".
    pub fn label(self, count: u32) -> &'static str {
        let plural = count != 1;
        match self {
            Self::Success if plural => "Successes",
            Self::Success => "Success",
            Self::Advantage if plural => "Advantages",
            Self::Advantage => "Advantage",
            Self::Failure if plural => "Failures",
            Self::Failure => "Failure",
            Self::Threat if plural => "Threats",
            Self::Threat => "Threat",
            Self::Triumph if plural => "Triumphs",
            Self::Triumph => "Triumph",
            Self::Despair if plural => "Despairs",
            Self::Despair => "Despair",
            Self::LightSide if plural => "Light Sides",
            Self::LightSide => "Light Side",
            Self::DarkSide if plural => "Dark Sides",
            Self::DarkSide => "Dark Side",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(1))
    }
}
