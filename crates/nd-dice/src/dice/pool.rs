//! Dice pool construction, mutation, and rolling.
//!
//! A pool is a value: every operation returns a new pool and leaves the
//! original untouched. Dice are matched by kind.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::roll::PoolResult;
use super::{Die, DieKind};

/// A pair of die kinds where one is the upgraded form of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieFamily {
    /// Ability upgrades to Proficiency.
    Ability,
    /// Difficulty upgrades to Challenge.
    Difficulty,
}

impl DieFamily {
    /// The base-tier kind of this family.
    pub fn base(self) -> DieKind {
        match self {
            Self::Ability => DieKind::Ability,
            Self::Difficulty => DieKind::Difficulty,
        }
    }

    /// The upgraded kind of this family.
    pub fn upgraded(self) -> DieKind {
        match self {
            Self::Ability => DieKind::Proficiency,
            Self::Difficulty => DieKind::Challenge,
        }
    }

    /// Parse a family from a name like "ability" or "difficulty".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ability" | "a" => Some(Self::Ability),
            "difficulty" | "d" => Some(Self::Difficulty),
            _ => None,
        }
    }
}

impl std::fmt::Display for DieFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base())
    }
}

/// An ordered collection of dice to be rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    dice: Vec<Die>,
}

impl Pool {
    /// The empty pool.
    pub fn empty() -> Self {
        Self { dice: Vec::new() }
    }

    /// A pool of `dice`, sorted into canonical order.
    pub fn new(dice: Vec<Die>) -> Self {
        Self::with_order(dice).sort()
    }

    /// A pool of `dice` in exactly the given order.
    pub fn with_order(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// A sorted pool holding one die for each kind in `kinds`.
    pub fn from_kinds(kinds: impl IntoIterator<Item = DieKind>) -> Self {
        Self::new(kinds.into_iter().map(Die::by_kind).collect())
    }

    /// The dice in pool order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// The kinds of the dice, in pool order.
    pub fn kinds(&self) -> impl Iterator<Item = DieKind> + '_ {
        self.dice.iter().map(Die::kind)
    }

    /// Returns how many dice are in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Number of dice of the given kind.
    pub fn count(&self, kind: DieKind) -> usize {
        self.kinds().filter(|k| *k == kind).count()
    }

    /// Returns true if the pool holds at least one die of `kind`.
    pub fn contains(&self, kind: DieKind) -> bool {
        self.kinds().any(|k| k == kind)
    }

    /// Add a die and re-sort into canonical order.
    pub fn add_die(&self, die: Die) -> Self {
        let mut dice = self.dice.clone();
        dice.push(die);
        tracing::debug!(kind = %die.kind(), "added die to pool");
        Self::new(dice)
    }

    /// Remove the first die of `kind`. Returns an identical pool if there is none.
    pub fn remove_die(&self, kind: DieKind) -> Self {
        let mut dice = self.dice.clone();
        if let Some(pos) = dice.iter().position(|d| d.kind() == kind) {
            dice.remove(pos);
            tracing::debug!(%kind, "removed die from pool");
        }
        Self { dice }
    }

    /// Sort into canonical order.
    pub fn sort(&self) -> Self {
        let mut dice = self.dice.clone();
        dice.sort_by_key(|d| d.kind().canonical_rank());
        Self { dice }
    }

    /// Sort by each kind's position in `order`.
    ///
    /// The sort is stable. Kinds missing from `order` go last.
    pub fn sort_by_order(&self, order: &[DieKind]) -> Self {
        let mut dice = self.dice.clone();
        dice.sort_by_key(|d| {
            order
                .iter()
                .position(|k| *k == d.kind())
                .unwrap_or(order.len())
        });
        Self { dice }
    }

    /// Remove every die of `kind`.
    pub fn clear(&self, kind: DieKind) -> Self {
        Self {
            dice: self
                .dice
                .iter()
                .copied()
                .filter(|d| d.kind() != kind)
                .collect(),
        }
    }

    /// Step a family up one tier.
    ///
    /// Promotes one base die if there is one, otherwise adds a base die.
    pub fn upgrade(&self, family: DieFamily) -> Self {
        let pool = if self.contains(family.base()) {
            self.remove_die(family.base())
                .add_die(Die::by_kind(family.upgraded()))
        } else {
            self.add_die(Die::by_kind(family.base()))
        };
        tracing::debug!(%family, pool = %pool, "upgraded pool");
        pool
    }

    /// Step a family down one tier.
    ///
    /// Removes one base die if there is one, otherwise demotes one upgraded
    /// die. A pool with neither is returned unchanged.
    pub fn downgrade(&self, family: DieFamily) -> Self {
        let pool = if self.contains(family.base()) {
            self.remove_die(family.base())
        } else if self.contains(family.upgraded()) {
            self.remove_die(family.upgraded())
                .add_die(Die::by_kind(family.base()))
        } else {
            self.clone()
        };
        tracing::debug!(%family, pool = %pool, "downgraded pool");
        pool
    }

    /// Roll every die independently, keeping pool order.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> PoolResult {
        let result = PoolResult::new(self.dice.iter().map(|d| d.roll(rng)).collect());
        tracing::debug!(pool = %self, dice = result.count(), "rolled pool");
        result
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for kind in self.kinds() {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
