//! Session state and the command/update loop.
//!
//! A [`Model`] is an immutable snapshot of one rolling session: the pool
//! being assembled plus the most recent pool and numeric rolls. Each
//! [`Command`] produces a new model.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieFamily, DieKind, NumericDie, NumericDieResult, Pool, PoolResult};
use crate::encoding::{decode_pool, encode_pool};
use crate::error::{DiceError, DiceResult};

/// A user action against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "kebab-case")]
pub enum Command {
    /// Add a die of the given kind.
    AddDie(DieKind),
    /// Remove one die of the given kind.
    RemoveDie(DieKind),
    /// Remove every die of the given kind.
    ClearKind(DieKind),
    /// Step a family up one tier.
    Upgrade(DieFamily),
    /// Step a family down one tier.
    Downgrade(DieFamily),
    /// Roll the pool.
    RollPool,
    /// Drop every die and the last pool result.
    EmptyPool,
    /// Roll a numeric die.
    RollNumeric(NumericDie),
    /// Drop the last numeric result.
    RemoveNumericResult,
}

/// Immutable session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// The pool being assembled.
    pub pool: Pool,
    /// The most recent pool roll.
    pub pool_result: Option<PoolResult>,
    /// The most recent numeric roll.
    pub numeric_result: Option<NumericDieResult>,
}

impl Model {
    /// A model with an empty pool and no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// A model starting from a shared pool encoding (e.g. `#PPAD`).
    pub fn from_fragment(fragment: &str) -> Self {
        Self {
            pool: decode_pool(fragment),
            ..Self::default()
        }
    }

    /// Apply a command and return the next model.
    pub fn update<R: Rng + ?Sized>(self, command: Command, rng: &mut R) -> Self {
        tracing::debug!(?command, "applying command");
        match command {
            Command::AddDie(kind) => self.with_pool(|p| p.add_die(Die::by_kind(kind))),
            Command::RemoveDie(kind) => self.with_pool(|p| p.remove_die(kind)),
            Command::ClearKind(kind) => self.with_pool(|p| p.clear(kind)),
            Command::Upgrade(family) => self.with_pool(|p| p.upgrade(family)),
            Command::Downgrade(family) => self.with_pool(|p| p.downgrade(family)),
            Command::RollPool => Self {
                pool_result: Some(self.pool.roll(rng)),
                ..self
            },
            Command::EmptyPool => Self {
                pool: Pool::empty(),
                pool_result: None,
                ..self
            },
            Command::RollNumeric(die) => Self {
                numeric_result: Some(die.roll(rng)),
                ..self
            },
            Command::RemoveNumericResult => Self {
                numeric_result: None,
                ..self
            },
        }
    }

    fn with_pool(self, f: impl FnOnce(&Pool) -> Pool) -> Self {
        Self {
            pool: f(&self.pool),
            ..self
        }
    }

    /// Human-readable summary of the last pool roll, for copying or sharing.
    pub fn summary(&self) -> DiceResult<String> {
        let result = self.pool_result.as_ref().ok_or(DiceError::NoPoolResult)?;
        Ok(result.normalize().to_string())
    }

    /// The URL fragment that reproduces the current pool.
    pub fn share_fragment(&self) -> String {
        format!("#{}", encode_pool(&self.pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn starts_empty() {
        let model = Model::new();
        assert!(model.pool.is_empty());
        assert!(model.pool_result.is_none());
        assert!(model.numeric_result.is_none());
    }

    #[test]
    fn add_and_remove() {
        let mut rng = rng();
        let model = Model::new()
            .update(Command::AddDie(DieKind::Difficulty), &mut rng)
            .update(Command::AddDie(DieKind::Ability), &mut rng)
            .update(Command::AddDie(DieKind::Ability), &mut rng);
        assert_eq!(model.share_fragment(), "#AAD");

        let model = model.update(Command::RemoveDie(DieKind::Ability), &mut rng);
        assert_eq!(model.share_fragment(), "#AD");
    }

    #[test]
    fn pool_edits_keep_last_roll() {
        let mut rng = rng();
        let model = Model::from_fragment("#PD")
            .update(Command::RollPool, &mut rng)
            .update(Command::AddDie(DieKind::Boost), &mut rng);
        assert_eq!(model.pool_result.as_ref().map(PoolResult::count), Some(2));
        assert_eq!(model.pool.len(), 3);
    }

    #[test]
    fn empty_pool_drops_pool_result_only() {
        let mut rng = rng();
        let model = Model::from_fragment("PP")
            .update(Command::RollPool, &mut rng)
            .update(Command::RollNumeric(NumericDie::D10), &mut rng)
            .update(Command::EmptyPool, &mut rng);
        assert!(model.pool.is_empty());
        assert!(model.pool_result.is_none());
        assert!(model.numeric_result.is_some());
    }

    #[test]
    fn numeric_roll_and_removal() {
        let mut rng = rng();
        let model = Model::new().update(Command::RollNumeric(NumericDie::D100), &mut rng);
        let value = model.numeric_result.map(|r| r.value).unwrap();
        assert!((1..=100).contains(&value));

        let model = model.update(Command::RemoveNumericResult, &mut rng);
        assert!(model.numeric_result.is_none());
    }

    #[test]
    fn upgrade_downgrade_commands() {
        let mut rng = rng();
        let model = Model::new()
            .update(Command::Upgrade(DieFamily::Difficulty), &mut rng)
            .update(Command::Upgrade(DieFamily::Difficulty), &mut rng)
            .update(Command::Upgrade(DieFamily::Ability), &mut rng);
        assert_eq!(model.share_fragment(), "#AC");

        let model = model.update(Command::Downgrade(DieFamily::Difficulty), &mut rng);
        assert_eq!(model.share_fragment(), "#AD");

        let model = model.update(Command::ClearKind(DieKind::Ability), &mut rng);
        assert_eq!(model.share_fragment(), "#D");
    }

    #[test]
    fn summary_requires_a_roll() {
        let model = Model::from_fragment("A");
        assert!(matches!(model.summary(), Err(DiceError::NoPoolResult)));

        let model = model.update(Command::RollPool, &mut rng());
        assert!(model.summary().is_ok());
    }

    #[test]
    fn command_serialization() {
        let json = serde_json::to_string(&Command::AddDie(DieKind::Force)).unwrap();
        assert_eq!(json, r#"{"command":"add-die","arg":"force"}"#);
        let json = serde_json::to_string(&Command::RollPool).unwrap();
        assert_eq!(json, r#"{"command":"roll-pool"}"#);
    }
}
