//! Narrative dice engine.
//!
//! Models the seven narrative dice (ability, proficiency, difficulty,
//! challenge, boost, setback, force) and their face tables, pools of dice
//! with upgrade and downgrade rules, and the symbol cancellation that turns
//! a roll into a net outcome such as "2 Successes, 1 Triumph". Also covers
//! d10/d100 rolls, a compact pool encoding for shareable links, and an
//! immutable session model driven by commands.

pub mod config;
pub mod dice;
pub mod encoding;
pub mod error;
pub mod model;
pub mod resolution;
pub mod symbol;

pub use config::RollerConfig;
pub use dice::{
    Die, DieFamily, DieKind, DieResult, Face, NumericDie, NumericDieResult, Pool, PoolResult,
    random_number,
};
pub use encoding::{decode_kind, decode_pool, encode_pool};
pub use error::{DiceError, DiceResult};
pub use model::{Command, Model};
pub use resolution::{NormalizedPoolResult, SymbolCounts};
pub use symbol::Symbol;
