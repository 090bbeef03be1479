//! Compact pool encoding used for shareable links.
//!
//! Each die kind is one character (`A`, `P`, `D`, `C`, `B`, `S`, `F`) and
//! a pool is the concatenation of its dice in pool order.

use crate::dice::{Die, DieKind, Pool};
use crate::error::DiceResult;

/// Encode a pool as a string of kind characters.
pub fn encode_pool(pool: &Pool) -> String {
    pool.kinds().map(DieKind::to_char).collect()
}

/// Decode a single kind character.
pub fn decode_kind(c: char) -> DiceResult<DieKind> {
    DieKind::from_char(c)
}

/// Decode a pool, skipping characters that are not kind codes.
///
/// A leading `#` (as found in a URL fragment) is ignored. The decoded order
/// is kept as-is.
pub fn decode_pool(encoded: &str) -> Pool {
    let encoded = encoded.strip_prefix('#').unwrap_or(encoded);
    let dice = encoded
        .chars()
        .filter_map(|c| match decode_kind(c) {
            Ok(kind) => Some(Die::by_kind(kind)),
            Err(e) => {
                tracing::warn!(error = %e, "skipping character in pool encoding");
                None
            }
        })
        .collect();
    Pool::with_order(dice)
}
