//! Die kinds, faces, and rolling.
//!
//! The seven narrative dice are fixed: a die is fully described by its
//! [`DieKind`], and two dice of the same kind are interchangeable. Faces
//! come from a single static table shared by [`Die::by_kind`] and
//! [`Die::roll`].

mod faces;
pub mod numeric;
pub mod pool;
pub mod roll;

pub use numeric::{NumericDie, NumericDieResult, random_number};
pub use pool::{DieFamily, Pool};
pub use roll::{DieResult, PoolResult};

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DiceError, DiceResult};
use crate::symbol::Symbol;

/// The content printed on one side of a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// No symbols.
    Blank,
    /// A single symbol.
    One(Symbol),
    /// Two symbols, possibly the same one twice.
    Two(Symbol, Symbol),
}

impl Face {
    /// The symbols on this face (zero, one, or two).
    pub fn symbols(self) -> Vec<Symbol> {
        match self {
            Self::Blank => Vec::new(),
            Self::One(s) => vec![s],
            Self::Two(a, b) => vec![a, b],
        }
    }
}

/// One of the seven narrative die kinds.
///
/// Kinds order by [`DieKind::canonical_rank`], so sorted kinds and
/// `BTreeMap` keys follow [`DieKind::CANONICAL_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    /// Green d8, the base positive die.
    Ability,
    /// Yellow d12, an upgraded ability die.
    Proficiency,
    /// Purple d8, the base negative die.
    Difficulty,
    /// Red d12, an upgraded difficulty die.
    Challenge,
    /// Blue d6 for situational bonuses.
    Boost,
    /// Black d6 for situational penalties.
    Setback,
    /// White d12 for force powers and destiny.
    Force,
}

impl DieKind {
    /// Every kind, in declaration order.
    pub const ALL: [DieKind; 7] = [
        Self::Ability,
        Self::Proficiency,
        Self::Difficulty,
        Self::Challenge,
        Self::Boost,
        Self::Setback,
        Self::Force,
    ];

    /// The display order used when sorting a pool.
    pub const CANONICAL_ORDER: [DieKind; 7] = [
        Self::Proficiency,
        Self::Ability,
        Self::Boost,
        Self::Challenge,
        Self::Difficulty,
        Self::Setback,
        Self::Force,
    ];

    fn index(self) -> usize {
        match self {
            Self::Ability => 0,
            Self::Proficiency => 1,
            Self::Difficulty => 2,
            Self::Challenge => 3,
            Self::Boost => 4,
            Self::Setback => 5,
            Self::Force => 6,
        }
    }

    /// Position of this kind in [`DieKind::CANONICAL_ORDER`].
    pub fn canonical_rank(self) -> usize {
        match self {
            Self::Proficiency => 0,
            Self::Ability => 1,
            Self::Boost => 2,
            Self::Challenge => 3,
            Self::Difficulty => 4,
            Self::Setback => 5,
            Self::Force => 6,
        }
    }

    /// The faces of a die of this kind.
    pub fn faces(self) -> &'static [Face] {
        faces::FACE_TABLE[self.index()]
    }

    /// Single-character code used by the pool encoding.
    pub fn to_char(self) -> char {
        match self {
            Self::Ability => 'A',
            Self::Proficiency => 'P',
            Self::Difficulty => 'D',
            Self::Challenge => 'C',
            Self::Boost => 'B',
            Self::Setback => 'S',
            Self::Force => 'F',
        }
    }

    /// Decode a single pool-encoding character.
    pub fn from_char(c: char) -> DiceResult<Self> {
        match c {
            'A' => Ok(Self::Ability),
            'P' => Ok(Self::Proficiency),
            'D' => Ok(Self::Difficulty),
            'C' => Ok(Self::Challenge),
            'B' => Ok(Self::Boost),
            'S' => Ok(Self::Setback),
            'F' => Ok(Self::Force),
            other => Err(DiceError::InvalidKindChar(other)),
        }
    }

    /// Parse a kind from its name (case-insensitive) or its encoding letter.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "ability" | "a" => Some(Self::Ability),
            "proficiency" | "p" => Some(Self::Proficiency),
            "difficulty" | "d" => Some(Self::Difficulty),
            "challenge" | "c" => Some(Self::Challenge),
            "boost" | "b" => Some(Self::Boost),
            "setback" | "s" => Some(Self::Setback),
            "force" | "f" => Some(Self::Force),
            _ => None,
        }
    }
}

impl Ord for DieKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical_rank().cmp(&other.canonical_rank())
    }
}

impl PartialOrd for DieKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::str::FromStr for DieKind {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        Self::parse(s).ok_or_else(|| DiceError::UnknownKind(s.to_string()))
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ability => write!(f, "ability"),
            Self::Proficiency => write!(f, "proficiency"),
            Self::Difficulty => write!(f, "difficulty"),
            Self::Challenge => write!(f, "challenge"),
            Self::Boost => write!(f, "boost"),
            Self::Setback => write!(f, "setback"),
            Self::Force => write!(f, "force"),
        }
    }
}

/// A narrative die: its kind and the faces it can land on.
///
/// Dice compare equal by kind. Serialized as the bare kind.
#[derive(Debug, Clone, Copy)]
pub struct Die {
    kind: DieKind,
    sides: &'static [Face],
}

impl Die {
    /// The canonical die for a kind.
    pub fn by_kind(kind: DieKind) -> Self {
        Self {
            kind,
            sides: kind.faces(),
        }
    }

    /// The kind of this die.
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// The faces of this die, in table order.
    pub fn sides(&self) -> &'static [Face] {
        self.sides
    }

    /// The result of this die landing on face `index`.
    ///
    /// Returns `None` if the die has no such face.
    pub fn face_result(&self, index: usize) -> Option<DieResult> {
        let face = self.sides.get(index)?;
        Some(DieResult::new(self.kind, face.symbols()))
    }

    /// Roll the die, picking one face uniformly at random.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> DieResult {
        let index = rng.random_range(0..self.sides.len());
        let face = self.sides[index];
        tracing::trace!(kind = %self.kind, index, ?face, "rolled die");
        DieResult::new(self.kind, face.symbols())
    }

    /// The distinct symbols this die can show, in [`Symbol::ALL`] order.
    pub fn vocabulary(&self) -> Vec<Symbol> {
        Symbol::ALL
            .into_iter()
            .filter(|s| self.sides.iter().any(|f| f.symbols().contains(s)))
            .collect()
    }
}

impl PartialEq for Die {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Die {}

impl std::hash::Hash for Die {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl From<DieKind> for Die {
    fn from(kind: DieKind) -> Self {
        Self::by_kind(kind)
    }
}

impl From<Die> for DieKind {
    fn from(die: Die) -> Self {
        die.kind
    }
}

impl Serialize for Die {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Die {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DieKind::deserialize(deserializer).map(Self::by_kind)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn symbol_lists(kind: DieKind) -> Vec<Vec<Symbol>> {
        let die = Die::by_kind(kind);
        (0..die.sides().len())
            .map(|i| die.face_result(i).unwrap().symbols)
            .collect()
    }

    #[test]
    fn face_counts() {
        assert_eq!(DieKind::Ability.faces().len(), 8);
        assert_eq!(DieKind::Proficiency.faces().len(), 12);
        assert_eq!(DieKind::Difficulty.faces().len(), 8);
        assert_eq!(DieKind::Challenge.faces().len(), 12);
        assert_eq!(DieKind::Boost.faces().len(), 6);
        assert_eq!(DieKind::Setback.faces().len(), 6);
        assert_eq!(DieKind::Force.faces().len(), 12);
    }

    #[test]
    fn ability_faces() {
        assert_eq!(
            symbol_lists(DieKind::Ability),
            vec![
                vec![],
                vec![Success],
                vec![Success, Success],
                vec![Advantage],
                vec![Advantage, Advantage],
                vec![Success],
                vec![Advantage, Success],
                vec![Advantage],
            ]
        );
    }

    #[test]
    fn proficiency_faces() {
        assert_eq!(
            symbol_lists(DieKind::Proficiency),
            vec![
                vec![],
                vec![Success],
                vec![Success],
                vec![Triumph],
                vec![Success, Success],
                vec![Success, Success],
                vec![Advantage, Advantage],
                vec![Advantage, Advantage],
                vec![Advantage],
                vec![Success, Advantage],
                vec![Success, Advantage],
                vec![Success, Advantage],
            ]
        );
    }

    #[test]
    fn difficulty_faces() {
        assert_eq!(
            symbol_lists(DieKind::Difficulty),
            vec![
                vec![],
                vec![Failure, Failure],
                vec![Threat],
                vec![Failure, Threat],
                vec![Threat, Threat],
                vec![Threat],
                vec![Failure],
                vec![Threat],
            ]
        );
    }

    #[test]
    fn challenge_faces() {
        assert_eq!(
            symbol_lists(DieKind::Challenge),
            vec![
                vec![],
                vec![Failure],
                vec![Failure],
                vec![Threat],
                vec![Threat],
                vec![Despair],
                vec![Threat, Threat],
                vec![Threat, Threat],
                vec![Failure, Failure],
                vec![Failure, Failure],
                vec![Failure, Threat],
                vec![Failure, Threat],
            ]
        );
    }

    #[test]
    fn boost_faces() {
        assert_eq!(
            symbol_lists(DieKind::Boost),
            vec![
                vec![],
                vec![],
                vec![Success],
                vec![Advantage],
                vec![Success, Advantage],
                vec![Advantage, Advantage],
            ]
        );
    }

    #[test]
    fn setback_faces() {
        assert_eq!(
            symbol_lists(DieKind::Setback),
            vec![
                vec![],
                vec![],
                vec![Failure],
                vec![Failure],
                vec![Threat],
                vec![Threat],
            ]
        );
    }

    #[test]
    fn force_faces() {
        assert_eq!(
            symbol_lists(DieKind::Force),
            vec![
                vec![LightSide],
                vec![LightSide],
                vec![DarkSide],
                vec![DarkSide],
                vec![DarkSide],
                vec![DarkSide],
                vec![DarkSide],
                vec![DarkSide],
                vec![LightSide, LightSide],
                vec![LightSide, LightSide],
                vec![LightSide, LightSide],
                vec![DarkSide, DarkSide],
            ]
        );
    }

    #[test]
    fn face_result_out_of_range() {
        assert!(Die::by_kind(DieKind::Boost).face_result(6).is_none());
    }

    #[test]
    fn roll_stays_within_vocabulary() {
        let mut rng = StdRng::seed_from_u64(7);
        for kind in DieKind::ALL {
            let die = Die::by_kind(kind);
            let vocabulary = die.vocabulary();
            for _ in 0..200 {
                let result = die.roll(&mut rng);
                assert_eq!(result.kind, kind);
                assert!(result.symbols.len() <= 2);
                assert!(result.symbols.iter().all(|s| vocabulary.contains(s)));
            }
        }
    }

    #[test]
    fn boost_blank_frequency() {
        let mut rng = StdRng::seed_from_u64(3);
        let die = Die::by_kind(DieKind::Boost);
        let blanks = (0..600)
            .filter(|_| die.roll(&mut rng).symbols.is_empty())
            .count();
        // 2 of 6 faces are blank.
        assert!((120..=280).contains(&blanks), "blanks = {blanks}");
    }

    #[test]
    fn vocabulary() {
        assert_eq!(
            Die::by_kind(DieKind::Challenge).vocabulary(),
            vec![Failure, Threat, Despair]
        );
        assert_eq!(
            Die::by_kind(DieKind::Force).vocabulary(),
            vec![LightSide, DarkSide]
        );
    }

    #[test]
    fn char_codes_round_trip() {
        for kind in DieKind::ALL {
            assert_eq!(DieKind::from_char(kind.to_char()).unwrap(), kind);
        }
        assert!(matches!(
            DieKind::from_char('x'),
            Err(DiceError::InvalidKindChar('x'))
        ));
    }

    #[test]
    fn parse_kind() {
        assert_eq!(DieKind::parse("Ability"), Some(DieKind::Ability));
        assert_eq!(DieKind::parse(" challenge "), Some(DieKind::Challenge));
        assert_eq!(DieKind::parse("f"), Some(DieKind::Force));
        assert_eq!(DieKind::parse("d20"), None);
        assert_eq!("Boost".parse::<DieKind>().unwrap(), DieKind::Boost);
        assert!(matches!(
            "d20".parse::<DieKind>(),
            Err(DiceError::UnknownKind(s)) if s == "d20"
        ));
    }

    #[test]
    fn canonical_rank_matches_order() {
        for (i, kind) in DieKind::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(kind.canonical_rank(), i);
        }
    }

    #[test]
    fn kinds_order_by_canonical_rank() {
        assert!(DieKind::Proficiency < DieKind::Ability);
        assert!(DieKind::Boost < DieKind::Challenge);

        let mut kinds = DieKind::ALL.to_vec();
        kinds.sort();
        assert_eq!(kinds, DieKind::CANONICAL_ORDER);

        let keys: Vec<DieKind> = DieKind::ALL
            .into_iter()
            .map(|k| (k, k.to_char()))
            .collect::<std::collections::BTreeMap<_, _>>()
            .into_keys()
            .collect();
        assert_eq!(keys, DieKind::CANONICAL_ORDER);
    }

    #[test]
    fn dice_equal_by_kind() {
        assert_eq!(Die::by_kind(DieKind::Force), Die::from(DieKind::Force));
        assert_ne!(Die::by_kind(DieKind::Force), Die::by_kind(DieKind::Boost));
    }

    #[test]
    fn die_serializes_as_kind() {
        let die = Die::by_kind(DieKind::Setback);
        let json = serde_json::to_string(&die).unwrap();
        assert_eq!(json, "\"setback\"");
        let back: Die = serde_json::from_str(&json).unwrap();
        assert_eq!(back, die);
        assert_eq!(back.sides().len(), 6);
    }
}
