//! Face tables for the seven narrative dice.
//!
//! Each table lists the physical faces of one die in order. The tables
//! define the outcome distribution, so every entry must match the printed
//! dice exactly.

use super::Face::{self, Blank, One, Two};
use crate::symbol::Symbol::{
    Advantage, DarkSide, Despair, Failure, LightSide, Success, Threat, Triumph,
};

const ABILITY: [Face; 8] = [
    Blank,
    One(Success),
    Two(Success, Success),
    One(Advantage),
    Two(Advantage, Advantage),
    One(Success),
    Two(Advantage, Success),
    One(Advantage),
];

const PROFICIENCY: [Face; 12] = [
    Blank,
    One(Success),
    One(Success),
    One(Triumph),
    Two(Success, Success),
    Two(Success, Success),
    Two(Advantage, Advantage),
    Two(Advantage, Advantage),
    One(Advantage),
    Two(Success, Advantage),
    Two(Success, Advantage),
    Two(Success, Advantage),
];

const DIFFICULTY: [Face; 8] = [
    Blank,
    Two(Failure, Failure),
    One(Threat),
    Two(Failure, Threat),
    Two(Threat, Threat),
    One(Threat),
    One(Failure),
    One(Threat),
];

const CHALLENGE: [Face; 12] = [
    Blank,
    One(Failure),
    One(Failure),
    One(Threat),
    One(Threat),
    One(Despair),
    Two(Threat, Threat),
    Two(Threat, Threat),
    Two(Failure, Failure),
    Two(Failure, Failure),
    Two(Failure, Threat),
    Two(Failure, Threat),
];

const BOOST: [Face; 6] = [
    Blank,
    Blank,
    One(Success),
    One(Advantage),
    Two(Success, Advantage),
    Two(Advantage, Advantage),
];

const SETBACK: [Face; 6] = [
    Blank,
    Blank,
    One(Failure),
    One(Failure),
    One(Threat),
    One(Threat),
];

const FORCE: [Face; 12] = [
    One(LightSide),
    One(LightSide),
    One(DarkSide),
    One(DarkSide),
    One(DarkSide),
    One(DarkSide),
    One(DarkSide),
    One(DarkSide),
    Two(LightSide, LightSide),
    Two(LightSide, LightSide),
    Two(LightSide, LightSide),
    Two(DarkSide, DarkSide),
];

/// Face tables indexed by `DieKind::index()`.
pub(super) static FACE_TABLE: [&[Face]; 7] = [
    &ABILITY,
    &PROFICIENCY,
    &DIFFICULTY,
    &CHALLENGE,
    &BOOST,
    &SETBACK,
    &FORCE,
];
