//! Stat vectors.
//!
//! Every character level and every weapon requirement is expressed as the same
//! four attributes, always in the order strength, dexterity, intelligence, faith.
//! Requirements are matched against character stats positionally.

use core::fmt;
use core::ops::Index;

use crate::error::{DeckError, ErrorSeverity};

/// One of the four attributes tracked on cards.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Strength,
    Dexterity,
    Intelligence,
    Faith,
}

impl StatKind {
    pub const COUNT: usize = 4;

    /// All stats in positional order.
    pub const ALL: [StatKind; Self::COUNT] = [
        StatKind::Strength,
        StatKind::Dexterity,
        StatKind::Intelligence,
        StatKind::Faith,
    ];

    /// Position of this stat inside a [`StatVector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column title used on cards and in reports.
    pub const fn title(self) -> &'static str {
        match self {
            StatKind::Strength => "Str.",
            StatKind::Dexterity => "Dex.",
            StatKind::Intelligence => "Int.",
            StatKind::Faith => "Fai.",
        }
    }

    /// Looks up a stat by position.
    pub fn from_index(index: usize) -> Result<Self, StatIndexError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(StatIndexError { index })
    }
}

/// Positional stat access outside `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no stat at index {index} (expected 0..4)")]
pub struct StatIndexError {
    pub index: usize,
}

impl DeckError for StatIndexError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "STAT_INDEX_OUT_OF_RANGE"
    }
}

/// Immutable (strength, dexterity, intelligence, faith) tuple.
///
/// Serialized as a plain 4-element array, which is how both character level
/// tables and weapon requirements appear in catalog documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[u32; 4]", into = "[u32; 4]")
)]
pub struct StatVector {
    values: [u32; StatKind::COUNT],
}

impl StatVector {
    pub const ZERO: StatVector = StatVector::new(0, 0, 0, 0);

    pub const fn new(strength: u32, dexterity: u32, intelligence: u32, faith: u32) -> Self {
        Self {
            values: [strength, dexterity, intelligence, faith],
        }
    }

    #[inline]
    pub const fn strength(&self) -> u32 {
        self.values[0]
    }

    #[inline]
    pub const fn dexterity(&self) -> u32 {
        self.values[1]
    }

    #[inline]
    pub const fn intelligence(&self) -> u32 {
        self.values[2]
    }

    #[inline]
    pub const fn faith(&self) -> u32 {
        self.values[3]
    }

    /// Positional access; `index` must be in `0..4`.
    pub fn get(&self, index: usize) -> Result<u32, StatIndexError> {
        self.values
            .get(index)
            .copied()
            .ok_or(StatIndexError { index })
    }

    /// Iterates `(stat, value)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        StatKind::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// True when every requirement is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }
}

impl Index<StatKind> for StatVector {
    type Output = u32;

    fn index(&self, stat: StatKind) -> &u32 {
        &self.values[stat.index()]
    }
}

impl From<[u32; StatKind::COUNT]> for StatVector {
    fn from(values: [u32; StatKind::COUNT]) -> Self {
        Self { values }
    }
}

impl From<StatVector> for [u32; StatKind::COUNT] {
    fn from(stats: StatVector) -> Self {
        stats.values
    }
}

impl fmt::Display for StatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(str={}, dex={}, int={}, fai={})",
            self.strength(),
            self.dexterity(),
            self.intelligence(),
            self.faith()
        )
    }
}
