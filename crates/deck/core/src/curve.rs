//! Soul cost curves.
//!
//! A curve lists the incremental soul cost of each character level. Level 0 is
//! the base stat line and is normally free; reaching level `n` costs the sum of
//! the first `n + 1` increments. Levels past the end of the list cannot be bought.

use crate::error::{DeckError, ErrorSeverity};

/// Rejected curve parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    #[error("cost curve needs at least one level increment")]
    EmptyIncrements,

    #[error("units per level must be positive")]
    ZeroUnitsPerLevel,
}

impl DeckError for CurveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CurveError::EmptyIncrements => "CURVE_EMPTY_INCREMENTS",
            CurveError::ZeroUnitsPerLevel => "CURVE_ZERO_UNITS_PER_LEVEL",
        }
    }
}

/// Cumulative level cost function plus the per-player soul multiplier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CurveSpec", into = "CurveSpec")
)]
pub struct CostCurve {
    increments: Vec<u32>,
    units_per_level: u32,
}

impl CostCurve {
    /// Souls granted per player per room in both standard modes.
    pub const DEFAULT_UNITS_PER_LEVEL: u32 = 2;

    pub fn new(increments: Vec<u32>, units_per_level: u32) -> Result<Self, CurveError> {
        if increments.is_empty() {
            return Err(CurveError::EmptyIncrements);
        }
        if units_per_level == 0 {
            return Err(CurveError::ZeroUnitsPerLevel);
        }
        Ok(Self {
            increments,
            units_per_level,
        })
    }

    /// Standard rules: `[0, 2, 4, 8]`.
    pub fn normal() -> Self {
        Self {
            increments: vec![0, 2, 4, 8],
            units_per_level: Self::DEFAULT_UNITS_PER_LEVEL,
        }
    }

    /// Campaign rules: `[0, 4, 8, 16, 20]`.
    pub fn campaign() -> Self {
        Self {
            increments: vec![0, 4, 8, 16, 20],
            units_per_level: Self::DEFAULT_UNITS_PER_LEVEL,
        }
    }

    pub fn increments(&self) -> &[u32] {
        &self.increments
    }

    pub fn units_per_level(&self) -> u32 {
        self.units_per_level
    }

    /// Highest level this curve can price.
    pub fn max_level(&self) -> usize {
        self.increments.len() - 1
    }

    /// Total souls needed to reach `level`, or `None` when the curve does not
    /// extend that far or the total does not fit in a `u32`.
    pub fn cumulative_cost(&self, level: usize) -> Option<u32> {
        self.increments
            .get(..=level)?
            .iter()
            .try_fold(0u32, |total, cost| total.checked_add(*cost))
    }

    /// Souls collected in one room by `players` players, saturating at `u32::MAX`.
    pub fn souls_per_room(&self, players: u32) -> u32 {
        players.saturating_mul(self.units_per_level)
    }

    /// Souls awarded by a boss worth `spark` sparks, saturating at `u32::MAX`.
    pub fn souls_per_boss(&self, spark: u32) -> u32 {
        spark.saturating_mul(self.units_per_level)
    }
}

impl Default for CostCurve {
    fn default() -> Self {
        Self::normal()
    }
}

/// Serialized shape of a [`CostCurve`]; validated on the way in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSpec {
    pub increments: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default = "default_units_per_level"))]
    pub units_per_level: u32,
}

#[cfg(feature = "serde")]
fn default_units_per_level() -> u32 {
    CostCurve::DEFAULT_UNITS_PER_LEVEL
}

impl TryFrom<CurveSpec> for CostCurve {
    type Error = CurveError;

    fn try_from(spec: CurveSpec) -> Result<Self, Self::Error> {
        CostCurve::new(spec.increments, spec.units_per_level)
    }
}

impl From<CostCurve> for CurveSpec {
    fn from(curve: CostCurve) -> Self {
        Self {
            increments: curve.increments,
            units_per_level: curve.units_per_level,
        }
    }
}

/// Named rule sets with a built-in curve.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    Normal,
    Campaign,
}

impl GameMode {
    pub fn curve(self) -> CostCurve {
        match self {
            GameMode::Normal => CostCurve::normal(),
            GameMode::Campaign => CostCurve::campaign(),
        }
    }
}
