//! Affordability engine.
//!
//! Prices a card for a character: for each stat the character has to level up
//! until its table meets the requirement, and each stat is paid for separately
//! on the cost curve. A character that needs strength at level 1 and dexterity
//! at level 3 pays `cost(1) + cost(3)`, not `cost(3)`.

use crate::character::Character;
use crate::curve::CostCurve;
use crate::stats::StatKind;
use crate::weapon::Weapon;

/// Why a character can never use a card.
///
/// This is a normal outcome of pricing, not a failure of the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Ineligibility {
    #[error("restricted to {owner}")]
    Restricted { owner: String },

    #[error("{stat} never reaches {required}")]
    StatUnreachable { stat: StatKind, required: u32 },

    #[error("{stat} needs level {level}, beyond the cost curve")]
    BeyondCurve { stat: StatKind, level: usize },

    #[error("total soul cost exceeds {}", u32::MAX)]
    Unaffordable,
}

/// Per-stat levels and soul costs for an equippable card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoulCost {
    levels: [usize; StatKind::COUNT],
    costs: [u32; StatKind::COUNT],
    total: u32,
}

impl SoulCost {
    /// Level the character must reach in `stat`.
    pub fn level(&self, stat: StatKind) -> usize {
        self.levels[stat.index()]
    }

    /// Souls spent on `stat`.
    pub fn cost(&self, stat: StatKind) -> u32 {
        self.costs[stat.index()]
    }

    /// Sum of the per-stat costs; always fits, [`assess`] rejects larger totals.
    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Prices `weapon` for `character` under `curve`, with a per-stat breakdown.
pub fn assess(
    character: &Character,
    weapon: &Weapon,
    curve: &CostCurve,
) -> Result<SoulCost, Ineligibility> {
    if let Some(owner) = weapon.owner() {
        if !weapon.is_usable_by(character) {
            return Err(Ineligibility::Restricted {
                owner: owner.name().to_string(),
            });
        }
    }

    let mut breakdown = SoulCost::default();
    for (stat, required) in weapon.requirements().iter() {
        let level = character
            .level_for(stat, required)
            .ok_or(Ineligibility::StatUnreachable { stat, required })?;
        let cost = curve
            .cumulative_cost(level)
            .ok_or(Ineligibility::BeyondCurve { stat, level })?;

        breakdown.levels[stat.index()] = level;
        breakdown.costs[stat.index()] = cost;
        breakdown.total = breakdown
            .total
            .checked_add(cost)
            .ok_or(Ineligibility::Unaffordable)?;
    }

    Ok(breakdown)
}

/// Total souls `character` must spend to use `weapon`, or `None` when it never can.
pub fn need_souls(character: &Character, weapon: &Weapon, curve: &CostCurve) -> Option<u32> {
    assess(character, weapon, curve).ok().map(|cost| cost.total())
}
