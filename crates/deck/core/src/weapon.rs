//! Equipment cards: weapons, shields, armour, rings, spells and upgrades.

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

use crate::character::Character;
use crate::stats::StatVector;

/// Card category.
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
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Weapon,
    Shield,
    Armour,
    Ring,
    Spell,
    Upgrade,
}

/// Category plus upgrade level, as written in the `type` field of a card.
///
/// The textual form is the lowercase category followed by one `+` per upgrade
/// level, e.g. `"shield"` or `"weapon+"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemType {
    pub category: Category,
    pub upgrade_level: u8,
}

impl ItemType {
    /// Highest upgrade level the token parser distinguishes.
    ///
    /// Any number of trailing `+` marks parses as level 1.
    pub const MAX_PARSED_UPGRADE: u8 = 1;

    pub const fn new(category: Category, upgrade_level: u8) -> Self {
        Self {
            category,
            upgrade_level,
        }
    }

    pub const fn base(category: Category) -> Self {
        Self::new(category, 0)
    }
}

/// Type token that is empty or names no known category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed item type '{token}'")]
pub struct ItemTypeError {
    pub token: String,
}

impl FromStr for ItemType {
    type Err = ItemTypeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let base = token.trim_end_matches('+');
        // TODO: count the '+' marks once multi-level upgrade cards are defined
        let upgrade_level = if base.len() < token.len() {
            Self::MAX_PARSED_UPGRADE
        } else {
            0
        };
        let category = base.parse::<Category>().map_err(|_| ItemTypeError {
            token: token.to_string(),
        })?;
        Ok(Self::new(category, upgrade_level))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for _ in 0..self.upgrade_level {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// An equippable card and the stats needed to use it.
///
/// `owner` restricts the card to a single character; `None` means anyone may
/// use it. The owner is shared with the catalog that resolved it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Weapon {
    name: String,
    item_type: ItemType,
    owner: Option<Arc<Character>>,
    requirements: StatVector,
}

impl Weapon {
    pub fn new(name: impl Into<String>, item_type: ItemType, requirements: StatVector) -> Self {
        Self {
            name: name.into(),
            item_type,
            owner: None,
            requirements,
        }
    }

    /// Restricts this card to `owner`.
    #[must_use]
    pub fn with_owner(mut self, owner: Arc<Character>) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn category(&self) -> Category {
        self.item_type.category
    }

    pub fn upgrade_level(&self) -> u8 {
        self.item_type.upgrade_level
    }

    pub fn owner(&self) -> Option<&Arc<Character>> {
        self.owner.as_ref()
    }

    pub fn requirements(&self) -> &StatVector {
        &self.requirements
    }

    /// Whether the ownership restriction lets `character` use this card.
    ///
    /// Characters are compared by name, which is unique within a catalog.
    pub fn is_usable_by(&self, character: &Character) -> bool {
        self.owner
            .as_deref()
            .is_none_or(|owner| owner.name() == character.name())
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.item_type)?;
        if let Some(owner) = &self.owner {
            write!(f, " - {}", owner.name())?;
        }
        write!(f, ": {}", self.requirements)
    }
}
