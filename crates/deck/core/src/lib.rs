//! Deck data model and soul cost calculation.
//!
//! `deck-core` holds the card types (characters, weapons, stat vectors), the
//! configurable [`CostCurve`] and the affordability engine that prices a card
//! for a character. Everything here is synchronous, immutable once built and
//! free of I/O; file formats live in `deck-content`.
//!
//! The two computation entry points are [`CostCurve::cumulative_cost`] and
//! [`need_souls`].
pub mod afford;
pub mod assembly;
pub mod catalog;
pub mod character;
pub mod curve;
pub mod error;
pub mod stats;
pub mod weapon;

pub use afford::{Ineligibility, SoulCost, assess, need_souls};
pub use assembly::{
    CatalogDocument, CharacterRecord, CharacterRegistry, LoadError, WeaponRecord, load_characters,
    load_weapons,
};
pub use catalog::{Catalog, MergeSummary, WeaponCosts};
pub use character::Character;
pub use curve::{CostCurve, CurveError, CurveSpec, GameMode};
pub use error::{DeckError, ErrorSeverity};
pub use stats::{StatIndexError, StatKind, StatVector};
pub use weapon::{Category, ItemType, ItemTypeError, Weapon};
