//! Data-driven deck content and loaders.
//!
//! This crate reads and writes the files the deck is maintained in:
//! - Catalog documents (JSON): characters with level tables, cards with requirements
//! - Weapon tables (CSV): spreadsheet exports merged onto an existing catalog
//! - Deck configuration (TOML): player count and cost curve
//!
//! All loaders produce `deck-core` types; pricing stays in `deck-core`.

pub mod loaders;

pub use loaders::{
    CatalogLoader, CatalogWriter, ConfigLoader, ContentFactory, DeckConfig, Expansion, LoadResult,
    TabularWeaponLoader,
};
