//! The deck catalog: every known character and card, keyed by name.
//!
//! Iteration is always in name order so that reports and written documents
//! are reproducible regardless of the order sources were merged in.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::afford::need_souls;
use crate::assembly::{
    CatalogDocument, CharacterRecord, CharacterRegistry, LoadError, WeaponRecord, load_characters,
    load_weapons,
};
use crate::character::Character;
use crate::curve::CostCurve;
use crate::weapon::Weapon;

/// What a [`Catalog::merge`] call changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub characters_added: usize,
    /// Characters ignored because the name was already present.
    pub characters_skipped: usize,
    pub weapons_added: usize,
    /// Cards that overwrote an existing card of the same name.
    pub weapons_replaced: usize,
}

/// Soul cost of one card for every character, in character name order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeaponCosts<'a> {
    pub weapon: &'a Weapon,
    pub costs: Vec<(&'a Character, Option<u32>)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    characters: BTreeMap<String, Arc<Character>>,
    weapons: BTreeMap<String, Weapon>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character unless one with the same name already exists.
    ///
    /// Returns `false` when the character was ignored.
    pub fn add_character(&mut self, character: Character) -> bool {
        if self.characters.contains_key(character.name()) {
            return false;
        }
        self.characters
            .insert(character.name().to_string(), Arc::new(character));
        true
    }

    /// Adds a card, returning the card it replaced.
    pub fn insert_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapons.insert(weapon.name().to_string(), weapon)
    }

    pub fn character(&self, name: &str) -> Option<&Arc<Character>> {
        self.characters.get(name)
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.get(name)
    }

    pub fn characters(&self) -> impl Iterator<Item = &Arc<Character>> {
        self.characters.values()
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.values()
    }

    /// The `index`-th character in name order.
    pub fn character_at(&self, index: usize) -> Option<&Arc<Character>> {
        self.characters.values().nth(index)
    }

    /// The `index`-th card in name order.
    pub fn weapon_at(&self, index: usize) -> Option<&Weapon> {
        self.weapons.values().nth(index)
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    /// Snapshot of the current characters for owner resolution.
    pub fn registry(&self) -> CharacterRegistry {
        self.characters.values().cloned().collect()
    }

    /// Merges another document into this catalog.
    ///
    /// Characters are added first (existing names win), then cards are
    /// resolved against the merged character set. If any card fails to load
    /// the catalog keeps the new characters but no card from `document`.
    pub fn merge(&mut self, document: CatalogDocument) -> Result<MergeSummary, LoadError> {
        let mut summary = MergeSummary::default();

        for character in load_characters(document.characters) {
            if self.add_character(character) {
                summary.characters_added += 1;
            } else {
                summary.characters_skipped += 1;
            }
        }

        let weapons = load_weapons(document.weapons, &self.registry())?;
        for weapon in weapons {
            match self.insert_weapon(weapon) {
                Some(_) => summary.weapons_replaced += 1,
                None => summary.weapons_added += 1,
            }
        }

        Ok(summary)
    }

    /// Builds a catalog from a single document.
    pub fn from_document(document: CatalogDocument) -> Result<Self, LoadError> {
        let mut catalog = Self::new();
        catalog.merge(document)?;
        Ok(catalog)
    }

    /// Document form of this catalog, both collections in name order.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            characters: self
                .characters()
                .map(|c| CharacterRecord::from(c.as_ref()))
                .collect(),
            weapons: self.weapons().map(WeaponRecord::from).collect(),
        }
    }

    /// Prices every card for every character.
    pub fn cost_table(&self, curve: &CostCurve) -> Vec<WeaponCosts<'_>> {
        self.weapons()
            .map(|weapon| WeaponCosts {
                weapon,
                costs: self
                    .characters()
                    .map(|character| {
                        (
                            character.as_ref(),
                            need_souls(character, weapon, curve),
                        )
                    })
                    .collect(),
            })
            .collect()
    }
}
