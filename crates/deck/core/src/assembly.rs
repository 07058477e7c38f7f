//! Turning parsed records into catalog entities.
//!
//! Loaders produce [`CharacterRecord`]s and [`WeaponRecord`]s from whatever
//! format they read. Characters are assembled first; the resulting
//! [`CharacterRegistry`] is then handed to [`load_weapons`] so that owner
//! names resolve against an explicit, immutable map.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::character::Character;
use crate::error::{DeckError, ErrorSeverity};
use crate::stats::StatVector;
use crate::weapon::{ItemType, Weapon};

/// A character as written in a catalog document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRecord {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<StatVector>,
}

/// A card as written in a catalog document.
///
/// `kind` holds the raw type token (`"weapon+"`); it is parsed into an
/// [`ItemType`] by [`load_weapons`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRecord {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub stats: StatVector,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub character: Option<String>,
}

/// Both collections of a catalog document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogDocument {
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<CharacterRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapons: Vec<WeaponRecord>,
}

/// Integrity failures that abort a load.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("weapon '{weapon}' references unknown character '{character}'")]
    UnknownCharacter { weapon: String, character: String },

    #[error("weapon '{weapon}' has malformed type '{token}'")]
    MalformedCategory { weapon: String, token: String },
}

impl DeckError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            LoadError::UnknownCharacter { .. } => "LOAD_UNKNOWN_CHARACTER",
            LoadError::MalformedCategory { .. } => "LOAD_MALFORMED_CATEGORY",
        }
    }
}

/// Immutable name -> character map used to resolve card owners.
#[derive(Clone, Debug, Default)]
pub struct CharacterRegistry {
    by_name: BTreeMap<String, Arc<Character>>,
}

impl CharacterRegistry {
    pub fn resolve(&self, name: &str) -> Option<&Arc<Character>> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Builds a registry; the first character with a given name wins.
impl FromIterator<Arc<Character>> for CharacterRegistry {
    fn from_iter<I: IntoIterator<Item = Arc<Character>>>(iter: I) -> Self {
        let mut by_name = BTreeMap::new();
        for character in iter {
            by_name
                .entry(character.name().to_string())
                .or_insert(character);
        }
        Self { by_name }
    }
}

pub fn load_characters(records: impl IntoIterator<Item = CharacterRecord>) -> Vec<Character> {
    records
        .into_iter()
        .map(|record| Character::new(record.name, record.stats))
        .collect()
}

/// Assembles cards, resolving owners through `characters`.
///
/// Any unknown owner or malformed type token fails the whole batch.
pub fn load_weapons(
    records: impl IntoIterator<Item = WeaponRecord>,
    characters: &CharacterRegistry,
) -> Result<Vec<Weapon>, LoadError> {
    records
        .into_iter()
        .map(|record| load_weapon(record, characters))
        .collect()
}

fn load_weapon(record: WeaponRecord, characters: &CharacterRegistry) -> Result<Weapon, LoadError> {
    let item_type: ItemType = record
        .kind
        .parse()
        .map_err(|_| LoadError::MalformedCategory {
            weapon: record.name.clone(),
            token: record.kind.clone(),
        })?;

    let weapon = Weapon::new(record.name, item_type, record.stats);
    match record.character.as_deref().filter(|name| !name.is_empty()) {
        None => Ok(weapon),
        Some(name) => {
            let owner = characters
                .resolve(name)
                .ok_or_else(|| LoadError::UnknownCharacter {
                    weapon: weapon.name().to_string(),
                    character: name.to_string(),
                })?;
            Ok(weapon.with_owner(Arc::clone(owner)))
        }
    }
}

impl From<&Character> for CharacterRecord {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name().to_string(),
            stats: character.levels().to_vec(),
        }
    }
}

impl From<&Weapon> for WeaponRecord {
    fn from(weapon: &Weapon) -> Self {
        Self {
            name: weapon.name().to_string(),
            kind: weapon.item_type().to_string(),
            stats: *weapon.requirements(),
            character: weapon.owner().map(|owner| owner.name().to_string()),
        }
    }
}
