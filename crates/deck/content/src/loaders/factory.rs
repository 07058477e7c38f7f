//! Content factory for building catalogs from a data directory.

use std::path::{Path, PathBuf};

use deck_core::Catalog;

use crate::loaders::{
    CatalogLoader, CatalogWriter, ConfigLoader, DeckConfig, LoadResult, TabularWeaponLoader,
};

/// Expansion boxes that can be merged on top of the base game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Expansion {
    Characters,
    DarkRoot,
    Explorer,
    IronKeep,
}

impl Expansion {
    /// File holding this expansion's characters and cards.
    pub fn file_name(self) -> String {
        format!("{}_game.json", self.as_ref())
    }
}

/// Content factory that loads deck content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── deck.toml              (optional)
/// ├── base_game.json
/// ├── characters_game.json   (optional expansions)
/// ├── dark_root_game.json
/// ├── explorer_game.json
/// └── iron_keep_game.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const BASE_GAME: &'static str = "base_game.json";
    pub const CONFIG: &'static str = "deck.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `deck.toml`, falling back to defaults when it does not exist.
    pub fn load_config(&self) -> LoadResult<DeckConfig> {
        let path = self.data_dir.join(Self::CONFIG);
        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", Self::CONFIG, self.data_dir.display());
            return Ok(DeckConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the base game from `base_game.json`.
    pub fn load_base(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join(Self::BASE_GAME);
        CatalogLoader::load(&path)
    }

    /// Load the base game merged with each expansion, in order.
    pub fn load_deck(&self, expansions: &[Expansion]) -> LoadResult<Catalog> {
        let mut catalog = self.load_base()?;
        for expansion in expansions {
            let path = self.data_dir.join(expansion.file_name());
            tracing::info!("Loading expansion {} from {}", expansion, path.display());
            CatalogLoader::extend(&mut catalog, &path)?;
        }

        tracing::info!(
            "Loaded {} characters and {} weapons",
            catalog.character_count(),
            catalog.weapon_count()
        );
        Ok(catalog)
    }

    /// Build a catalog file from a JSON source plus CSV weapon tables.
    ///
    /// The JSON source usually carries only characters; each table adds cards
    /// owned by those characters or by nobody. The merged catalog is written
    /// to `output` and returned.
    pub fn generate(
        output: &Path,
        characters_source: &Path,
        weapon_tables: &[PathBuf],
    ) -> LoadResult<Catalog> {
        tracing::info!("Loading {}", characters_source.display());
        let mut catalog = CatalogLoader::load(characters_source)?;

        for table in weapon_tables {
            tracing::info!("Loading {}", table.display());
            TabularWeaponLoader::load(&mut catalog, table)?;
        }

        tracing::info!("Writing {}", output.display());
        CatalogWriter::write(&catalog, output)?;
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
