//! Deck configuration loader.

use std::path::Path;

use deck_core::{CostCurve, GameMode};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Table settings: number of players and the cost curve in use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckConfig {
    pub players: u32,
    pub curve: CostCurve,
}

impl DeckConfig {
    pub const MIN_PLAYERS: u32 = 1;
    pub const MAX_PLAYERS: u32 = 4;
    pub const DEFAULT_PLAYERS: u32 = 4;

    pub fn new(players: u32, curve: CostCurve) -> LoadResult<Self> {
        Ok(Self {
            players: Self::validate_players(players)?,
            curve,
        })
    }

    pub fn validate_players(players: u32) -> LoadResult<u32> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&players) {
            anyhow::bail!(
                "players must be between {} and {}, got {}",
                Self::MIN_PLAYERS,
                Self::MAX_PLAYERS,
                players
            );
        }
        Ok(players)
    }

    /// Souls one room yields at this table.
    pub fn souls_per_room(&self) -> u32 {
        self.curve.souls_per_room(self.players)
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            players: Self::DEFAULT_PLAYERS,
            curve: CostCurve::default(),
        }
    }
}

/// On-disk shape of `deck.toml`.
///
/// ```toml
/// players = 4
///
/// [curve]
/// preset = "campaign"
/// # or an explicit curve:
/// # increments = [0, 2, 4, 8]
/// # units_per_level = 2
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    players: Option<u32>,
    #[serde(default)]
    curve: CurveSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CurveSection {
    preset: Option<GameMode>,
    increments: Option<Vec<u32>>,
    units_per_level: Option<u32>,
}

impl CurveSection {
    /// Explicit increments win over the preset; the preset supplies any
    /// missing `units_per_level`.
    fn resolve(self) -> LoadResult<CostCurve> {
        let base = self.preset.unwrap_or_default().curve();
        match (self.increments, self.units_per_level) {
            (None, None) => Ok(base),
            (increments, units) => Ok(CostCurve::new(
                increments.unwrap_or_else(|| base.increments().to_vec()),
                units.unwrap_or(base.units_per_level()),
            )?),
        }
    }
}

/// Loader for deck configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<DeckConfig> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        DeckConfig::new(
            file.players.unwrap_or(DeckConfig::DEFAULT_PLAYERS),
            file.curve.resolve()?,
        )
    }

    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<DeckConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            "Loaded config from {}: players={}, curve={:?}",
            path.display(),
            config.players,
            config.curve.increments()
        );
        Ok(config)
    }
}
