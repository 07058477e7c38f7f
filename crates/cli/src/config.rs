//! CLI configuration layering.
//!
//! Settings are resolved in this order, later layers winning:
//! 1. Built-in defaults
//! 2. `deck.toml` (from `--config` or the data directory)
//! 3. Environment variables (also read from `.env`)
//! 4. Command-line flags
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use deck_content::{ConfigLoader, ContentFactory, DeckConfig};
use deck_core::{CostCurve, GameMode};

/// Settings taken from the process environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub players: Option<u32>,
    pub mode: Option<GameMode>,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DECK_DATA_DIR` - Directory holding `base_game.json` (default: `data`)
    /// - `DECK_PLAYERS` - Number of players, 1 to 4 (default: 4)
    /// - `DECK_MODE` - `normal` or `campaign` (default: normal)
    ///
    /// A variable that is set but does not parse is an error.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: read_env::<PathBuf>("DECK_DATA_DIR")?,
            players: read_env::<u32>("DECK_PLAYERS")?,
            mode: read_env::<GameMode>("DECK_MODE")?,
        })
    }

    /// Data directory: flag, then environment, then `./data`.
    pub fn data_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR))
    }
}

/// Table options shared by the pricing commands.
#[derive(Args, Clone, Debug, Default)]
pub struct TableArgs {
    /// Use the campaign upgrade cost
    #[arg(long)]
    pub campaign_mode: bool,

    /// Number of players (from 1 to 4)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=4))]
    pub players: Option<u32>,
}

/// Loads the file layer and applies environment and flag overrides.
pub fn resolve_deck_config(
    factory: &ContentFactory,
    config_file: Option<&Path>,
    env: &CliConfig,
    table: &TableArgs,
) -> Result<DeckConfig> {
    let base = match config_file {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };
    apply_overrides(base, env, table)
}

fn apply_overrides(base: DeckConfig, env: &CliConfig, table: &TableArgs) -> Result<DeckConfig> {
    let players = table.players.or(env.players).unwrap_or(base.players);
    let curve = if table.campaign_mode {
        CostCurve::campaign()
    } else if let Some(mode) = env.mode {
        mode.curve()
    } else {
        base.curve
    };
    DeckConfig::new(players, curve)
}

fn read_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(raw) => parse_env(key, Some(&raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => anyhow::bail!("{} is not valid unicode", key),
    }
}

fn parse_env<T>(key: &str, raw: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => anyhow::bail!("invalid {} value '{}'", key, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment_and_file() {
        let file = DeckConfig::new(3, CostCurve::normal()).unwrap();
        let env = CliConfig {
            data_dir: None,
            players: Some(2),
            mode: Some(GameMode::Normal),
        };
        let table = TableArgs {
            campaign_mode: true,
            players: Some(1),
        };

        let config = apply_overrides(file, &env, &table).unwrap();
        assert_eq!(config.players, 1);
        assert_eq!(config.curve, CostCurve::campaign());
    }

    #[test]
    fn environment_overrides_file() {
        let file = DeckConfig::new(3, CostCurve::normal()).unwrap();
        let env = CliConfig {
            data_dir: None,
            players: Some(2),
            mode: Some(GameMode::Campaign),
        };

        let config = apply_overrides(file, &env, &TableArgs::default()).unwrap();
        assert_eq!(config.players, 2);
        assert_eq!(config.curve, CostCurve::campaign());
    }

    #[test]
    fn invalid_environment_players_is_rejected() {
        let env = CliConfig {
            players: Some(9),
            ..Default::default()
        };
        assert!(apply_overrides(DeckConfig::default(), &env, &TableArgs::default()).is_err());
    }

    #[test]
    fn unparsable_environment_values_are_errors() {
        let mode = parse_env::<GameMode>("DECK_MODE", Some("campaing"));
        assert!(mode.unwrap_err().to_string().contains("DECK_MODE"));
        assert!(parse_env::<u32>("DECK_PLAYERS", Some("two")).is_err());

        assert_eq!(
            parse_env::<GameMode>("DECK_MODE", Some("campaign")).unwrap(),
            Some(GameMode::Campaign)
        );
        assert_eq!(parse_env::<u32>("DECK_PLAYERS", None).unwrap(), None);
    }

    #[test]
    fn data_dir_precedence() {
        let env = CliConfig {
            data_dir: Some(PathBuf::from("/srv/deck")),
            ..Default::default()
        };

        assert_eq!(env.data_dir(None), PathBuf::from("/srv/deck"));
        assert_eq!(env.data_dir(Some(Path::new("here"))), PathBuf::from("here"));
        assert_eq!(CliConfig::default().data_dir(None), PathBuf::from("data"));
    }
}
