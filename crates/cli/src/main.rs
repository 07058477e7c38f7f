//! Soul cost calculator for the deck.
//!
//! Run with: `soul-deck <command>`
//!
//! ```bash
//! # Rooms per card for a 2-player campaign with the Explorer expansion
//! soul-deck report --campaign-mode -p 2 -g explorer
//!
//! # Rebuild base_game.json from the spreadsheet exports
//! soul-deck generate -o data/base_game.json -c characters_only.json weapons.csv
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Cost, Generate, List, Report};
use config::{CliConfig, TableArgs};
use deck_content::{ContentFactory, DeckConfig};

/// Soul cost calculator for characters and weapons
#[derive(Parser)]
#[command(name = "soul-deck")]
#[command(about = "Soul cost calculator for characters and weapons", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding base_game.json and expansion files
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Deck configuration file (defaults to <DIR>/deck.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rooms needed per card and character
    Report(Report),

    /// Price one card for one character
    Cost(Cost),

    /// List characters and cards
    List(List),

    /// Build a catalog from JSON characters and CSV weapon tables
    Generate(Generate),
}

/// Resolved inputs shared by all commands.
pub struct Context {
    pub factory: ContentFactory,
    env: CliConfig,
    config_file: Option<PathBuf>,
}

impl Context {
    /// Table settings after applying file, environment and flag layers.
    pub fn deck_config(&self, table: &TableArgs) -> Result<DeckConfig> {
        let config = config::resolve_deck_config(
            &self.factory,
            self.config_file.as_deref(),
            &self.env,
            table,
        )?;
        tracing::debug!(
            "Using {} players, curve {:?}",
            config.players,
            config.curve.increments()
        );
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = CliConfig::from_env()?;
    let ctx = Context {
        factory: ContentFactory::new(env.data_dir(cli.data_dir.as_deref())),
        env,
        config_file: cli.config,
    };
    tracing::debug!("Data directory: {}", ctx.factory.data_dir().display());

    match cli.command {
        Command::Report(cmd) => cmd.execute(&ctx),
        Command::Cost(cmd) => cmd.execute(&ctx),
        Command::List(cmd) => cmd.execute(&ctx),
        Command::Generate(cmd) => cmd.execute(),
    }
}
