//! Per-stat price of one card for one character.

use anyhow::Result;
use clap::Parser;
use console::style;
use deck_content::Expansion;
use deck_core::{StatKind, assess};

use crate::Context;
use crate::commands::report::rooms_needed;
use crate::config::TableArgs;

/// Show the level and soul cost of each stat a card requires
#[derive(Parser, Debug)]
pub struct Cost {
    /// Character name (e.g. herald)
    #[arg(value_name = "CHARACTER")]
    character: String,

    /// Card name (e.g. avelyn)
    #[arg(value_name = "WEAPON")]
    weapon: String,

    #[command(flatten)]
    table: TableArgs,

    /// Expansions to merge onto the base game
    #[arg(short, long = "game", value_name = "GAME", num_args = 1..)]
    games: Vec<Expansion>,
}

impl Cost {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let config = ctx.deck_config(&self.table)?;
        let catalog = ctx.factory.load_deck(&self.games)?;

        let Some(character) = catalog.character(&self.character) else {
            anyhow::bail!("Unknown character '{}'", self.character);
        };
        let Some(weapon) = catalog.weapon(&self.weapon) else {
            anyhow::bail!("Unknown weapon '{}'", self.weapon);
        };

        println!("{}", style(weapon).bold());
        match assess(character, weapon, &config.curve) {
            Ok(breakdown) => {
                for stat in StatKind::ALL {
                    let required = weapon.requirements()[stat];
                    if required == 0 {
                        continue;
                    }
                    println!(
                        "  {} {:>3} -> level {} ({} souls)",
                        stat.title(),
                        required,
                        breakdown.level(stat),
                        breakdown.cost(stat)
                    );
                }
                let total = breakdown.total();
                println!(
                    "  {}: {} souls, {} rooms with {} players",
                    style(character.name()).cyan(),
                    total,
                    rooms_needed(total, config.souls_per_room()),
                    config.players
                );
            }
            Err(reason) => {
                println!(
                    "  {}: {} ({})",
                    style(character.name()).cyan(),
                    style("not equippable").red(),
                    reason
                );
            }
        }
        Ok(())
    }
}
