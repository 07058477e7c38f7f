//! Catalog listing.

use anyhow::Result;
use clap::Parser;
use console::style;
use deck_content::Expansion;
use deck_core::StatKind;

use crate::Context;

/// List characters with their level tables, then all cards
#[derive(Parser, Debug)]
pub struct List {
    /// Expansions to merge onto the base game
    #[arg(short, long = "game", value_name = "GAME", num_args = 1..)]
    games: Vec<Expansion>,
}

impl List {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let catalog = ctx.factory.load_deck(&self.games)?;

        println!("{}", style("Characters").bold().underlined());
        for character in catalog.characters() {
            println!("{}", style(character.name()).cyan());
            let titles: Vec<&str> = StatKind::ALL.iter().map(|s| s.title()).collect();
            println!("  Lvl  {}", titles.join("  "));
            for (level, stats) in character.levels().iter().enumerate() {
                let values: Vec<String> = stats.iter().map(|(_, v)| format!("{:>4}", v)).collect();
                println!("  {:>3} {}", level, values.join(" "));
            }
        }

        println!();
        println!("{}", style("Weapons").bold().underlined());
        for weapon in catalog.weapons() {
            println!("{}", weapon);
        }
        Ok(())
    }
}
