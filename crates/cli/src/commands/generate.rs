//! Build a catalog file from JSON characters and CSV weapon tables.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use deck_content::ContentFactory;

/// Merge CSV weapon tables onto a character file and write the catalog
#[derive(Parser, Debug)]
pub struct Generate {
    /// Catalog file to write
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// JSON file providing the characters (and optionally cards)
    #[arg(short, long, value_name = "FILE")]
    characters: PathBuf,

    /// CSV weapon tables, merged in order
    #[arg(value_name = "CSV")]
    tables: Vec<PathBuf>,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let catalog = ContentFactory::generate(&self.output, &self.characters, &self.tables)?;

        println!(
            "{} {} ({} characters, {} weapons)",
            style("Wrote").green(),
            self.output.display(),
            catalog.character_count(),
            catalog.weapon_count()
        );
        Ok(())
    }
}
