//! Rooms needed per card and character.

use anyhow::Result;
use clap::Parser;
use console::style;
use deck_content::Expansion;
use deck_core::Catalog;
use strum::VariantNames;

use crate::Context;
use crate::config::TableArgs;

/// Print how many rooms each character must clear to use each card
#[derive(Parser, Debug)]
pub struct Report {
    #[command(flatten)]
    table: TableArgs,

    #[arg(short, long = "game", value_name = "GAME", num_args = 1.., help = game_help())]
    games: Vec<Expansion>,
}

fn game_help() -> String {
    format!(
        "Choose the games to load: {}",
        Expansion::VARIANTS.join(", ")
    )
}

impl Report {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let config = ctx.deck_config(&self.table)?;
        let catalog = ctx.factory.load_deck(&self.games)?;

        println!(
            "Loaded {} characters and {} weapons",
            catalog.character_count(),
            catalog.weapon_count()
        );

        for line in report_lines(&catalog, &config.curve, config.souls_per_room()) {
            println!("{}", style(&line.weapon).bold());
            println!("  => {}", line.entries.join(", "));
        }
        Ok(())
    }
}

/// One printed card entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub weapon: String,
    pub entries: Vec<String>,
}

pub fn report_lines(
    catalog: &Catalog,
    curve: &deck_core::CostCurve,
    souls_per_room: u32,
) -> Vec<ReportLine> {
    catalog
        .cost_table(curve)
        .into_iter()
        .map(|row| ReportLine {
            weapon: row.weapon.to_string(),
            entries: row
                .costs
                .iter()
                .map(|(character, souls)| match souls {
                    Some(souls) => format!(
                        "{}: {} rooms",
                        character.name(),
                        rooms_needed(*souls, souls_per_room)
                    ),
                    None => format!("{}: -", character.name()),
                })
                .collect(),
        })
        .collect()
}

/// Rooms to farm for `souls`, rounded up. `souls_per_room` must be positive.
pub fn rooms_needed(souls: u32, souls_per_room: u32) -> u32 {
    souls.div_ceil(souls_per_room)
}

#[cfg(test)]
mod tests {
    use deck_core::{CatalogDocument, CharacterRecord, CostCurve, StatVector, WeaponRecord};

    use super::*;

    #[test]
    fn rooms_round_up() {
        assert_eq!(rooms_needed(0, 8), 0);
        assert_eq!(rooms_needed(1, 8), 1);
        assert_eq!(rooms_needed(8, 8), 1);
        assert_eq!(rooms_needed(28, 8), 4);
        assert_eq!(rooms_needed(14, 2), 7);
    }

    #[test]
    fn lines_mark_unusable_cards() {
        let catalog = Catalog::from_document(CatalogDocument {
            characters: vec![
                CharacterRecord {
                    name: "herald".to_string(),
                    stats: vec![StatVector::new(12, 11, 9, 13), StatVector::new(21, 18, 14, 22)],
                },
                CharacterRecord {
                    name: "warrior".to_string(),
                    stats: vec![StatVector::new(20, 16, 9, 9)],
                },
            ],
            weapons: vec![WeaponRecord {
                name: "talisman".to_string(),
                kind: "spell".to_string(),
                stats: StatVector::new(0, 0, 0, 20),
                character: None,
            }],
        })
        .unwrap();

        let curve = CostCurve::normal();
        let lines = report_lines(&catalog, &curve, curve.souls_per_room(4));

        assert_eq!(
            lines,
            vec![ReportLine {
                weapon: "talisman - spell: (str=0, dex=0, int=0, fai=20)".to_string(),
                entries: vec!["herald: 1 rooms".to_string(), "warrior: -".to_string()],
            }]
        );
    }
}
