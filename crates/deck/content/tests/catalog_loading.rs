//! Loading, pricing and writing the example deck.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use deck_content::{CatalogLoader, CatalogWriter, ContentFactory, Expansion, TabularWeaponLoader};
use deck_core::{Catalog, CostCurve, need_souls};
use serde_json::Value;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn example_catalog() -> Catalog {
    CatalogLoader::load(&data("ex_base_game.json")).expect("example catalog should load")
}

fn costs_for(catalog: &Catalog, character: &str) -> BTreeMap<String, Option<u32>> {
    let curve = CostCurve::normal();
    let character = catalog.character(character).expect("character exists");
    catalog
        .weapons()
        .map(|w| (w.name().to_string(), need_souls(character, w, &curve)))
        .collect()
}

fn expected(entries: &[(&str, Option<u32>)]) -> BTreeMap<String, Option<u32>> {
    entries
        .iter()
        .map(|(name, cost)| (name.to_string(), *cost))
        .collect()
}

/// Sorts both collections by name so documents compare independent of order.
fn normalized(mut value: Value) -> Value {
    for key in ["characters", "weapons"] {
        if let Some(Value::Array(items)) = value.get_mut(key) {
            items.sort_by(|a, b| a["name"].as_str().cmp(&b["name"].as_str()));
        }
    }
    value
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn herald_souls_per_weapon() {
    let catalog = example_catalog();

    assert_eq!(
        costs_for(&catalog, "herald"),
        expected(&[
            ("cathedral knight armour", Some(8)),
            ("tiny being's ring", Some(2)),
            ("replenishment", Some(6)),
            ("golden wing crest shield", Some(12)),
            ("bountiful light", Some(14)),
            ("antiquated robes", Some(8)),
            ("avelyn", Some(28)),
            ("black armour", Some(12)),
            ("blessed gem", Some(6)),
        ])
    );
}

#[test]
fn warrior_souls_per_weapon() {
    let catalog = example_catalog();

    assert_eq!(
        costs_for(&catalog, "warrior"),
        expected(&[
            ("cathedral knight armour", None),
            ("tiny being's ring", None),
            ("replenishment", None),
            ("golden wing crest shield", None),
            ("bountiful light", None),
            ("antiquated robes", Some(8)),
            ("avelyn", Some(20)),
            ("black armour", Some(12)),
            ("blessed gem", Some(6)),
        ])
    );
}

#[test]
fn document_round_trip_matches_source() {
    let catalog = example_catalog();
    let written = serde_json::to_value(catalog.to_document()).unwrap();

    assert_eq!(
        normalized(written),
        normalized(read_json(&data("ex_base_game.json")))
    );
}

#[test]
fn csv_import_reproduces_example_catalog() {
    let mut catalog = CatalogLoader::load(&data("base_game_characters_only.json")).unwrap();
    let loaded = TabularWeaponLoader::load(&mut catalog, &data("ex_weapons.csv")).unwrap();

    assert_eq!(loaded, 9);
    assert_eq!(catalog, example_catalog());
}

#[test]
fn written_file_reloads_to_equal_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.json");
    let catalog = example_catalog();

    CatalogWriter::write(&catalog, &path).unwrap();

    assert_eq!(CatalogLoader::load(&path).unwrap(), catalog);
    assert_eq!(
        normalized(read_json(&path)),
        normalized(read_json(&data("ex_base_game.json")))
    );
}

#[test]
fn generate_merges_tables_onto_characters() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("base_game.json");

    let catalog = ContentFactory::generate(
        &output,
        &data("base_game_characters_only.json"),
        &[data("ex_weapons.csv")],
    )
    .unwrap();

    assert_eq!(catalog.weapon_count(), 9);
    assert_eq!(CatalogLoader::load(&output).unwrap(), catalog);
}

#[test]
fn unknown_owner_in_table_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("weapons.csv");
    std::fs::write(
        &table,
        "name,type,strength,dexterity,intelligence,faith\n\
         club,weapon,10,0,0,0\n\
         knight sword,knight weapon,14,12,0,0\n",
    )
    .unwrap();

    let mut catalog = example_catalog();
    let err = TabularWeaponLoader::load(&mut catalog, &table).unwrap_err();

    assert!(err.to_string().contains("unknown character 'knight'"));
    assert!(catalog.weapon("club").is_none());
}

#[test]
fn expansions_merge_onto_base_game() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        data("ex_base_game.json"),
        dir.path().join(ContentFactory::BASE_GAME),
    )
    .unwrap();
    std::fs::write(
        dir.path().join(Expansion::Explorer.file_name()),
        r#"{
            "characters": [
                {"name": "herald", "stats": []},
                {"name": "assassin", "stats": [[14, 20, 11, 9], [18, 26, 14, 11]]}
            ],
            "weapons": [
                {"name": "dark hand", "type": "weapon", "stats": [0, 18, 0, 0], "character": "assassin"},
                {"name": "avelyn", "type": "weapon+", "stats": [30, 30, 0, 0]}
            ]
        }"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let catalog = factory.load_deck(&[Expansion::Explorer]).unwrap();

    assert_eq!(catalog.character_count(), 3);
    assert_eq!(catalog.weapon_count(), 10);
    // The base game's herald is kept.
    assert_eq!(catalog.character("herald").unwrap().level_count(), 4);
    assert_eq!(catalog.weapon("avelyn").unwrap().upgrade_level(), 1);

    let assassin = catalog.character("assassin").unwrap();
    let dark_hand = catalog.weapon("dark hand").unwrap();
    assert_eq!(need_souls(assassin, dark_hand, &CostCurve::normal()), Some(0));
}

#[test]
fn missing_expansion_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        data("ex_base_game.json"),
        dir.path().join(ContentFactory::BASE_GAME),
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    assert!(factory.load_deck(&[Expansion::IronKeep]).is_err());
}
