//! JSON catalog documents.

use std::path::Path;

use deck_core::{Catalog, CatalogDocument, MergeSummary};

use crate::loaders::{LoadResult, integrity_error, read_file};

/// Loader for catalog documents (`characters` + `weapons`) in JSON.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse a catalog document without resolving it.
    pub fn parse(content: &str) -> LoadResult<CatalogDocument> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog JSON: {}", e))
    }

    /// Load a catalog from a single JSON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let mut catalog = Catalog::new();
        Self::extend(&mut catalog, path)?;
        Ok(catalog)
    }

    /// Merge a JSON file into an existing catalog.
    ///
    /// Characters already in `catalog` are kept; cards with an existing name
    /// are replaced. An unknown owner name fails the whole file.
    pub fn extend(catalog: &mut Catalog, path: &Path) -> LoadResult<MergeSummary> {
        let content = read_file(path)?;
        let document = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        let summary = catalog
            .merge(document)
            .map_err(|e| integrity_error(path, e))?;

        if summary.characters_skipped > 0 {
            tracing::warn!(
                "{}: ignored {} character(s) already in the catalog",
                path.display(),
                summary.characters_skipped
            );
        }
        tracing::debug!(
            "Merged {}: +{} characters, +{} weapons, {} replaced",
            path.display(),
            summary.characters_added,
            summary.weapons_added,
            summary.weapons_replaced
        );

        Ok(summary)
    }
}

/// Writer for catalog documents.
pub struct CatalogWriter;

impl CatalogWriter {
    /// Render `catalog` as JSON with sorted keys and name-ordered collections.
    pub fn to_json(catalog: &Catalog) -> LoadResult<String> {
        // Going through `Value` sorts object keys.
        let value = serde_json::to_value(catalog.to_document())?;
        let mut json = serde_json::to_string_pretty(&value)?;
        json.push('\n');
        Ok(json)
    }

    pub fn write(catalog: &Catalog, path: &Path) -> LoadResult<()> {
        let json = Self::to_json(catalog)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;

        tracing::info!(
            "Wrote {} characters and {} weapons to {}",
            catalog.character_count(),
            catalog.weapon_count(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "characters": [
            {"name": "warrior", "stats": [[20, 16, 9, 9], [28, 22, 12, 13]]}
        ],
        "weapons": [
            {"name": "shield", "type": "shield", "stats": [12, 0, 0, 0]},
            {"name": "warrior axe", "type": "weapon+", "stats": [22, 0, 0, 0], "character": "warrior"}
        ]
    }"#;

    #[test]
    fn written_json_has_sorted_keys() {
        let catalog = Catalog::from_document(CatalogLoader::parse(SAMPLE).unwrap()).unwrap();
        let json = CatalogWriter::to_json(&catalog).unwrap();

        let characters = json.find("\"characters\"").unwrap();
        let weapons = json.find("\"weapons\"").unwrap();
        assert!(characters < weapons);
        assert!(json.contains("\"type\": \"weapon+\""));

        let reparsed = Catalog::from_document(CatalogLoader::parse(&json).unwrap()).unwrap();
        assert_eq!(reparsed, catalog);
    }

    #[test]
    fn load_failure_reports_error_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{"weapons": [{"name": "estoc", "type": "weapon", "stats": [0, 0, 0, 0], "character": "knight"}]}"#,
        )
        .unwrap();

        let err = CatalogLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("unknown character 'knight'"));
        assert!(err.contains("[LOAD_UNKNOWN_CHARACTER]"));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let document = CatalogLoader::parse(r#"{"characters": []}"#).unwrap();
        assert!(document.weapons.is_empty());
    }

    #[test]
    fn rejects_wrong_stat_arity() {
        let bad = r#"{"weapons": [{"name": "x", "type": "ring", "stats": [1, 2, 3]}]}"#;
        assert!(CatalogLoader::parse(bad).is_err());
    }
}
