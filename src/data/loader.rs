//! Catalog file loading.

use crate::catalog::{Pokedex, Pokemon};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON file containing an array of records.
///
/// File order becomes master-list insertion order.
pub fn load_catalog(path: &Path) -> Result<Pokedex> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&contents)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(contents: &str) -> Result<Pokedex> {
    let records: Vec<Pokemon> =
        serde_json::from_str(contents).context("Catalog is not a JSON array of records")?;

    let mut dex = Pokedex::new();
    for record in records {
        dex.add(record);
    }
    Ok(dex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"[
        {
            "id": 4,
            "name": "Charmander",
            "generation": 1,
            "types": ["fire"],
            "height": 6.0,
            "weight": 85.0,
            "base_experience": 62,
            "stats": {"hp": 39, "attack": 52, "defense": 43, "sp_atk": 60, "sp_def": 50, "speed": 65},
            "moves": [
                {"name": "Ember", "type_name": "fire", "power": 40, "category": "special"}
            ],
            "evolution": {
                "base": {"id": 4, "name": "Charmander"},
                "stages": [
                    {"id": 5, "name": "Charmeleon", "trigger": "level-up", "min_level": 16},
                    {"id": 6, "name": "Charizard", "trigger": "level-up", "min_level": 36}
                ]
            }
        },
        {
            "id": 25,
            "name": "Pikachu",
            "generation": 1,
            "types": ["electric"]
        }
    ]"#;

    #[test]
    fn test_parse_catalog_preserves_file_order() {
        let dex = parse_catalog(MINIMAL).expect("parse");
        let ids: Vec<u32> = dex.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 25]);
    }

    #[test]
    fn test_parse_catalog_full_record() {
        let dex = parse_catalog(MINIMAL).expect("parse");
        let charmander = dex.get_by_id(4).expect("charmander");

        assert_eq!(charmander.primary_type(), Some("fire"));
        assert_eq!(charmander.stats.speed, 65);
        assert_eq!(charmander.moves.len(), 1);
        assert_eq!(charmander.moves[0].name, "Ember");

        let chain = charmander.evolution.as_ref().expect("chain");
        assert_eq!(chain.stage_ids(), vec![4, 5, 6]);
        assert_eq!(chain.stages[1].min_level, 36);
    }

    #[test]
    fn test_parse_catalog_optional_fields_default() {
        let dex = parse_catalog(MINIMAL).expect("parse");
        let pikachu = dex.get_by_id(25).expect("pikachu");

        assert_eq!(pikachu.height, 0.0);
        assert!(pikachu.moves.is_empty());
        assert!(pikachu.evolution.is_none());
        // Falls back to the English name for display.
        assert_eq!(pikachu.display_name(), "Pikachu");
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        assert!(parse_catalog("{\"not\": \"an array\"}").is_err());
        assert!(parse_catalog("[{\"name\": \"missing id\"}]").is_err());
    }

    #[test]
    fn test_load_catalog_missing_file_errors_with_path() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("nope.json");
        let err = load_catalog(&path).expect_err("should fail");
        assert!(format!("{err:?}").contains("Failed to read catalog file"));
    }

    #[test]
    fn test_load_catalog_from_disk() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, MINIMAL).expect("write");

        let dex = load_catalog(&path).expect("load");
        assert_eq!(dex.len(), 2);
    }
}
