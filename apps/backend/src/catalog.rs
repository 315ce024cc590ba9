//! Catalog loading.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use wordloop_core::Item;

/// Load the item catalog from a JSON file.
///
/// The file holds a JSON array of items; ids must be unique.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<Vec<Item>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&content)
        .with_context(|| format!("parsing catalog file {}", path.display()))?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id) {
            anyhow::bail!("duplicate item id {} in {}", item.id, path.display());
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_items_with_defaulted_fields() {
        let path = write_temp(
            "wordloop-catalog-ok.json",
            r#"[
                {"id": 1, "text": "absence", "phonetic": "/ab/", "meaning": "n. being away"},
                {"id": 2, "text": "compose", "phonetic": "/kp/", "meaning": "v. put together",
                 "sentences": ["She composed a symphony."],
                 "root_info": "com- (together) + ponere (put)"}
            ]"#,
        );

        let items = load_catalog(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert!(!items[0].review.is_learned);
        assert_eq!(items[0].review.interval_days, 1);
        assert_eq!(items[1].sentences.len(), 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let path = write_temp(
            "wordloop-catalog-dup.json",
            r#"[
                {"id": 1, "text": "a", "phonetic": "", "meaning": "x"},
                {"id": 1, "text": "b", "phonetic": "", "meaning": "y"}
            ]"#,
        );

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_catalog("/nonexistent/catalog.json").is_err());
    }
}
