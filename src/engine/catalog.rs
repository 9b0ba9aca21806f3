use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::model::monster::Monster;

/// Loads the monster catalog. Never fails: a missing or unreadable
/// catalog is logged and treated as empty.
pub fn load_monsters(path: &Path) -> Vec<Monster> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "monster catalog not found");
        return Vec::new();
    }

    match read_catalog(path) {
        Ok(monsters) => {
            tracing::info!(count = monsters.len(), "monster catalog loaded");
            monsters
        }
        Err(e) => {
            tracing::warn!("failed to load monster catalog: {e:#}");
            Vec::new()
        }
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<Vec<Monster>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let monsters = serde_json::from_str(&data)
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(monsters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_catalog_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_monsters(&tmp.path().join("monsters.json")).is_empty());
    }

    #[test]
    fn empty_or_malformed_catalog_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("monsters.json");

        fs::write(&path, "").unwrap();
        assert!(load_monsters(&path).is_empty());

        fs::write(&path, r#"{"name": "not an array"}"#).unwrap();
        assert!(load_monsters(&path).is_empty());
    }

    #[test]
    fn loads_entries_with_fresh_ids() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("monsters.json");
        fs::write(
            &path,
            r#"[
                {"name": "Goblin", "hit_points": 7, "challenge_rating": "1/4"},
                {"name": null, "speed_json": {"walk": 30, "swim": null}}
            ]"#,
        )
        .unwrap();

        let first = load_monsters(&path);
        let second = load_monsters(&path);

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].display_name(), "Goblin");
        assert_eq!(first[1].stats.speed_json.as_ref().unwrap().walk, Some(30));
        assert_ne!(first[0].id, second[0].id);
        assert_eq!(first, second);
    }
}
