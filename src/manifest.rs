use std::path::Path;

use serde_json::{Map, Value};

use crate::constants::DEPENDENCIES_KEY;
use crate::error::{Error, Result};
use crate::ioutils::{map_io_error, write_file};

/// Merges fields into a JSON package manifest and rewrites it in place.
///
/// # Arguments
/// * `file_path` - Path to the manifest (e.g. `package.json`)
/// * `updates` - Fields to merge in
///
/// # Behavior
/// The `dependencies` field is deep-merged: entries from the update are
/// inserted or overwritten, entries outside it are preserved. Every other
/// update key is set directly at the top level. Keys not mentioned in the
/// update keep their position; the document is rewritten with 2-space
/// indentation.
pub fn update_manifest<P: AsRef<Path>>(
    file_path: P,
    updates: &Map<String, Value>,
) -> Result<()> {
    let file_path = file_path.as_ref();

    if !file_path.is_file() {
        return Err(Error::FileMissingError { path: file_path.display().to_string() });
    }

    let content = std::fs::read_to_string(file_path)
        .map_err(|e| map_io_error(file_path, e))?;
    let mut manifest: Map<String, Value> = serde_json::from_str(&content)?;

    for (key, value) in updates {
        match (key.as_str(), value) {
            (DEPENDENCIES_KEY, Value::Object(new_dependencies)) => {
                merge_dependencies(&mut manifest, new_dependencies);
            }
            _ => {
                manifest.insert(key.clone(), value.clone());
            }
        }
    }

    let serialized = serde_json::to_string_pretty(&manifest)?;
    write_file(&serialized, file_path)?;
    log::info!("Updated '{}'.", file_path.display());
    Ok(())
}

/// Inserts or overwrites dependency entries, keeping entries the update does
/// not mention. A pre-existing non-object `dependencies` value is replaced.
fn merge_dependencies(
    manifest: &mut Map<String, Value>,
    new_dependencies: &Map<String, Value>,
) {
    if !manifest.get(DEPENDENCIES_KEY).is_some_and(Value::is_object) {
        manifest
            .insert(DEPENDENCIES_KEY.to_string(), Value::Object(Map::new()));
    }

    if let Some(Value::Object(existing)) = manifest.get_mut(DEPENDENCIES_KEY) {
        for (name, constraint) in new_dependencies {
            existing.insert(name.clone(), constraint.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("package.json");
        fs::write(&path, content).unwrap();
        path
    }

    fn read_manifest(path: &Path) -> Map<String, Value> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn merging_dependencies_keeps_existing_entries() {
        let dir = TempDir::new().unwrap();
        let path =
            write_manifest(&dir, r#"{"name":"x","dependencies":{"a":"1.0"}}"#);
        let updates =
            json!({"dependencies": {"b": "2.0"}}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let manifest = read_manifest(&path);
        assert_eq!(manifest["name"], "x");
        assert_eq!(manifest["dependencies"]["a"], "1.0");
        assert_eq!(manifest["dependencies"]["b"], "2.0");
    }

    #[test]
    fn merging_overwrites_colliding_dependency_entries() {
        let dir = TempDir::new().unwrap();
        let path =
            write_manifest(&dir, r#"{"dependencies":{"a":"1.0","b":"1.0"}}"#);
        let updates =
            json!({"dependencies": {"b": "2.0"}}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let manifest = read_manifest(&path);
        assert_eq!(manifest["dependencies"]["a"], "1.0");
        assert_eq!(manifest["dependencies"]["b"], "2.0");
    }

    #[test]
    fn non_dependency_keys_are_set_at_top_level() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"name":"x","version":"1.0.0","dependencies":{"a":"1.0"}}"#,
        );
        let updates = json!({"version": "2.0.0"}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let manifest = read_manifest(&path);
        assert_eq!(manifest["version"], "2.0.0");
        assert_eq!(manifest["name"], "x");
        // dependencies untouched
        assert_eq!(manifest["dependencies"], json!({"a": "1.0"}));
    }

    #[test]
    fn dependencies_field_is_created_when_absent() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name":"x"}"#);
        let updates =
            json!({"dependencies": {"b": "2.0"}}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let manifest = read_manifest(&path);
        assert_eq!(manifest["dependencies"], json!({"b": "2.0"}));
    }

    #[test]
    fn untouched_key_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            r#"{"zeta":"1","name":"x","alpha":"2","dependencies":{"a":"1.0"}}"#,
        );
        let updates =
            json!({"dependencies": {"b": "2.0"}}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let manifest = read_manifest(&path);
        let keys: Vec<&str> = manifest.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "name", "alpha", "dependencies"]);
    }

    #[test]
    fn output_uses_two_space_indentation() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name":"x"}"#);
        let updates = json!({"version": "1.0.0"}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"name\""));
    }

    #[test]
    fn unparseable_manifest_is_a_fatal_error() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "not json at all");
        let updates = json!({"version": "1.0.0"}).as_object().unwrap().clone();

        let result = update_manifest(&path, &updates);
        assert!(matches!(result, Err(Error::ManifestParseError(_))));
    }

    #[test]
    fn non_object_top_level_is_a_fatal_error() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"["an", "array"]"#);
        let updates = json!({"version": "1.0.0"}).as_object().unwrap().clone();

        let result = update_manifest(&path, &updates);
        assert!(matches!(result, Err(Error::ManifestParseError(_))));
    }

    #[test]
    fn missing_manifest_is_a_fatal_error() {
        let dir = TempDir::new().unwrap();
        let updates = json!({}).as_object().unwrap().clone();

        let result = update_manifest(&dir.path().join("package.json"), &updates);
        assert!(matches!(result, Err(Error::FileMissingError { .. })));
    }

    #[test]
    fn non_object_dependencies_value_is_replaced_by_the_merge() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"dependencies":"oops"}"#);
        let updates =
            json!({"dependencies": {"b": "2.0"}}).as_object().unwrap().clone();

        update_manifest(&path, &updates).unwrap();

        let manifest = read_manifest(&path);
        assert_eq!(manifest["dependencies"], json!({"b": "2.0"}));
    }
}
