//! Fixture loader for Vigil reference analyses and portfolio datasets.
//!
//! Fixtures live under `data/` in this crate and are plain JSON in the same
//! camelCase wire form the library serialises.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every fixture in a subdirectory, in file-name order.
pub fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<T> {
    list_fixtures(subdir)
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}
