//! Persistence of extracted payloads as JSON artifacts
//!
//! Filenames derive deterministically from the source URL, so repeated
//! extractions of the same page overwrite the same artifact.

use crate::error::{ExtractorError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory artifacts are written to
pub const DEFAULT_OUTPUT_DIR: &str = "data";

const MAX_FILE_STEM_CHARS: usize = 100;

/// Writes extracted payloads as pretty-printed JSON files under one directory
pub struct JsonStore {
    dir: PathBuf,
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl JsonStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory artifacts are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the artifact for `url` is (or would be) written to
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(file_name_for(url))
    }

    /// Write `data` as pretty-printed UTF-8 JSON, overwriting any previous
    /// artifact for the same URL. Returns the written path.
    pub fn save(&self, data: &Value, url: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| ExtractorError::OutputFailed {
            path: self.dir.clone(),
            reason: e.to_string(),
        })?;

        let path = self.path_for(url);
        let json = serde_json::to_string_pretty(data).map_err(|e| ExtractorError::OutputFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        fs::write(&path, json).map_err(|e| ExtractorError::OutputFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        log::info!("saved payload to {}", path.display());
        Ok(path)
    }

    /// Read back the artifact previously saved for `url`
    pub fn load(&self, url: &str) -> Result<Value> {
        let path = self.path_for(url);
        let text = fs::read_to_string(&path).map_err(|e| ExtractorError::OutputFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| ExtractorError::OutputFailed {
            path,
            reason: e.to_string(),
        })
    }
}

/// Derive the artifact filename for a URL: scheme stripped, every
/// non-alphanumeric character replaced with `_`, capped at 100 characters,
/// `.json` appended.
pub fn file_name_for(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let stem: String = without_scheme
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(MAX_FILE_STEM_CHARS)
        .collect();

    format!("{}.json", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_name_strips_scheme_and_specials() {
        assert_eq!(file_name_for("https://x.com/y"), "x_com_y.json");
        assert_eq!(file_name_for("http://x.com/y?q=1"), "x_com_y_q_1.json");
    }

    #[test]
    fn test_file_name_without_scheme() {
        assert_eq!(file_name_for("x.com/y"), "x_com_y.json");
    }

    #[test]
    fn test_file_name_is_capped() {
        let url = format!("https://x.com/{}", "a".repeat(500));
        let name = file_name_for(&url);
        assert_eq!(name.len(), MAX_FILE_STEM_CHARS + ".json".len());
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_file_name_is_deterministic() {
        assert_eq!(file_name_for("https://x.com/y"), file_name_for("https://x.com/y"));
    }

    #[test]
    fn test_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let data = json!({"a": 1});
        let path = store.save(&data, "https://x.com/y").unwrap();

        assert_eq!(path, dir.path().join("x_com_y.json"));
        let read_back: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read_back, data);
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let path = store.save(&json!({"a": 1, "b": [2, 3]}), "https://x.com/y").unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("  \"a\": 1"));
    }

    #[test]
    fn test_repeated_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        store.save(&json!({"version": 1}), "https://x.com/y").unwrap();
        store.save(&json!({"version": 2}), "https://x.com/y").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(store.load("https://x.com/y").unwrap(), json!({"version": 2}));
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let err = store.load("https://x.com/never-saved").unwrap_err();
        assert!(matches!(err, ExtractorError::OutputFailed { .. }));
    }

    #[test]
    fn test_save_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("out").join("payloads"));

        let path = store.save(&json!(null), "https://x.com").unwrap();
        assert!(path.exists());
    }
}
