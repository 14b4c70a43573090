use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;

use super::paths::get_trailtrack_dir;

// ── Key-Value Store (~/.trailtrack/<key>.json) ───────────────────────────────
//
// The persisted profile set is a single JSON document under one well-known
// key.  The store is an explicit abstraction so the medium is swappable:
// `FileStore` for the real app, `MemoryStore` for tests.

/// Minimal persistence surface: whole-value reads and writes per key.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

/// One file per key under the app data directory.
pub struct FileStore {
    root: std::path::PathBuf,
}

impl FileStore {
    pub fn new(root: std::path::PathBuf) -> Self {
        Self { root }
    }

    /// Store rooted at `~/.trailtrack/`.
    pub fn default_location() -> Result<Self, String> {
        Ok(Self::new(get_trailtrack_dir()?))
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(|e| e.to_string())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
        }
        fs::write(&path, value).map_err(|e| e.to_string())
    }
}

/// In-memory store, used by tests in place of the on-disk one.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        let values = self.values.lock().map_err(|e| e.to_string())?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let mut values = self.values.lock().map_err(|e| e.to_string())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.read("profiles").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        store.write("profiles", "{\"a\":1}").unwrap();
        assert_eq!(store.read("profiles").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_file_store_overwrite() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.write("profiles", "{}").unwrap();
        store.write("profiles", "{\"b\":2}").unwrap();
        assert_eq!(store.read("profiles").unwrap().as_deref(), Some("{\"b\":2}"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.read("profiles").unwrap(), None);
        store.write("profiles", "{}").unwrap();
        assert_eq!(store.read("profiles").unwrap().as_deref(), Some("{}"));
    }
}
