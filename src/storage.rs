//! Durable key-value storage for user preferences.
//!
//! Mirrors the browser's origin-scoped local storage: string keys mapping to
//! string values. Stores are cheap `Clone` handles, so two service instances
//! built from clones of one store observe each other's writes, the same way a
//! page reload sees what the previous load persisted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a valid preference map: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-to-string preference store.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk.
///
/// The file is read on every access and rewritten on every change; a missing
/// file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Entries to start a write from. A corrupt file is replaced rather
    /// than blocking every later write.
    fn read_for_update(&self) -> Result<HashMap<String, String>, StorageError> {
        match self.read_all() {
            Err(StorageError::Serialization(e)) => {
                warn!("Discarding unreadable preferences in {}: {}", self.path.display(), e);
                Ok(HashMap::new())
            }
            result => result,
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        debug!("Wrote {} preference(s) to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_for_update()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Open the store configured by `path`: a file store, or a session-only
/// memory store when the path is empty.
///
/// An unreadable file is logged and still opened; reads fall back to the
/// default language and the next write replaces it.
pub fn open_store(path: &Path) -> Box<dyn PreferenceStore> {
    if path.as_os_str().is_empty() {
        debug!("No preference path configured, using in-memory store");
        return Box::new(MemoryStore::new());
    }

    let store = FileStore::new(path);
    if let Err(e) = store.read_all() {
        warn!("Preferences in {} are unreadable: {}", store.path().display(), e);
    }
    Box::new(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStore Tests ====================

    #[test]
    fn test_memory_store_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("Deadhand_lang").unwrap(), None);
    }

    #[test]
    fn test_memory_store_set_then_get() {
        let store = MemoryStore::new();
        store.set("Deadhand_lang", "es").unwrap();
        assert_eq!(store.get("Deadhand_lang").unwrap(), Some("es".to_string()));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap(), Some("v".to_string()));
        other.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    // ==================== FileStore Tests ====================

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("Deadhand_lang").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FileStore::new(&path).set("Deadhand_lang", "ja").unwrap();
        let reopened = FileStore::new(&path);

        assert_eq!(reopened.get("Deadhand_lang").unwrap(), Some("ja".to_string()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        store.set("theme", "dark").unwrap();
        store.set("Deadhand_lang", "de").unwrap();
        store.remove("Deadhand_lang").unwrap();

        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(store.get("Deadhand_lang").unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_read_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileStore::new(&path).get("Deadhand_lang");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_store_set_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);

        store.set("Deadhand_lang", "es").unwrap();
        assert_eq!(store.get("Deadhand_lang").unwrap(), Some("es".to_string()));
    }

    #[test]
    fn test_file_store_remove_on_corrupt_file_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{").unwrap();

        assert!(FileStore::new(&path).remove("Deadhand_lang").is_ok());
    }

    // ==================== open_store Tests ====================

    #[test]
    fn test_open_store_empty_path_is_memory() {
        let store = open_store(Path::new(""));
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_open_store_tolerates_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let store = open_store(&path);
        assert!(store.get("Deadhand_lang").is_err());
        store.set("Deadhand_lang", "ko").unwrap();
        assert_eq!(store.get("Deadhand_lang").unwrap(), Some("ko".to_string()));
    }
}
