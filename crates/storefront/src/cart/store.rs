//! Cart storage backends.
//!
//! The cart is persisted as a single serialized value under a fixed key.
//! [`CartStore`] is the explicit backend seam: an in-memory map for tests and
//! a file-per-key directory store for runtime. Backends hold opaque string
//! payloads; serialization is the `CartManager`'s job.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage poisoned: {0}")]
    Poisoned(String),
}

/// Key-value persistence for serialized carts.
///
/// Implementations must be safe to share across handlers.
pub trait CartStore: Send + Sync {
    /// Fetch the payload stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous payload.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the entry for `key`. Absence is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a directory-backed store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Temp file + rename; a partial write never replaces the old payload
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").expect("get"), None);

        store.put("cart", "[1,2,3]").expect("put");
        assert_eq!(store.get("cart").expect("get"), Some("[1,2,3]".to_string()));

        store.put("cart", "[]").expect("overwrite");
        assert_eq!(store.get("cart").expect("get"), Some("[]".to_string()));

        store.remove("cart").expect("remove");
        assert_eq!(store.get("cart").expect("get"), None);

        // Removing a missing key is not an error
        store.remove("cart").expect("remove absent");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("mobilya-store-test-{}", std::process::id()));
        let store = FileStore::open(&dir).expect("open");

        assert_eq!(store.get("cart").expect("get"), None);
        store.put("cart", "{\"a\":1}").expect("put");
        assert_eq!(
            store.get("cart").expect("get"),
            Some("{\"a\":1}".to_string())
        );

        store.remove("cart").expect("remove");
        assert_eq!(store.get("cart").expect("get"), None);
        store.remove("cart").expect("remove absent");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
