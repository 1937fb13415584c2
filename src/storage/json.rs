//! JSON file-based storage backend.
//!
//! This module provides a human-readable slot store persisted as one JSON file.
//! Every write goes through an atomic replace (write-to-temp + rename) so a crash
//! never leaves a half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(log n) - the whole file is loaded into memory once
//! - **Write**: O(n) - the whole document is serialized on every `set`
//! - **Best for**: a handful of slots holding at most a few hundred KB

use crate::domain::error::{Result, RickdexError};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Unix timestamp of the last successful save.
    #[serde(default)]
    updated_at: Option<i64>,

    /// Slot values keyed by slot name.
    #[serde(default)]
    slots: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            updated_at: None,
            slots: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The entire dataset is kept in memory and persisted on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "updated_at": 1760745600,
///   "slots": {
///     "rick-and-morty-favorites": "[{\"id\":1,\"name\":\"Rick Sanchez\", ...}]",
///     "rick-and-morty-favorites-color": "green"
///   }
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file.
    data: StorageData,

    /// Set when the last save failed; retried on the next write and on drop.
    dirty: bool,
}

impl JsonStorage {
    /// Opens a JSON storage file, failing on unreadable or corrupt content.
    ///
    /// Parent directories are created automatically. A missing file is a valid
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid JSON
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        Self::ensure_parent(&file_path)?;

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(slot_count = data.slots.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Opens a JSON storage file, starting empty if the existing file is corrupt.
    ///
    /// The corrupt file is left untouched until the next successful write
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        Self::ensure_parent(&file_path)?;

        let data = if file_path.exists() {
            Self::load_from_file(&file_path).unwrap_or_else(|e| {
                tracing::warn!(path = ?file_path, error = %e, "discarding unreadable storage file");
                StorageData::default()
            })
        } else {
            StorageData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn ensure_parent(file_path: &Path) -> Result<()> {
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Loads storage data from a JSON file.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| RickdexError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            tracing::warn!(
                version = data.version,
                supported = FORMAT_VERSION,
                "storage file written by a newer version"
            );
        }

        tracing::debug!(version = data.version, slots = data.slots.len(), "loaded storage data");
        Ok(data)
    }

    /// Saves storage data to disk using an atomic replace.
    fn save_to_file(&mut self) -> Result<()> {
        self.data.updated_at = Some(chrono::Utc::now().timestamp());

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| RickdexError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        if let Err(e) = std::fs::write(&tmp_path, json)
            .and_then(|()| std::fs::rename(&tmp_path, &self.file_path))
        {
            self.dirty = true;
            return Err(e.into());
        }

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, len = value.len()).entered();

        self.data.slots.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove", key = %key).entered();

        if self.data.slots.remove(key).is_none() && !self.dirty {
            return Ok(());
        }
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    /// Retries a save that failed earlier.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("store.json")).unwrap();
        assert_eq!(storage.get("anything").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.set("color", "blue").unwrap();
            storage.set("favorites", "[]").unwrap();
        }

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("color").unwrap().as_deref(), Some("blue"));
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_writes_through_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut storage = JsonStorage::new(path.clone()).unwrap();

        storage.set("color", "green").unwrap();

        // Read the file while the first handle is still alive.
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\"color\": \"green\""));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn remove_deletes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.set("color", "green").unwrap();
        storage.remove("color").unwrap();
        storage.remove("never-written").unwrap();

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("color").unwrap(), None);
    }

    #[test]
    fn strict_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(JsonStorage::new(path), Err(RickdexError::Storage(_))));
    }

    #[test]
    fn lenient_open_starts_empty_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut storage = JsonStorage::open(path.clone()).unwrap();
        assert_eq!(storage.get("color").unwrap(), None);

        storage.set("color", "red").unwrap();
        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("color").unwrap().as_deref(), Some("red"));
    }
}
