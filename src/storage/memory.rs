//! In-memory storage backend.

use crate::domain::error::{Result, RickdexError};
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Volatile [`Storage`] backed by a `HashMap`.
///
/// Used by tests and by callers that do not want anything written to disk.
/// [`MemoryStorage::failing`] builds a store whose writes always fail, which is
/// how storage-error handling is exercised.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every `set` and `remove`.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            slots: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Store pre-populated with the given slots.
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: slots
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fail_writes: false,
        }
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(RickdexError::Storage("storage is read-only".to_string()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.slots.remove(key);
        Ok(())
    }
}
