//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait: a minimal string-keyed slot store,
//! the same shape as a browser's local storage. The favorites layer stores one
//! JSON document and one plain string in it, so nothing richer is needed.

use crate::domain::error::Result;

/// Abstraction over durable key-value backends.
///
/// Writes must be durable when `set` returns `Ok`: callers rely on a crash right
/// after a successful `set` not losing the value.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process memory only
///
/// # Examples
///
/// ```no_run
/// use rickdex::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/rickdex.json"))?;
/// storage.set("greeting", "wubba lubba dub dub")?;
/// assert_eq!(storage.get("greeting")?.as_deref(), Some("wubba lubba dub dub"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Reads a slot. Returns `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a slot. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal could not be made durable.
    fn remove(&mut self, key: &str) -> Result<()>;
}
