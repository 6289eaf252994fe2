//! Key-value boundary for persisted selections.
//!
//! The [`SelectionStorage`] trait abstracts the host's string store (a
//! browser's local storage, a directory of files, ...). Values are opaque
//! strings; the selection store decides how to encode them.

use std::collections::HashMap;

use thiserror::Error;

/// Failure reported by a [`SelectionStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the value for `key` failed.
    #[error("failed to read storage key {key}: {source}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the value for `key` failed.
    #[error("failed to write storage key {key}: {source}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend error.
        #[source]
        source: std::io::Error,
    },
}

/// String store keyed by fixed names.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use placepicker_core::{SelectionStorage, StorageError};
///
/// #[derive(Default)]
/// struct MapStorage(HashMap<String, String>);
///
/// impl SelectionStorage for MapStorage {
///     fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
///         Ok(self.0.get(key).cloned())
///     }
///
///     fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
///         self.0.insert(key.to_owned(), value.to_owned());
///         Ok(())
///     }
/// }
///
/// let mut storage = MapStorage::default();
/// storage.set("selectedPlaces", "[]")?;
/// assert_eq!(storage.get("selectedPlaces")?.as_deref(), Some("[]"));
/// # Ok::<(), StorageError>(())
/// ```
pub trait SelectionStorage {
    /// Return the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: SelectionStorage + ?Sized> SelectionStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process [`SelectionStorage`] backed by a hash map.
///
/// Nothing survives the process; useful for embedding and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create a storage holding a single entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            values: HashMap::from([(key.into(), value.into())]),
        }
    }
}

impl SelectionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
