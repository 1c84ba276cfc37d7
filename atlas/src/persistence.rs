//! Synchronous key-value persistence that never fails to its callers.
//!
//! DESIGN
//! ======
//! [`StorageBackend`] is the fallible boundary (browser `localStorage`, or an
//! in-memory map). [`PersistenceStore`] wraps it and swallows every failure
//! (quota, disabled storage, backend exceptions) after logging it, so commit
//! notes and the quiz best score degrade to "not persisted" instead of
//! breaking the page.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage quota exceeded writing {key}")]
    QuotaExceeded { key: String },
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Fallible string key-value storage.
pub trait StorageBackend {
    /// # Errors
    /// Backend-specific read failure.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// # Errors
    /// Backend-specific write failure (quota, disabled storage).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// # Errors
    /// Backend-specific delete failure.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Never-failing facade over a [`StorageBackend`]. Cloning shares the backend.
#[derive(Clone)]
pub struct PersistenceStore {
    backend: Arc<dyn StorageBackend + Send + Sync>,
}

impl PersistenceStore {
    pub fn new(backend: impl StorageBackend + Send + Sync + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Fresh store over an empty [`MemoryBackend`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Read `key`; backend failures read as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("storage get {key} failed: {e}");
                None
            }
        }
    }

    /// Write `key`; backend failures are logged and ignored.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set_item(key, value) {
            log::warn!("storage set {key} failed: {e}");
        }
    }

    /// Delete `key`; backend failures are logged and ignored.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            log::warn!("storage remove {key} failed: {e}");
        }
    }
}

impl fmt::Debug for PersistenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceStore").finish_non_exhaustive()
    }
}

/// In-process backend with an optional byte quota over keys plus values.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self { items: Mutex::default(), quota_bytes: Some(quota_bytes) }
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(quota) = self.quota_bytes {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_owned() });
            }
        }
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

/// Backend for profiles where storage is disabled; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBackend;

impl StorageBackend for UnavailableBackend {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
