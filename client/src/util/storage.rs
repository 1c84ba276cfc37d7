//! `localStorage` backend for the atlas persistence store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Commit notes and the quiz best score persist through
//! [`atlas::persistence::PersistenceStore`]. In the browser it wraps
//! [`LocalStorageBackend`]; anywhere else (native tests, storage disabled)
//! the page falls back to an in-memory map for the session.
//!
//! ERROR HANDLING
//! ==============
//! DOM exceptions are mapped onto [`StorageError`] by their `name`, so a full
//! quota surfaces as `QuotaExceeded` and the store can log it precisely.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use atlas::persistence::{PersistenceStore, StorageBackend, StorageError};

/// Backend over `window.localStorage`.
///
/// Holds no handle: the storage object is looked up per call so the backend
/// stays `Send + Sync` like every other atlas capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "csr")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(js_error("localStorage", &e)),
        }
    }
}

#[cfg(feature = "csr")]
fn js_error(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    use wasm_bindgen::JsCast;
    let name = err.dyn_ref::<web_sys::DomException>().map(web_sys::DomException::name).unwrap_or_default();
    storage_error(key, &name, &format!("{err:?}"))
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(key).map_err(|e| js_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.set_item(key, value).map_err(|e| js_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.remove_item(key).map_err(|e| js_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Map a DOM exception name onto the storage error taxonomy.
pub fn storage_error(key: &str, exception_name: &str, detail: &str) -> StorageError {
    match exception_name {
        "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StorageError::QuotaExceeded { key: key.to_owned() },
        "SecurityError" => StorageError::Unavailable,
        _ => StorageError::Backend(detail.to_owned()),
    }
}

/// Store for this page: `localStorage` when it answers, memory otherwise.
pub fn page_store() -> PersistenceStore {
    match LocalStorageBackend.get_item("") {
        Ok(_) => PersistenceStore::new(LocalStorageBackend),
        Err(e) => {
            log::warn!("[vt] persistent storage unavailable ({e}); notes and best score last for this session only");
            PersistenceStore::in_memory()
        }
    }
}
