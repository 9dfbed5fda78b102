use gloo::storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::errors::StorageError;
use crate::domain::logging::LogComponent;
use crate::domain::session::KeyValueStore;
use crate::log_warn;

/// `window.localStorage`, storing raw strings (no JSON encoding)
pub struct BrowserStorage {
    raw: web_sys::Storage,
}

impl BrowserStorage {
    /// Fails when the page has no usable local storage (e.g. blocked cookies)
    pub fn open() -> Result<Self, StorageError> {
        // `LocalStorage::raw` panics without a storage object, so probe first
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { raw: LocalStorage::raw() })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.raw
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{key}: {e:?}")))
    }

    fn remove(&self, key: &str) {
        let _ = self.raw.remove_item(key);
    }
}

/// Volatile store used when local storage is unavailable
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Local storage when present, otherwise an in-memory fallback
pub fn default_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log_warn!(LogComponent::Infrastructure("Storage"), "⚠️ {e}, session will not survive reloads");
            Box::new(InMemoryStore::new())
        }
    }
}
