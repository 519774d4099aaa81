//! Key-value persistence behind a small trait so session and preference code
//! can run against browser `localStorage` or an in-memory map.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` looks up `window.localStorage` on every call and is only
//! live under `hydrate`. During SSR and in native tests it reads nothing and
//! silently accepts writes, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure talking to the underlying store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected write for key {key}")]
    WriteRejected { key: String },
    #[error("could not encode value for key {key}: {reason}")]
    Encode { key: String, reason: String },
}

/// Minimal string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Raw value for `key`, `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the store is missing or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the store is missing.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns a `StorageError` on encode failure or when the store rejects the write.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode {
        key: key.to_owned(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

/// Outcome of reading a JSON value that may be missing or corrupt.
#[derive(Debug, PartialEq, Eq)]
pub enum JsonRead<T> {
    Missing,
    Malformed(String),
    Value(T),
}

/// Read and decode the JSON value under `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> JsonRead<T> {
    let Some(raw) = store.get(key) else {
        return JsonRead::Missing;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => JsonRead::Value(value),
        Err(e) => JsonRead::Malformed(e.to_string()),
    }
}

/// `window.localStorage`, resolved lazily per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-process store. Used in tests and anywhere a throwaway store is enough.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
