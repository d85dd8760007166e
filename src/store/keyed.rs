//! Keyed JSON storage.
//!
//! [`KeyedStore`] keeps one JSON document per key under a store directory
//! and mirrors parsed values in an in-memory cache so repeated reads do
//! not re-parse. All collection screens and the notification engine share
//! one store; the store is `Sync` so the low-stock ticker thread can use
//! it behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DockhandError, Result};

use super::events::ChangeBus;

/// Persistent string-keyed store with an in-memory cache.
pub struct KeyedStore {
    dir: PathBuf,
    cache: Mutex<HashMap<String, Value>>,
    bus: ChangeBus,
}

impl KeyedStore {
    /// Open a store rooted at `dir`.
    ///
    /// The directory is created lazily on first write, so opening a store
    /// against a missing directory is not an error.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
            bus: ChangeBus::new(),
        }
    }

    /// Get the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn cache_lock(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read the value stored under `key`, falling back to `default`.
    ///
    /// Absence, unreadable files, and shape mismatches all yield `default`.
    /// The fallback is never written back; the stored value stays whatever
    /// it was until the next explicit [`set`](Self::set).
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let mut cache = self.cache_lock();

        if let Some(value) = cache.get(key) {
            return match serde_json::from_value(value.clone()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("Stored value for '{}' has unexpected shape: {}", key, e);
                    default
                }
            };
        }

        let path = self.key_path(key);
        if !path.exists() {
            return default;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                return default;
            }
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to parse {:?}: {}", path, e);
                return default;
            }
        };

        cache.insert(key.to_string(), value.clone());
        match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored value for '{}' has unexpected shape: {}", key, e);
                default
            }
        }
    }

    /// Read the value stored under `key`, propagating failures.
    ///
    /// Returns `Ok(None)` when the key is absent. Unlike [`get`](Self::get),
    /// parse and shape failures surface as [`DockhandError::StoreParse`].
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let cached = self.cache_lock().get(key).cloned();
        let value = match cached {
            Some(value) => value,
            None => {
                let path = self.key_path(key);
                if !path.exists() {
                    return Ok(None);
                }
                let content = fs::read_to_string(&path)?;
                let value: Value =
                    serde_json::from_str(&content).map_err(|e| DockhandError::StoreParse {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
                self.cache_lock().insert(key.to_string(), value.clone());
                value
            }
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| DockhandError::StoreParse {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Write `value` under `key`, propagating failures.
    ///
    /// Uses the write-to-temp-then-rename pattern so the backing file is
    /// never partially written. The cache is only updated after the file
    /// write succeeds, so a failed write leaves in-memory state untouched.
    pub fn try_set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_value(value).map_err(|e| DockhandError::StoreSerialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let content = serde_json::to_string_pretty(&json).map_err(|e| {
            DockhandError::StoreSerialize {
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;

        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        self.cache_lock().insert(key.to_string(), json);
        self.bus.publish(key);
        Ok(())
    }

    /// Write `value` under `key`, swallowing failures.
    ///
    /// Serialization and I/O failures are logged and the prior state (on
    /// disk and in memory) is preserved. No error reaches the caller;
    /// callers that need the error use [`try_set`](Self::try_set).
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            tracing::warn!("Failed to store '{}': {}", key, e);
        }
    }

    /// Re-read `key` from disk, publishing a change event if it differs.
    ///
    /// This is how a long-running process picks up writes made by another
    /// process against the same store directory: the cached value is
    /// replaced and subscribers fire only when the stored document
    /// actually changed. Missing or unparseable files are logged and
    /// leave local state unchanged.
    pub fn refresh(&self, key: &str) {
        let path = self.key_path(key);
        if !path.exists() {
            return;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                return;
            }
        };
        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to parse {:?}: {}", path, e);
                return;
            }
        };

        let changed = {
            let mut cache = self.cache_lock();
            match cache.get(key) {
                Some(cached) if *cached == value => false,
                _ => {
                    cache.insert(key.to_string(), value);
                    true
                }
            }
        };
        if changed {
            self.bus.publish(key);
        }
    }

    /// Apply a change made by another process against the same store.
    ///
    /// `raw` is the serialized document now stored under `key`; the local
    /// cache entry is overwritten (last writer wins) and subscribers are
    /// notified. Unparseable input is logged and ignored, leaving local
    /// state unchanged.
    pub fn apply_external(&self, key: &str, raw: &str) {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => {
                self.cache_lock().insert(key.to_string(), value);
                self.bus.publish(key);
            }
            Err(e) => {
                tracing::warn!("Ignoring external change for '{}': {}", key, e);
            }
        }
    }

    /// Subscribe to changes for `key`.
    ///
    /// The callback fires after every successful [`set`](Self::set) and
    /// every applied external change. It receives the key that changed.
    pub fn subscribe(&self, key: &str, callback: impl Fn(&str) + Send + Sync + 'static) {
        self.bus.subscribe(key, callback);
    }
}
