//! Shared Store
//!
//! Cloneable handle for using one `Store` from several threads.
//!
//! ## Concurrency: Single-Writer / Multiple-Reader
//!
//! - Lookups take the read lock and may run concurrently
//! - Mutations, reload and save take the write lock
//! - Lookups hand out clones, so no guard outlives a call
//!
//! This only coordinates threads of one process. Separate processes saving
//! the same file still race: last save wins.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StoreError};
use crate::format::Entry;
use crate::store::Store;

/// Thread-safe handle around a `Store`
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    /// Take ownership of a store
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Clone of the entry for `key`, if present
    pub fn get(&self, key: &str) -> Option<Entry> {
        self.inner.read().get(key).cloned()
    }

    /// Clone of the entry for `key`, or `MissingKey`
    pub fn get_raw(&self, key: &str) -> Result<Entry> {
        self.get(key)
            .ok_or_else(|| StoreError::MissingKey(key.to_string()))
    }

    /// Value for `key`, if present
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).map(|entry| entry.value.clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Insert or overwrite a key without comments
    pub fn add_key(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.write().add_key(key, value);
    }

    /// Insert or overwrite an entry
    pub fn add_entry(&self, entry: Entry) {
        self.inner.write().add_entry(entry);
    }

    /// Remove a key
    pub fn remove(&self, key: &str) -> Option<Entry> {
        self.inner.write().remove(key)
    }

    /// Create the backing file if missing
    pub fn create(&self) -> Result<bool> {
        self.inner.write().create()
    }

    /// Reload from disk (write lock: replaces all entries)
    pub fn reload(&self) -> Result<()> {
        self.inner.write().reload()
    }

    /// Save to disk
    ///
    /// Holds the write lock so no edit lands halfway through the file.
    pub fn save(&self) -> Result<()> {
        self.inner.write().save()
    }

    /// Read guard for several lookups under one lock
    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read()
    }

    /// Write guard for several edits under one lock
    pub fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write()
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}
