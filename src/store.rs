//! Store Module
//!
//! The stateful facade that binds an ordered set of entries to one file.
//!
//! ## Responsibilities
//! - Create the backing file on request, never truncating it
//! - Reload entries from disk, discarding unsaved edits
//! - Look up, add, overwrite and remove entries in memory
//! - Save entries back to disk in insertion order

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::format::{Entry, PropertiesReader, PropertiesWriter};

/// A properties file and its in-memory entries
///
/// ## Consistency Model
///
/// - After a successful `reload`, the entries are exactly the file's content
/// - After a successful `save`, the file is exactly the entries
/// - In between, edits live only in memory
///
/// There is no locking and no conflict detection: if two stores share a
/// path, the last `save` wins. Wrap in [`crate::SharedStore`] to share one
/// store between threads.
#[derive(Debug)]
pub struct Store {
    /// Store configuration (path and output layout)
    config: Config,

    /// Entries in first-insertion order
    entries: Vec<Entry>,

    /// key → position in `entries`
    index: HashMap<String, usize>,
}

impl Store {
    /// Bind to a path with default settings
    ///
    /// Does not touch the filesystem; the file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(Config::builder().path(path).build())
    }

    /// Bind using the given config without touching the filesystem
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Bind and load
    ///
    /// On open:
    /// 1. Create the file if `create_if_missing` is set
    /// 2. Reload entries from disk
    pub fn open(config: Config) -> Result<Self> {
        let mut store = Self::with_config(config);
        if store.config.create_if_missing {
            store.create()?;
        }
        store.reload()?;
        Ok(store)
    }

    /// Open a path with default config (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().path(path).build())
    }

    // =========================================================================
    // File Lifecycle
    // =========================================================================

    /// True if the bound path currently exists
    pub fn exists(&self) -> bool {
        self.config.path.exists()
    }

    /// Create an empty file if none exists
    ///
    /// Returns `true` if the file was created, `false` if it was already
    /// there. Existing content is never truncated.
    pub fn create(&self) -> Result<bool> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.config.path)
        {
            Ok(_) => {
                info!(path = %self.config.path.display(), "created properties file");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace in-memory entries with the file's current content
    ///
    /// Fails with `FileNotFound` if the file does not exist (call `create`
    /// first). On any failure the in-memory entries are left untouched.
    pub fn reload(&mut self) -> Result<()> {
        let parsed = PropertiesReader::open(&self.config.path)?.read_all()?;
        let parsed_count = parsed.len();

        self.entries.clear();
        self.index.clear();
        for entry in parsed {
            self.add_entry(entry);
        }

        if self.entries.len() != parsed_count {
            debug!(
                duplicates = parsed_count - self.entries.len(),
                "duplicate keys collapsed, last value kept"
            );
        }
        debug!(
            path = %self.config.path.display(),
            entries = self.entries.len(),
            "reloaded properties"
        );
        Ok(())
    }

    /// Write every entry to the file, replacing its previous content
    pub fn save(&self) -> Result<()> {
        let mut writer = PropertiesWriter::create(&self.config.path, self.config.format.clone())?;
        writer.write_all(&self.entries)?;
        writer.commit()?;

        debug!(
            path = %self.config.path.display(),
            entries = self.entries.len(),
            "saved properties"
        );
        Ok(())
    }

    // =========================================================================
    // Entry Access
    // =========================================================================

    /// Get the entry for `key`, if present
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Get the entry for a key the caller knows is present
    ///
    /// Fails with `MissingKey` otherwise; use `get` when absence is normal.
    pub fn get_raw(&self, key: &str) -> Result<&Entry> {
        self.get(key)
            .ok_or_else(|| StoreError::MissingKey(key.to_string()))
    }

    /// True if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite a key without comments
    pub fn add_key(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.add_entry(Entry::new(key, value));
    }

    /// Insert or overwrite a key with the given comment lines
    pub fn add_key_with_comments<I, S>(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        comments: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(Entry::with_comments(key, value, comments));
    }

    /// Insert or overwrite an entry
    ///
    /// An existing key keeps its position; a new key is appended.
    /// Does not touch disk.
    pub fn add_entry(&mut self, entry: Entry) {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Remove a key, keeping the order of the others
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let pos = self.index.remove(key)?;
        let removed = self.entries.remove(pos);
        for entry in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(&entry.key) {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of entries held in memory
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in stored order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Entries in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// The bound file
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
