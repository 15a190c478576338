//! The preference storage port.
//!
//! The page persists exactly one value (the theme). The browser backs this
//! with `localStorage` (`web::storage`); [`MemoryStore`] backs it in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::{Error, Result};

/// String key-value store for user preferences.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means no value was ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] when the backing store is unavailable.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] when the write is rejected (quota, privacy
    /// mode, storage disabled).
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Can be made to reject writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one entry.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store whose writes always fail.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage(format!("write to {key} rejected")));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
