//! Key-value persistence boundary.
//!
//! The converter's persisted state is two string-keyed entries (`history`,
//! `theme`), so the storage interface is deliberately small. [`FileStore`]
//! maps each key to one file under the data directory; [`MemoryStore`]
//! backs tests and runs where nothing should touch disk.

pub mod file_store;

use std::collections::HashMap;

use anyhow::Result;

pub use file_store::FileStore;

/// String-keyed string-valued store, read at startup and written after
/// every ledger or theme mutation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
