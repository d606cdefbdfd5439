//! History ledger: capped, de-duplicating log of past conversions.
//!
//! The ledger owns the in-memory list and persists the full list to the
//! injected [`KeyValueStore`] after every mutation, newest entry first.
//! Suppression is against the current head only: the same conversion may
//! appear twice in the list, just never twice in a row.

use anyhow::{Context, Result};

use crate::models::ConversionRecord;
use crate::storage::KeyValueStore;

/// Storage key for the serialized history list
pub const HISTORY_KEY: &str = "history";

/// Oldest entries are evicted past this length
pub const MAX_ENTRIES: usize = 50;

#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: Vec<ConversionRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted list. A missing or corrupt `history` value yields
    /// an empty ledger; a fresh start beats refusing to run.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let entries = store
            .get(HISTORY_KEY)
            .ok()
            .flatten()
            .and_then(|json| match serde_json::from_str::<Vec<ConversionRecord>>(&json) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    eprintln!("Warning: discarding unreadable history: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self { entries }
    }

    pub fn entries(&self) -> &[ConversionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConversionRecord> {
        self.entries.get(index)
    }

    /// Insert at the head and persist. Returns false (and stays untouched)
    /// when the record matches the current head, so repeating the same
    /// conversion does not spam the log.
    pub fn append(
        &mut self,
        record: ConversionRecord,
        store: &mut dyn KeyValueStore,
    ) -> Result<bool> {
        if let Some(head) = self.entries.first()
            && head.same_conversion(&record)
        {
            return Ok(false);
        }

        self.entries.insert(0, record);
        self.entries.truncate(MAX_ENTRIES);
        self.persist(store)?;
        Ok(true)
    }

    /// Remove the entry at `index` (0 = most recent) and persist.
    /// An out-of-bounds index is a no-op returning false; the list is
    /// never touched on a miss.
    pub fn remove(&mut self, index: usize, store: &mut dyn KeyValueStore) -> Result<bool> {
        if index >= self.entries.len() {
            return Ok(false);
        }
        self.entries.remove(index);
        self.persist(store)?;
        Ok(true)
    }

    /// Drop every entry and persist the empty list
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.entries.clear();
        self.persist(store)
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(&self.entries).context("Failed to serialize history")?;
        store.set(HISTORY_KEY, &json).context("Failed to persist history")?;
        Ok(())
    }
}
