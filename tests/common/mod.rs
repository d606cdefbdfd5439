//! Shared test utilities for integration tests
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use numconvert::ledger::{HISTORY_KEY, HistoryLedger};
use numconvert::models::{ConversionRecord, Radix};
use numconvert::storage::{FileStore, KeyValueStore, MemoryStore};
use tempfile::TempDir;

/// Builder for conversion records with default values
pub struct RecordBuilder {
    from: String,
    to: String,
    from_base: Radix,
    to_base: Radix,
    time_millis: i64,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            from: "FF".to_string(),
            to: "11111111".to_string(),
            from_base: Radix::Hexadecimal,
            to_base: Radix::Binary,
            time_millis: 1_700_000_000_000,
        }
    }

    pub fn from(mut self, from: &str) -> Self {
        self.from = from.to_string();
        self
    }

    pub fn to(mut self, to: &str) -> Self {
        self.to = to.to_string();
        self
    }

    pub fn bases(mut self, from_base: Radix, to_base: Radix) -> Self {
        self.from_base = from_base;
        self.to_base = to_base;
        self
    }

    pub fn time_millis(mut self, millis: i64) -> Self {
        self.time_millis = millis;
        self
    }

    pub fn build(self) -> ConversionRecord {
        ConversionRecord {
            from: self.from,
            to: self.to,
            from_base: self.from_base,
            to_base: self.to_base,
            time: Utc.timestamp_millis_opt(self.time_millis).unwrap(),
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File store rooted in a fresh temp directory; the directory lives as
/// long as the struct
pub struct TempStore {
    pub dir: TempDir,
    pub store: FileStore,
}

pub fn temp_store() -> TempStore {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path()).expect("Failed to open file store");
    TempStore { dir, store }
}

/// In-memory store pre-populated with the given history
pub fn seeded_store(records: &[ConversionRecord]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let json = serde_json::to_string(records).expect("Failed to serialize records");
    store.set(HISTORY_KEY, &json).expect("Failed to seed store");
    store
}

/// Ledger holding `count` distinct sequential entries, persisted into the
/// given store
pub fn filled_ledger(count: usize, store: &mut dyn KeyValueStore) -> HistoryLedger {
    let mut ledger = HistoryLedger::new();
    for n in 0..count {
        let record = RecordBuilder::new()
            .from(&n.to_string())
            .to(&format!("{n:X}"))
            .bases(Radix::Decimal, Radix::Hexadecimal)
            .time_millis(1_700_000_000_000 + n as i64)
            .build();
        ledger.append(record, store).expect("Failed to append record");
    }
    ledger
}
