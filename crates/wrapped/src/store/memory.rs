//! In-memory key-value store

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use serde_json::Value;

use super::KeyValueStore;

static STANDARD: LazyLock<Arc<MemoryStore>> = LazyLock::new(|| Arc::new(MemoryStore::new()));

/// Returns the process-wide store used by [`DefaultBacked::standard`].
///
/// [`DefaultBacked::standard`]: super::DefaultBacked::standard
pub fn standard_store() -> Arc<MemoryStore> {
    Arc::clone(&STANDARD)
}

/// In-memory implementation of [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `key` has an entry
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}
