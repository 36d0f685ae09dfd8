//! In-process key-value store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{KvError, KvStore};

/// MemoryStore is a [`KvStore`] held entirely in process memory.
///
/// Used by the test suite in place of a live Redis instance. Contents are
/// lost on shutdown.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| KvError::Command(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| KvError::Command(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }
}
