//! In-memory score store.

use rustc_hash::FxHashMap;

use super::{ScoreStore, StoreError};

/// A score store backed by a hash map. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    scores: FxHashMap<String, u32>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.scores.get(key).copied())
    }

    fn put(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.scores.insert(key.to_string(), value);
        Ok(())
    }
}
