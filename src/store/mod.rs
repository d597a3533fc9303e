//! Best-score persistence.
//!
//! Scores are stored as single integers under string keys, one value per
//! key. The trait is deliberately small: frontends only ever load a best
//! score at startup and save it back when a game improves it.
//!
//! Two implementations are provided: [`MemoryStore`] for tests and
//! ephemeral play, and [`FileStore`] for on-disk persistence.

use std::io;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A key-value store of best scores.
pub trait ScoreStore {
    /// Load the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or its stored value is
    /// not a valid integer.
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: u32) -> Result<(), StoreError>;
}

/// The store key for a square board's best score, e.g. `best-4x4`.
#[must_use]
pub fn best_score_key(side: usize) -> String {
    format!("best-{side}x{side}")
}
