//! File-backed score store.
//!
//! Each key maps to one file under the store's root directory, holding
//! the value as decimal text. Missing files and files that do not parse
//! both read back as `None`, so a damaged file degrades to "no best yet"
//! instead of an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StoreError};

/// A score store with one file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory holding the score files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        assert!(
            !key.is_empty() && !key.contains(['/', '\\']),
            "store key must be a plain file name"
        );
        self.root.join(key)
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(text) => Ok(text.trim().parse().ok()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        fs::write(self.key_path(key), value.to_string())?;
        Ok(())
    }
}
