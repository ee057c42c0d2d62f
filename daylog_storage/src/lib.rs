#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Storage backends for the day-based file logger.
//!
//! - `DiskStorage`: real files under a root directory
//! - `MemoryStorage`: in-memory simulated backend (dry runs, tests)

pub mod disk;
pub mod error;
pub mod util;

pub use disk::DiskStorage;
pub use error::DiskError;

use chrono::NaiveDate;
use daylog_traits::{Storage, StorageError};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemFile {
    contents: String,
    last_write: NaiveDate,
}

/// Simulated storage that keeps every file in memory.
///
/// Writes stamp the file with the backend's own `today`, so the last-write
/// date is deterministic and independent of the wall clock.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    files: BTreeMap<String, MemFile>,
    today: NaiveDate,
}

impl MemoryStorage {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            files: BTreeMap::new(),
            today,
        }
    }

    /// Seed a file as if it had last been written on `last_write`.
    pub fn with_file(
        mut self,
        name: impl Into<String>,
        contents: impl Into<String>,
        last_write: NaiveDate,
    ) -> Self {
        self.files.insert(
            name.into(),
            MemFile {
                contents: contents.into(),
                last_write,
            },
        );
        self
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn contents(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|f| f.contents.as_str())
    }

    /// File names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    fn missing(name: &str) -> StorageError {
        Box::new(DiskError::NotFound(name.to_string()))
    }
}

impl Storage for MemoryStorage {
    fn exists(&mut self, name: &str) -> Result<bool, StorageError> {
        Ok(self.files.contains_key(name))
    }

    fn last_write_date(&mut self, name: &str) -> Result<NaiveDate, StorageError> {
        self.files
            .get(name)
            .map(|f| f.last_write)
            .ok_or_else(|| Self::missing(name))
    }

    fn create(&mut self, name: &str) -> Result<(), StorageError> {
        self.files.insert(
            name.to_string(),
            MemFile {
                contents: String::new(),
                last_write: self.today,
            },
        );
        Ok(())
    }

    fn append(&mut self, name: &str, text: &str) -> Result<(), StorageError> {
        let today = self.today;
        let file = self.files.get_mut(name).ok_or_else(|| Self::missing(name))?;
        file.contents.push_str(text);
        file.contents.push('\n');
        file.last_write = today;
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), StorageError> {
        if self.files.contains_key(to) {
            return Err(Box::new(DiskError::AlreadyExists(to.to_string())));
        }
        let file = self.files.remove(from).ok_or_else(|| Self::missing(from))?;
        self.files.insert(to.to_string(), file);
        Ok(())
    }
}
