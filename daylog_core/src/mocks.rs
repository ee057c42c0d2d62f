//! Test and helper mocks for daylog_core

use std::collections::HashSet;

use chrono::NaiveDate;
use daylog_traits::{Storage, StorageError};

pub use daylog_traits::FixedClock;

/// One call observed by `RecordingStorage`, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    Exists(String),
    LastWriteDate(String),
    Create(String),
    Append(String, String),
    Rename(String, String),
}

/// Storage operation selector for `RecordingStorage::fail_on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Exists,
    LastWriteDate,
    Create,
    Append,
    Rename,
}

/// Spy storage: records every call and answers from canned responses.
///
/// It does not track files. `exists` answers `true` for names registered via
/// `with_existing` (or for every name after `all_exist`), and
/// `last_write_date` always returns the configured date.
#[derive(Debug, Clone)]
pub struct RecordingStorage {
    calls: Vec<StorageCall>,
    existing: HashSet<String>,
    all_exist: bool,
    last_write: NaiveDate,
    failing: HashSet<Operation>,
}

impl Default for RecordingStorage {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            existing: HashSet::new(),
            all_exist: false,
            last_write: NaiveDate::MIN,
            failing: HashSet::new(),
        }
    }
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(mut self, name: impl Into<String>) -> Self {
        self.existing.insert(name.into());
        self
    }

    /// Report every name as existing.
    pub fn all_exist(mut self) -> Self {
        self.all_exist = true;
        self
    }

    pub fn with_last_write(mut self, date: NaiveDate) -> Self {
        self.last_write = date;
        self
    }

    /// Make every call of `op` fail with a "mock failure" error.
    pub fn fail_on(mut self, op: Operation) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn calls(&self) -> &[StorageCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&StorageCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Whether any recorded call names `file` (as source, target or subject).
    pub fn touched(&self, file: &str) -> bool {
        self.calls.iter().any(|c| match c {
            StorageCall::Exists(n)
            | StorageCall::LastWriteDate(n)
            | StorageCall::Create(n)
            | StorageCall::Append(n, _) => n == file,
            StorageCall::Rename(from, to) => from == file || to == file,
        })
    }

    fn record(&mut self, op: Operation, call: StorageCall) -> Result<(), StorageError> {
        self.calls.push(call);
        if self.failing.contains(&op) {
            return Err(Box::new(std::io::Error::other(format!(
                "mock failure: {op:?}"
            ))));
        }
        Ok(())
    }
}

impl Storage for RecordingStorage {
    fn exists(&mut self, name: &str) -> Result<bool, StorageError> {
        self.record(Operation::Exists, StorageCall::Exists(name.to_string()))?;
        Ok(self.all_exist || self.existing.contains(name))
    }

    fn last_write_date(&mut self, name: &str) -> Result<NaiveDate, StorageError> {
        self.record(
            Operation::LastWriteDate,
            StorageCall::LastWriteDate(name.to_string()),
        )?;
        Ok(self.last_write)
    }

    fn create(&mut self, name: &str) -> Result<(), StorageError> {
        self.record(Operation::Create, StorageCall::Create(name.to_string()))
    }

    fn append(&mut self, name: &str, text: &str) -> Result<(), StorageError> {
        self.record(
            Operation::Append,
            StorageCall::Append(name.to_string(), text.to_string()),
        )
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), StorageError> {
        self.record(
            Operation::Rename,
            StorageCall::Rename(from.to_string(), to.to_string()),
        )
    }
}
