pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use chrono::NaiveDate;

/// Error type surfaced by storage backends. Kept boxed so callers can
/// downcast to the concrete backend error.
pub type StorageError = Box<dyn std::error::Error + Send + Sync>;

/// Named text-file store the logger writes through.
///
/// File names are bare names (`weekend.txt`), never paths; backends decide
/// where they live.
pub trait Storage {
    fn exists(&mut self, name: &str) -> Result<bool, StorageError>;

    /// Calendar date of the last write to `name`. Callers gate this with
    /// `exists`; a missing file is a backend error.
    fn last_write_date(&mut self, name: &str) -> Result<NaiveDate, StorageError>;

    /// Create `name` as a new, empty file.
    fn create(&mut self, name: &str) -> Result<(), StorageError>;

    /// Append `text` to `name` as one line.
    fn append(&mut self, name: &str, text: &str) -> Result<(), StorageError>;

    fn rename(&mut self, from: &str, to: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn exists(&mut self, name: &str) -> Result<bool, StorageError> {
        (**self).exists(name)
    }
    fn last_write_date(&mut self, name: &str) -> Result<NaiveDate, StorageError> {
        (**self).last_write_date(name)
    }
    fn create(&mut self, name: &str) -> Result<(), StorageError> {
        (**self).create(name)
    }
    fn append(&mut self, name: &str, text: &str) -> Result<(), StorageError> {
        (**self).append(name, text)
    }
    fn rename(&mut self, from: &str, to: &str) -> Result<(), StorageError> {
        (**self).rename(from, to)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn exists(&mut self, name: &str) -> Result<bool, StorageError> {
        (**self).exists(name)
    }
    fn last_write_date(&mut self, name: &str) -> Result<NaiveDate, StorageError> {
        (**self).last_write_date(name)
    }
    fn create(&mut self, name: &str) -> Result<(), StorageError> {
        (**self).create(name)
    }
    fn append(&mut self, name: &str, text: &str) -> Result<(), StorageError> {
        (**self).append(name, text)
    }
    fn rename(&mut self, from: &str, to: &str) -> Result<(), StorageError> {
        (**self).rename(from, to)
    }
}
