use daylog_traits::{Clock, Storage, StorageError};

use crate::naming::{WEEKEND_FILE_NAME, archive_file_name, is_stale, is_weekend, target_file_name};

pub trait Logger {
    fn log(&mut self, message: &str) -> Result<(), StorageError>;
}

/// Writes each message to the file for the current calendar day.
///
/// Weekdays get `log<YYYYMMDD>.txt`; Saturday and Sunday share
/// `weekend.txt`, which is archived to `weekend-<YYYYMMDD>.txt` on the first
/// weekend write after it has gone stale.
///
/// Holds no state between calls: every decision is driven by what the
/// clock and storage report at call time.
#[derive(Debug, Clone)]
pub struct FileLogger<S, C> {
    storage: S,
    clock: C,
}

impl<S: Storage, C: Clock> FileLogger<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    /// The file a `log` call made right now would write to.
    pub fn target_file_name(&self) -> String {
        target_file_name(self.clock.today())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_parts(self) -> (S, C) {
        (self.storage, self.clock)
    }

    /// Append `message` as one line to today's file, creating it first when
    /// it does not exist.
    ///
    /// On a weekend day a stale `weekend.txt` is renamed out of the way
    /// before the existence check. Storage errors are returned exactly as the
    /// backend raised them. A failed rename does not stop the write; its
    /// error is still what the call returns.
    pub fn log(&mut self, message: &str) -> Result<(), StorageError> {
        let today = self.clock.today();
        let target = target_file_name(today);
        tracing::debug!(%today, file = %target, "log target selected");

        let archive_err = if is_weekend(today) {
            self.archive_stale_weekend(today)?.err()
        } else {
            None
        };

        let write = self.write_line(&target, message);
        match (archive_err, write) {
            (None, write) => write,
            (Some(rename_err), Ok(())) => {
                tracing::warn!(
                    error = %rename_err,
                    "weekend archive failed; message written to current file"
                );
                Err(rename_err)
            }
            (Some(rename_err), Err(write_err)) => {
                tracing::warn!(error = %rename_err, "weekend archive failed");
                tracing::warn!(
                    error = %write_err,
                    file = %target,
                    "write after failed archive also failed"
                );
                Err(rename_err)
            }
        }
    }

    /// Outer error: the existence or last-write query failed. Inner error:
    /// the rename itself failed and the caller decides what to do with it.
    fn archive_stale_weekend(
        &mut self,
        today: chrono::NaiveDate,
    ) -> Result<Result<(), StorageError>, StorageError> {
        if !self.storage.exists(WEEKEND_FILE_NAME)? {
            return Ok(Ok(()));
        }
        let last_write = self.storage.last_write_date(WEEKEND_FILE_NAME)?;
        if !is_stale(today, last_write) {
            tracing::trace!(%last_write, "weekend file still current");
            return Ok(Ok(()));
        }
        let archived = archive_file_name(last_write);
        tracing::debug!(%last_write, to = %archived, "archiving stale weekend file");
        Ok(self.storage.rename(WEEKEND_FILE_NAME, &archived))
    }

    fn write_line(&mut self, target: &str, message: &str) -> Result<(), StorageError> {
        if !self.storage.exists(target)? {
            self.storage.create(target)?;
        }
        self.storage.append(target, message)
    }
}

impl<S: Storage, C: Clock> Logger for FileLogger<S, C> {
    fn log(&mut self, message: &str) -> Result<(), StorageError> {
        FileLogger::log(self, message)
    }
}
