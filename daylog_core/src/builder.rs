//! Builder for a boxed, dynamically dispatched `FileLogger`.
//!
//! Lets a caller pick the storage backend and clock at runtime. The clock
//! defaults to `SystemClock`; storage has no default.

use daylog_traits::{Clock, Storage, SystemClock};

use crate::error::{BuildError, Result};
use crate::logger::FileLogger;

pub type DynStorage = Box<dyn Storage + Send>;
pub type DynClock = Box<dyn Clock + Send + Sync>;

/// `FileLogger` over boxed collaborators.
pub type DynFileLogger = FileLogger<DynStorage, DynClock>;

#[derive(Default)]
pub struct FileLoggerBuilder {
    storage: Option<DynStorage>,
    clock: Option<DynClock>,
}

impl core::fmt::Debug for FileLoggerBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FileLoggerBuilder")
            .field("storage", &self.storage.is_some())
            .field("clock", &self.clock.is_some())
            .finish()
    }
}

impl FileLoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: impl Storage + Send + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Fails with `BuildError::MissingStorage` when no backend was given.
    pub fn try_build(self) -> Result<DynFileLogger> {
        let storage = self.storage.ok_or(BuildError::MissingStorage)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new()) as DynClock);
        Ok(FileLogger::new(storage, clock))
    }
}

impl DynFileLogger {
    pub fn builder() -> FileLoggerBuilder {
        FileLoggerBuilder::new()
    }
}
