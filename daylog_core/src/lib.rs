#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Day-based file logging core (storage-agnostic).
//!
//! All file access goes through `daylog_traits::Storage` and the current
//! date comes from `daylog_traits::Clock`, so the naming and archival policy
//! can be driven entirely by fakes.
//!
//! ## Policy
//!
//! - **Weekdays** write to `log<YYYYMMDD>.txt`
//! - **Weekends** share `weekend.txt`
//! - **Archival**: on a weekend call, a `weekend.txt` last written more than
//!   two days ago is renamed to `weekend-<last write YYYYMMDD>.txt` first

pub mod builder;
pub mod error;
pub mod logger;
pub mod mocks;
pub mod naming;

pub use builder::{DynFileLogger, FileLoggerBuilder};
pub use error::{BuildError, StorageError};
pub use logger::{FileLogger, Logger};
pub use naming::{
    STALE_AFTER_DAYS, WEEKEND_FILE_NAME, archive_file_name, days_between, is_stale, is_weekend,
    target_file_name, weekday_file_name,
};
