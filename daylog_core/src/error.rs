use thiserror::Error;

pub use daylog_traits::StorageError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("missing storage backend")]
    MissingStorage,
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
