use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiskError {
    #[error("log file not found: {0}")]
    NotFound(String),
    #[error("log file already exists: {0}")]
    AlreadyExists(String),
    #[error("invalid log file name: {0:?}")]
    InvalidName(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DiskError>;
