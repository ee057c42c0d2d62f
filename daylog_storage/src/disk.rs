//! Filesystem-backed storage rooted at a single directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use daylog_traits::{Storage, StorageError};

use crate::error::{DiskError, Result};
use crate::util::{local_date, validate_name};

/// Log files live directly under `root`; names are never nested.
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    /// Only a missing file counts as absent; other metadata errors surface.
    pub fn file_exists(&self, name: &str) -> Result<bool> {
        match fs::metadata(self.path_for(name)?) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub fn file_last_write_date(&self, name: &str) -> Result<NaiveDate> {
        let path = self.path_for(name)?;
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DiskError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(local_date(meta.modified()?))
    }

    pub fn create_file(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        tracing::debug!(path = %path.display(), "created log file");
        Ok(())
    }

    pub fn append_line(&self, name: &str, text: &str) -> Result<()> {
        let path = self.path_for(name)?;
        let mut file = OpenOptions::new().append(true).open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiskError::NotFound(name.to_string())
            } else {
                e.into()
            }
        })?;
        writeln!(file, "{text}")?;
        tracing::debug!(path = %path.display(), bytes = text.len() + 1, "appended log line");
        Ok(())
    }

    /// Never replaces an existing `to`.
    pub fn rename_file(&self, from: &str, to: &str) -> Result<()> {
        let src = self.path_for(from)?;
        let dst = self.path_for(to)?;
        if dst.try_exists()? {
            return Err(DiskError::AlreadyExists(to.to_string()));
        }
        fs::rename(&src, &dst).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiskError::NotFound(from.to_string())
            } else {
                e.into()
            }
        })?;
        tracing::debug!(from = %src.display(), to = %dst.display(), "renamed log file");
        Ok(())
    }
}

impl Storage for DiskStorage {
    fn exists(&mut self, name: &str) -> std::result::Result<bool, StorageError> {
        Ok(self.file_exists(name)?)
    }

    fn last_write_date(&mut self, name: &str) -> std::result::Result<NaiveDate, StorageError> {
        Ok(self.file_last_write_date(name)?)
    }

    fn create(&mut self, name: &str) -> std::result::Result<(), StorageError> {
        Ok(self.create_file(name)?)
    }

    fn append(&mut self, name: &str, text: &str) -> std::result::Result<(), StorageError> {
        Ok(self.append_line(name, text)?)
    }

    fn rename(&mut self, from: &str, to: &str) -> std::result::Result<(), StorageError> {
        Ok(self.rename_file(from, to)?)
    }
}
