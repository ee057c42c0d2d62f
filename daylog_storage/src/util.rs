use std::path::{Component, Path};
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate};

use crate::error::{DiskError, Result};

/// Reject anything that is not a single plain file name, so a storage root
/// can never be escaped through `..` or an absolute path.
pub fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(DiskError::InvalidName(name.to_string())),
    }
}

/// Local calendar date of a filesystem timestamp.
pub fn local_date(t: SystemTime) -> NaiveDate {
    DateTime::<Local>::from(t).date_naive()
}
