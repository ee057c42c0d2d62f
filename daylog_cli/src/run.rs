//! Command execution: clock selection, storage wiring and dry-run planning.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use daylog_config::{Config, parse_date};
use daylog_core::{DynFileLogger, FileLogger, StorageError};
use daylog_storage::{DiskError, DiskStorage};
use daylog_traits::{Clock, FixedClock, Storage, SystemClock};
use eyre::WrapErr;

/// `--date` beats `[clock] date`; neither means the system clock.
pub fn resolve_clock(
    flag: Option<&str>,
    cfg: &Config,
) -> eyre::Result<Box<dyn Clock + Send + Sync>> {
    let pinned = match flag {
        Some(s) => Some(parse_date(s).wrap_err("invalid --date")?),
        None => cfg.fixed_date().wrap_err("invalid clock.date in config")?,
    };
    let clock: Box<dyn Clock + Send + Sync> = match pinned {
        Some(date) => {
            tracing::debug!(%date, "using fixed clock");
            Box::new(FixedClock::new(date))
        }
        None => Box::new(SystemClock::new()),
    };
    Ok(clock)
}

/// Keep typed backend errors recognizable to `error_fmt` after boxing.
pub fn storage_report(err: StorageError) -> eyre::Report {
    match err.downcast::<DiskError>() {
        Ok(disk) => eyre::Report::new(*disk),
        Err(other) => eyre::eyre!(other),
    }
}

/// Write `message` to today's file under `dir`. Returns the file written.
pub fn run_log(
    dir: &Path,
    message: &str,
    clock: Box<dyn Clock + Send + Sync>,
) -> eyre::Result<String> {
    let mut logger = DynFileLogger::builder()
        .with_storage(DiskStorage::new(dir))
        .with_clock(clock)
        .try_build()?;
    let target = logger.target_file_name();
    logger
        .log(message)
        .map_err(storage_report)
        .wrap_err_with(|| format!("failed to log to {target}"))?;
    tracing::info!(file = %target, "message logged");
    Ok(target)
}

/// One step a real `log` call would take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    Create(String),
    Append(String, String),
    Rename(String, String),
}

impl std::fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannedAction::Create(name) => write!(f, "create {name}"),
            PlannedAction::Append(name, text) => write!(f, "append {name}: {text}"),
            PlannedAction::Rename(from, to) => write!(f, "rename {from} -> {to}"),
        }
    }
}

/// Reads from disk, never writes. Mutations are recorded and reflected in
/// later `exists` answers so the plan stays consistent with itself.
#[derive(Debug)]
pub struct PlanStorage<'a> {
    disk: &'a DiskStorage,
    created: HashSet<String>,
    removed: HashSet<String>,
    actions: Vec<PlannedAction>,
}

impl<'a> PlanStorage<'a> {
    pub fn new(disk: &'a DiskStorage) -> Self {
        Self {
            disk,
            created: HashSet::new(),
            removed: HashSet::new(),
            actions: Vec::new(),
        }
    }
}

impl Storage for PlanStorage<'_> {
    fn exists(&mut self, name: &str) -> Result<bool, StorageError> {
        if self.removed.contains(name) {
            return Ok(false);
        }
        Ok(self.created.contains(name) || self.disk.file_exists(name)?)
    }

    fn last_write_date(&mut self, name: &str) -> Result<NaiveDate, StorageError> {
        Ok(self.disk.file_last_write_date(name)?)
    }

    fn create(&mut self, name: &str) -> Result<(), StorageError> {
        self.removed.remove(name);
        self.created.insert(name.to_string());
        self.actions.push(PlannedAction::Create(name.to_string()));
        Ok(())
    }

    fn append(&mut self, name: &str, text: &str) -> Result<(), StorageError> {
        self.actions
            .push(PlannedAction::Append(name.to_string(), text.to_string()));
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), StorageError> {
        if self.exists(to)? {
            return Err(Box::new(DiskError::AlreadyExists(to.to_string())));
        }
        self.created.remove(from);
        self.removed.insert(from.to_string());
        self.removed.remove(to);
        self.created.insert(to.to_string());
        self.actions
            .push(PlannedAction::Rename(from.to_string(), to.to_string()));
        Ok(())
    }
}

/// Plan a `log` call under `dir` without modifying anything.
pub fn plan_log(
    dir: &Path,
    message: &str,
    clock: impl Clock,
) -> eyre::Result<Vec<PlannedAction>> {
    let disk = DiskStorage::new(dir);
    let mut logger = FileLogger::new(PlanStorage::new(&disk), clock);
    logger
        .log(message)
        .map_err(storage_report)
        .wrap_err("failed to plan log call")?;
    Ok(logger.into_parts().0.actions)
}
