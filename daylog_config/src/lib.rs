#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the `daylog` CLI.
//!
//! - `Config` is deserialized from TOML and validated separately.
//! - Every section is optional; an empty file is a valid config.
//! - Log file naming is fixed and deliberately not configurable here.
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
pub const ROTATIONS: [&str; 3] = ["never", "daily", "hourly"];

/// Diagnostics for the tool itself, not the messages it writes.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub level: Option<String>, // "info","debug"
    /// Emit JSON lines on stderr instead of pretty text.
    pub json: bool,
    pub file: Option<String>, // path to .log (JSON lines)
    /// Diagnostics file rotation: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ClockCfg {
    /// Pin "today" to this date (YYYY-MM-DD or YYYYMMDD) instead of the system clock.
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub clock: ClockCfg,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read and parse a config file. Validation is left to the caller.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {}: {}", path.display(), e))?;
    load_toml(&text).map_err(|e| eyre::eyre!("parse config {}: {}", path.display(), e))
}

/// Case-insensitive membership in `LEVELS`.
pub fn check_level(level: &str) -> eyre::Result<()> {
    if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        eyre::bail!("log level must be one of {:?}, got \"{}\"", LEVELS, level);
    }
    Ok(())
}

/// Accepts `YYYYMMDD` or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> eyre::Result<NaiveDate> {
    let s = s.trim();
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    eyre::bail!("invalid date \"{}\" (expected YYYYMMDD or YYYY-MM-DD)", s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if let Some(level) = &self.logging.level {
            check_level(level).map_err(|e| eyre::eyre!("logging.level: {}", e))?;
        }
        if let Some(rotation) = &self.logging.rotation {
            if !ROTATIONS.contains(&rotation.to_ascii_lowercase().as_str()) {
                eyre::bail!(
                    "logging.rotation must be one of {:?}, got \"{}\"",
                    ROTATIONS,
                    rotation
                );
            }
            if self.logging.file.is_none() {
                eyre::bail!("logging.rotation requires logging.file");
            }
        }
        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            eyre::bail!("logging.file must not be empty");
        }
        if let Some(date) = &self.clock.date {
            parse_date(date).map_err(|e| eyre::eyre!("clock.date: {}", e))?;
        }
        Ok(())
    }

    /// The pinned date, if one is configured and valid.
    pub fn fixed_date(&self) -> eyre::Result<Option<NaiveDate>> {
        self.clock.date.as_deref().map(parse_date).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_valid() {
        let cfg = load_toml("").unwrap();
        cfg.validate().unwrap();
        assert!(cfg.logging.level.is_none());
        assert!(!cfg.logging.json);
        assert!(cfg.fixed_date().unwrap().is_none());
    }

    #[test]
    fn parse_date_accepts_both_forms() {
        let want = NaiveDate::from_ymd_opt(2021, 6, 7).unwrap();
        assert_eq!(parse_date("20210607").unwrap(), want);
        assert_eq!(parse_date("2021-06-07").unwrap(), want);
        assert_eq!(parse_date(" 2021-06-07 ").unwrap(), want);
    }

    #[test]
    fn check_level_ignores_case_and_rejects_unknown() {
        check_level("Debug").unwrap();
        let err = check_level("loud").unwrap_err();
        assert!(format!("{err}").contains("must be one of"));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        for bad in ["", "2021", "20211307", "2021/06/07", "June 7"] {
            let err = parse_date(bad).unwrap_err();
            assert!(format!("{err}").contains("expected YYYYMMDD"), "{bad}: {err}");
        }
    }
}
