//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "daylog.toml";

#[derive(Parser, Debug)]
#[command(name = "daylog", version, about = "Append messages to a per-day log file")]
pub struct Cli {
    /// Path to config TOML (default: ./daylog.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log diagnostics and errors as JSON lines instead of pretty text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); overrides the config
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a message to today's log file in the current directory
    Log {
        /// Message text; multiple words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
        /// Print the storage actions that would run, without touching any file
        #[arg(long, action = ArgAction::SetTrue)]
        dry_run: bool,
    },
    /// Print the file name a log call would write to
    Target {
        /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}
