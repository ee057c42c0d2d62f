mod cli;
mod error_fmt;
mod logging;
mod run;

use clap::Parser;
use daylog_config::Config;
use daylog_traits::Clock;
use eyre::{Result, WrapErr};
use std::path::Path;

use crate::cli::{Cli, Commands, DEFAULT_CONFIG, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};
use crate::logging::{TracingOpts, init_tracing};

fn main() {
    let cli = Cli::parse();
    let cli_json = cli.json;
    if let Err(e) = real_main(cli) {
        // Falls back to the flag when the config never loaded.
        if JSON_MODE.get().copied().unwrap_or(cli_json) {
            eprintln!("{}", format_error_json(&e));
        } else {
            eprintln!("{}", humanize(&e));
        }
        std::process::exit(exit_code_for_error(&e));
    }
}

/// An explicit `--config` must exist; the default path is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cfg = match explicit {
        Some(path) => daylog_config::load_file(path)?,
        None if Path::new(DEFAULT_CONFIG).is_file() => {
            daylog_config::load_file(Path::new(DEFAULT_CONFIG))?
        }
        None => Config::default(),
    };
    cfg.validate().wrap_err("invalid configuration")?;
    Ok(cfg)
}

fn real_main(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref())?;

    let json = cli.json || cfg.logging.json;
    let _ = JSON_MODE.set(json);
    if let Some(level) = cli.log_level.as_deref() {
        daylog_config::check_level(level).wrap_err("invalid --log-level")?;
    }
    let level = cli
        .log_level
        .as_deref()
        .or(cfg.logging.level.as_deref())
        .unwrap_or("info");
    init_tracing(&TracingOpts {
        level,
        json,
        file: cfg.logging.file.as_deref(),
        rotation: cfg.logging.rotation.as_deref(),
    })?;

    match cli.cmd {
        Commands::Log {
            message,
            date,
            dry_run,
        } => {
            let message = message.join(" ");
            let clock = run::resolve_clock(date.as_deref(), &cfg)?;
            let dir = std::env::current_dir().wrap_err("cannot determine current directory")?;
            if dry_run {
                for action in run::plan_log(&dir, &message, clock)? {
                    println!("{action}");
                }
            } else {
                let target = run::run_log(&dir, &message, clock)?;
                println!("{target}");
            }
        }
        Commands::Target { date } => {
            let clock = run::resolve_clock(date.as_deref(), &cfg)?;
            println!("{}", daylog_core::target_file_name(clock.today()));
        }
    }
    Ok(())
}
