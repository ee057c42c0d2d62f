//! Tracing setup for the tool's own diagnostics (stderr plus optional file).

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::FILE_GUARD;

#[derive(Debug, Clone, Default)]
pub struct TracingOpts<'a> {
    pub level: &'a str,
    pub json: bool,
    pub file: Option<&'a str>,
    pub rotation: Option<&'a str>,
}

/// Install the global subscriber. `RUST_LOG` wins over `opts.level`.
///
/// Console output goes to stderr so stdout only carries command output.
/// The optional file layer always writes JSON lines through a non-blocking
/// writer whose guard lives in `FILE_GUARD` until exit.
pub fn init_tracing(opts: &TracingOpts<'_>) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(opts.level))
        .map_err(|e| eyre::eyre!("invalid log level {:?}: {e}", opts.level))?;

    let console_json = opts
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let console_text = (!opts.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let file_layer = match opts.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| eyre::eyre!("logging.file has no file name: {file}"))?;
            let appender = match opts.rotation.map(str::to_ascii_lowercase).as_deref() {
                Some("daily") => rolling::daily(dir, name),
                Some("hourly") => rolling::hourly(dir, name),
                _ => rolling::never(dir, name),
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().json().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_json)
        .with(console_text)
        .with(file_layer)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}
