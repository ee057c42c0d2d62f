//! Human-readable error descriptions and structured JSON error formatting.

use daylog_core::error::BuildError;
use daylog_storage::DiskError;

/// Stable short name for the JSON `reason` field.
pub fn reason_name(err: &eyre::Report) -> &'static str {
    if let Some(de) = err.downcast_ref::<DiskError>() {
        return match de {
            DiskError::NotFound(_) => "NotFound",
            DiskError::AlreadyExists(_) => "AlreadyExists",
            DiskError::InvalidName(_) => "InvalidName",
            DiskError::Io(_) => "Io",
        };
    }
    if err.downcast_ref::<BuildError>().is_some() {
        return "Build";
    }
    let lower = format!("{err:#}").to_ascii_lowercase();
    if lower.contains("config") {
        return "Config";
    }
    if lower.contains("invalid date") {
        return "InvalidDate";
    }
    "Error"
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(de) = err.downcast_ref::<DiskError>() {
        return match de {
            DiskError::NotFound(name) => format!(
                "What happened: Log file {name} disappeared while it was being written.\nLikely causes: Another process renamed or removed it.\nHow to fix: Re-run the command; only one writer per directory is supported."
            ),
            DiskError::AlreadyExists(name) => format!(
                "What happened: Archive {name} already exists, so weekend.txt was left in place.\nLikely causes: The date was pinned with --date or [clock] date and the weekend file was archived under the same name before.\nHow to fix: Move {name} aside, then log again to archive weekend.txt."
            ),
            DiskError::InvalidName(name) => format!(
                "What happened: Refused to use {name:?} as a log file name.\nLikely causes: Internal naming bug.\nHow to fix: Report this with the date you logged on."
            ),
            DiskError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => format!(
                "What happened: Permission denied writing the log file ({e}).\nLikely causes: The current directory is read-only for this user.\nHow to fix: Run from a writable directory or fix its permissions."
            ),
            DiskError::Io(e) => format!(
                "What happened: File system error ({e}).\nLikely causes: Disk full, read-only mount or a file locked by another program.\nHow to fix: Check free space and permissions, then re-run."
            ),
        };
    }

    if let Some(BuildError::MissingStorage) = err.downcast_ref::<BuildError>() {
        return "What happened: No storage backend was configured.\nLikely causes: Internal wiring bug.\nHow to fix: Report this issue.".to_string();
    }

    // String-based heuristics for errors coming from config or argument parsing
    let msg = format!("{err:#}");
    let lower = msg.to_ascii_lowercase();

    if lower.contains("invalid date") {
        return format!(
            "What happened: Could not read the date ({msg}).\nHow to fix: Use YYYYMMDD or YYYY-MM-DD, e.g. --date 2021-06-07."
        );
    }

    if lower.contains("config") {
        return format!(
            "What happened: Configuration is invalid or unreadable ({msg}).\nHow to fix: Edit the TOML config and try again, or pass --config with a valid file."
        );
    }

    // Generic fallback
    format!(
        "Something went wrong.\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Runtime failures all exit with 1; clap usage errors exit with 2 on their own.
pub fn exit_code_for_error(_err: &eyre::Report) -> i32 {
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;
    json!({ "reason": reason_name(err), "message": humanize(err) }).to_string()
}
