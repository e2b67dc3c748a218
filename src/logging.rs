//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.keytime64/logs/keytime64.jsonl)
//! - **Pretty to stderr** for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! let _guard = keytime64::logging::init();
//!
//! tracing::info!(event_type = "table", row = %id, "Row inserted");
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::APP_TITLE;

const LOG_FILE_NAME: &str = "keytime64.jsonl";
const DEFAULT_FILTER: &str = "info,gpui=warn";

/// Keeps the background log writer running. Hold it until `main` returns;
/// dropping it flushes the file.
pub struct LoggingGuard {
    _writer: Option<WorkerGuard>,
}

/// Install the file (JSONL) and stderr subscribers.
///
/// Falls back to stderr only when the log file cannot be opened.
pub fn init() -> LoggingGuard {
    let path = log_path();
    eprintln!("[{}] JSONL log: {}", APP_TITLE.to_uppercase(), path.display());

    let (file_layer, writer) = match open_log_file(&path) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            // One JSON object per line, RFC 3339 UTC timestamps, no source locations
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_file(false)
                .with_line_number(false)
                .with_thread_names(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with(file_layer)
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "logging_ready",
        log_path = %path.display(),
        "Logging initialized"
    );

    LoggingGuard { _writer: writer }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("[LOGGING] Cannot create {}: {}", dir.display(), e);
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| eprintln!("[LOGGING] Cannot open {}: {}", path.display(), e))
        .ok()
}

/// `~/.keytime64/logs/`, or a temp directory without a home
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".keytime64").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("keytime64-logs"))
}

pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

/// Categorised one-line log message.
///
/// Prefer tracing macros directly when there are structured fields to record.
pub fn log(category: &str, message: &str) {
    tracing::info!(category = category, "{}", message);
}

/// Debug-only categorised log; compiled out of release builds.
#[cfg(debug_assertions)]
pub fn log_debug(category: &str, message: &str) {
    tracing::debug!(category = category, "{}", message);
}

#[cfg(not(debug_assertions))]
pub fn log_debug(_category: &str, _message: &str) {}

/// Log a UI interaction with an optional detail string.
pub fn log_ui_event(component: &str, action: &str, details: Option<&str>) {
    tracing::info!(
        event_type = "ui",
        component = component,
        action = action,
        details = details.unwrap_or(""),
        "UI event"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_uses_jsonl_file_in_log_dir() {
        let path = log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        assert!(path.parent().is_some_and(|p| p.ends_with("logs")));
    }

    #[test]
    fn test_log_helpers_do_not_panic_without_subscriber() {
        log("TEST", "message");
        log_debug("TEST", "debug message");
        log_ui_event("table", "click", Some("row I001"));
    }
}
