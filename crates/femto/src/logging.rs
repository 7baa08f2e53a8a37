//! Diagnostics to a log file.
//!
//! The terminal belongs to the editor, so nothing is logged to stdout/stderr while it runs.
//! Logging is enabled by `--log-file` (or `FEMTO_LOG_FILE`); the filter comes from `FEMTO_LOG`,
//! e.g. `FEMTO_LOG=femto_core=trace` to see every scroll reconciliation.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "femto=info,femto_core=info";

/// Keeps the background writer alive; dropping it flushes pending records.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Install the file subscriber. Returns `None` when logging is disabled or setup fails.
pub fn init(log_file: Option<&Path>) -> Option<LoggingGuard> {
    let log_file = log_file?;
    let file_name = log_file.file_name()?;
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: Could not initialize file logging: {}", err);
        return None;
    }

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env("FEMTO_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_file = %log_file.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
