//! Logging setup for the autoclean binary
//!
//! Console output always goes to stderr so cleaned data or JSON printed on
//! stdout stays machine-readable. File logging is optional and rotates daily.
//!
//! ## Usage
//!
//! ```no_run
//! use autoclean::logging;
//!
//! // Initialize once at startup; pass a directory to also log to files
//! logging::init(None).expect("Failed to initialize logging");
//!
//! tracing::info!("Started");
//! ```
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber.

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Gets the default log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/autoclean/logs`
/// - macOS: `~/Library/Application Support/autoclean/logs`
/// - Linux: `~/.local/share/autoclean/logs`
///
/// # Errors
///
/// Returns error if the platform data directory is unknown.
pub fn default_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    Ok(base_dir.join("autoclean").join("logs"))
}

/// Initializes the logging system
///
/// Console output is filtered by `RUST_LOG`, defaulting to `info`. When
/// `log_dir` is given, an `autoclean.<date>.log` file is also written there,
/// rotated daily with the last 10 files kept.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the file appender
/// fails.
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(10)
                .filename_prefix("autoclean")
                .filename_suffix("log")
                .build(dir)
                .context("Failed to create log file appender")?;

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(dir) = log_dir {
        tracing::debug!("Logging initialized, log directory: {}", dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_dir() {
        if let Ok(log_dir) = default_log_dir() {
            assert!(log_dir.ends_with("autoclean/logs") || log_dir.ends_with("autoclean\\logs"));
        }
    }
}
