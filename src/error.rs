//! Centralized error handling for autoclean.
//!
//! Library operations return [`Result`], whose error type [`CleanError`]
//! groups failures by where they came from:
//!
//! ```
//! use autoclean::error::CleanError;
//!
//! fn describe(err: &CleanError) -> &'static str {
//!     match err {
//!         CleanError::InvalidPath(_) => "input file is missing",
//!         CleanError::DataProcessing(_) => "table could not be parsed or filtered",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! The `From` conversions let `?` lift I/O, Polars and JSON errors, and
//! [`ResultExt`] attaches a human-readable prefix:
//!
//! ```no_run
//! use autoclean::error::{Result, ResultExt as _};
//!
//! fn read_settings(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).context("Failed to read settings")
//! }
//! ```

use std::fmt;

/// Main error type for autoclean operations.
#[derive(Debug)]
pub enum CleanError {
    /// I/O errors (opening, creating or writing files)
    Io(std::io::Error),

    /// Table errors reported by Polars (parsing, ragged input, filtering)
    DataProcessing(String),

    /// Settings file could not be read or parsed
    Config(String),

    /// Input file does not exist or is not a file
    InvalidPath(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for CleanError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for CleanError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for autoclean operations.
pub type Result<T> = std::result::Result<T, CleanError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and prefixed with `msg`.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and prefixed with the closure's output.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CleanError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(msg.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| prefix(f(), e.into()))
    }
}

// The variant survives so callers can still match on the failure category.
fn prefix(msg: String, err: CleanError) -> CleanError {
    match err {
        CleanError::Io(e) => CleanError::Io(std::io::Error::new(e.kind(), format!("{msg}: {e}"))),
        CleanError::DataProcessing(inner) => CleanError::DataProcessing(format!("{msg}: {inner}")),
        CleanError::Config(inner) => CleanError::Config(format!("{msg}: {inner}")),
        CleanError::InvalidPath(inner) => CleanError::InvalidPath(format!("{msg}: {inner}")),
        CleanError::Other(inner) => CleanError::Other(format!("{msg}: {inner}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanError::DataProcessing("column not found".to_owned());
        assert_eq!(err.to_string(), "Data processing error: column not found");
    }

    #[test]
    fn test_result_context_keeps_category() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file.txt",
        ));

        let err = result
            .context("Failed to read file")
            .expect_err("context must not swallow the error");
        assert!(matches!(err, CleanError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_json_error_is_config() {
        let err: CleanError = serde_json::from_str::<u32>("not json")
            .expect_err("invalid JSON")
            .into();
        assert!(matches!(err, CleanError::Config(_)));
    }
}
