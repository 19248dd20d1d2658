//! Tracing setup.
//!
//! The terminal belongs to the TUI, so logs only go to a file. Without a log
//! file no subscriber is installed and events are dropped.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CLOCK_LOG";

/// Builds the filter from [`LOG_ENV`], falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a plain-text subscriber appending to `log_file`, if any.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.display().to_string(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let err = init(Some(Path::new("/nonexistent-dir/clock.log"))).unwrap_err();
        assert!(matches!(err, Error::LogFile { .. }));
    }
}
