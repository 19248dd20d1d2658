//! Error types for the clock.

use std::fmt;
use std::io;

/// One of the three components of a [`ClockTime`](crate::clock_time::ClockTime).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The hours component.
    Hours,
    /// The minutes component.
    Minutes,
    /// The seconds component.
    Seconds,
}

impl Field {
    /// Exclusive upper bound of the component.
    pub fn limit(self) -> i64 {
        match self {
            Field::Hours => 24,
            Field::Minutes | Field::Seconds => 60,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Rejected duration input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("{field}: {text:?} is not a number")]
    NotANumber { field: Field, text: String },

    #[error("{field}: {value} is negative")]
    Negative { field: Field, value: i64 },

    #[error("{field}: {value} must be below {}", field.limit())]
    OutOfRange { field: Field, value: i64 },

    #[error("expected HH:MM:SS, MM:SS or SS, got {0:?}")]
    Malformed(String),
}

/// Process-level failures surfaced by the binary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Couldn't open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Logging already initialised: {0}")]
    Logging(String),

    #[error("Configuration was already installed")]
    ConfigInstalled,
}

/// Result alias for process-level operations.
pub type Result<T> = std::result::Result<T, Error>;
