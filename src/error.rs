//! Crate-level error type.

use thiserror::Error;

use crate::client::ClientError;

/// Everything that can abort a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid --since timestamp: {0}")]
    InvalidSince(#[from] chrono::ParseError),

    #[error("Request timeout must be at least one second")]
    InvalidTimeout,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("No report message found with a title matching {pattern:?}")]
    NoBaselineReport { pattern: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
