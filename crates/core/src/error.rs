//! Error type shared across the Lookahead crates.

use thiserror::Error;

/// Result alias using the shared [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by sources, caches and configuration loading.
///
/// Search failures (`Transport`, `Status`, `Malformed`) are recoverable: the
/// fetcher folds them into an empty result set instead of returning them to
/// the render path.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport failure: {reason}")]
    Transport {
        /// Underlying transport message.
        reason: String,
    },

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected JSON shape.
    #[error("malformed response: {reason}")]
    Malformed {
        /// What was wrong with the payload.
        reason: String,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which value and why.
        reason: String,
    },

    /// The local cache could not be read or written.
    #[error("cache error: {reason}")]
    Cache {
        /// Underlying cause.
        reason: String,
    },

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a search failure that should degrade to
    /// "no results" rather than surface to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Status { .. } | Error::Malformed { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Malformed {
            reason: e.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig {
            reason: e.to_string(),
        }
    }
}
