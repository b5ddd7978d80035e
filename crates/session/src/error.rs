//! Session errors.

use thiserror::Error;

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the search box handle.
#[derive(Debug, Error)]
pub enum Error {
    /// The event loop has stopped; the box no longer accepts input.
    #[error("search box is closed")]
    Closed,

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] lookahead_core::Error),
}
