//! Error types for HAL operations.
//!
//! Parsing is lenient and lookups answer `Option`, so the only failure a
//! caller can observe is an attempt to change a locked [`Link`](crate::Link).

use thiserror::Error;

/// Error type for HAL operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Attempted to reassign or mutate an attribute of a locked link.
    #[error("link is locked: cannot modify `{field}`")]
    Immutable {
        /// Name of the attribute the caller tried to change.
        field: &'static str,
    },
}

/// Result type alias for HAL operations.
pub type Result<T> = std::result::Result<T, Error>;
