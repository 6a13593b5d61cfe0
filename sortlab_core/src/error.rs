//! Error types for the sortlab core library.

use thiserror::Error;

/// Errors that can occur while generating or sorting data.
#[derive(Debug, Error)]
pub enum SortLabError {
    /// A negative element count was requested
    #[error("invalid element count {0}: must be zero or greater")]
    InvalidSize(i64),

    /// An unrecognized strategy name was given
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

impl SortLabError {
    /// Creates an unknown-strategy error.
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy(name.into())
    }
}
