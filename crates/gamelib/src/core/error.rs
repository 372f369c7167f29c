use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for gamelib operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("config: {0}")]
    /// Configuration could not be parsed or is unusable.
    Config(String),
    #[error("backend: {0}")]
    /// Terminal or platform backend failure.
    Backend(String),
    #[error("invalid: {0}")]
    /// Invalid input error.
    Invalid(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
