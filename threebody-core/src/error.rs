use thiserror::Error;

/// Errors raised while validating simulation inputs
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("number of stars must be at least 1, got {0}")]
    InvalidBodyCount(i64),

    #[error("number of stars must be an integer, got '{0}'")]
    ParseBodyCount(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Shorthand for `Error::InvalidConfig`
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
