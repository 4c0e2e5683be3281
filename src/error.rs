//! Error types for logtint

use thiserror::Error;

/// Result type alias for logtint operations
pub type Result<T> = std::result::Result<T, TintError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum TintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("keyword pattern is empty")]
    EmptyPattern,

    #[error("keyword pattern is not ASCII: {0:?}")]
    NonAsciiPattern(String),

    #[error("{0}")]
    Message(String),
}
