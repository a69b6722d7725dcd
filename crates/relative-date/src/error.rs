//! Error types for relative-date operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    #[error("Invalid time value")]
    InvalidTime,

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Invalid locale: {0}")]
    Locale(String),

    #[error("Invalid format string: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
