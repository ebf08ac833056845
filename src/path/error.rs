//! Pointer parsing errors.

use thiserror::Error;

/// Errors that can occur when parsing a rendered path back into tokens
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("pointer must be empty or start with '/' (got {0:?})")]
    MissingLeadingSlash(String),

    #[error("invalid escape sequence at offset {offset} in pointer {pointer:?}")]
    InvalidEscape { pointer: String, offset: usize },
}
