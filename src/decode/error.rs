//! Decoding errors and the conversion of decoder failures into
//! validation errors.

use crate::path::{Path, Token};
use crate::validator::{codes, ValidationError, ValidationErrors};
use serde_path_to_error::Segment;
use thiserror::Error;
use tracing::debug;

/// Errors returned by the decode entry points
#[derive(Debug, Error)]
pub enum Error {
    /// The document decoded but is invalid, or a value had the wrong type
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// Low-level decoder failure: malformed input, I/O, trailing data, …
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Decode(_) => None,
        }
    }
}

/// Convert a decoder failure into the validation error shape.
///
/// Type and value mismatches become a single `invalidValueType` error
/// located where the decoder failed. Every other failure is returned as
/// [`Error::Decode`], untouched.
pub fn convert_decode_error(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    let path = decode_error_path(err.path());
    let inner = err.into_inner();

    match type_mismatch(&inner) {
        Some((value, expected)) => {
            debug!(path = %path, "decoder type mismatch converted to validation error");
            let error = ValidationError::new(
                path,
                codes::INVALID_VALUE_TYPE,
                format!("cannot decode {value} into value of type {expected}"),
            );
            Error::Invalid(ValidationErrors::single(error))
        }
        None => {
            debug!(error = %inner, "decoder failure passed through");
            Error::Decode(inner)
        }
    }
}

/// Location reported by the decoder, as a document path.
pub fn decode_error_path(path: &serde_path_to_error::Path) -> Path {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(Token::Index(*index)),
            Segment::Map { key } => Some(Token::Key(key.clone())),
            Segment::Enum { variant } => Some(Token::Key(variant.clone())),
            _ => None,
        })
        .collect()
}

// serde reports mismatches only through its message text:
// "invalid type: <unexpected>, expected <expected>".
fn type_mismatch(err: &serde_json::Error) -> Option<(String, String)> {
    if !err.is_data() {
        return None;
    }

    let rendered = err.to_string();
    let position = format!(" at line {} column {}", err.line(), err.column());
    let message = rendered.strip_suffix(&position).unwrap_or(&rendered);

    let rest = message
        .strip_prefix("invalid type: ")
        .or_else(|| message.strip_prefix("invalid value: "))?;
    let (value, expected) = rest.rsplit_once(", expected ")?;

    Some((value.to_string(), expected.to_string()))
}
