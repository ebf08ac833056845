//! Validation errors and error codes.

use crate::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-matchable error codes recorded by the built-in checks.
pub mod codes {
    pub const INTEGER_TOO_SMALL: &str = "integerTooSmall";
    pub const INTEGER_TOO_LARGE: &str = "integerTooLarge";
    pub const STRING_TOO_SHORT: &str = "stringTooShort";
    pub const STRING_TOO_LONG: &str = "stringTooLong";
    pub const MISSING_OR_EMPTY_STRING: &str = "missingOrEmptyString";
    pub const INVALID_STRING_FORMAT: &str = "invalidStringFormat";
    pub const INVALID_URI_FORMAT: &str = "invalidURIFormat";
    pub const MISSING_URI_SCHEME: &str = "missingURIScheme";
    pub const MISSING_VALUE: &str = "missingValue";
    pub const INVALID_VALUE_TYPE: &str = "invalidValueType";
}

/// A single violation found in a document.
///
/// `code` is stable and meant for programs; `message` is meant for people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "pointer")]
    pub path: Path,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: Path, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every violation found during one pass, in discovery order.
///
/// A pass that finds nothing produces no `ValidationErrors` at all, so a
/// value of this type always holds at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap a list of errors, or return `None` when there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl std::ops::Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid data:")?;
        for error in &self.0 {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
