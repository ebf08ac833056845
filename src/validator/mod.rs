//! Path-tracking error accumulation.
//!
//! A [`Validator`] pairs a cursor (the [`Path`] of the value currently being
//! checked) with the list of errors found so far. Entities describe their own
//! rules by implementing [`Validate`]; the validator walks into them, records
//! every violation against the right location, and never stops at the first
//! one.
//!
//! # Example
//!
//! ```rust
//! use docvalid::{validate, Validate, Validator};
//!
//! struct Account {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Validate for Account {
//!     fn validate(&self, v: &mut Validator) {
//!         v.check_string_length_min_max("name", &self.name, 3, 32);
//!         v.check_int_min("age", self.age, 18);
//!     }
//! }
//!
//! let errors = validate(&Account { name: "al".into(), age: 12 }).unwrap_err();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].code, "stringTooShort");
//! assert_eq!(errors[1].path.to_string(), "/age");
//! ```

use crate::path::{Path, Token};
use std::fmt;
use std::ops::{Deref, DerefMut};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

pub mod builder;
pub mod checks;
pub mod error;
pub mod object;

pub use builder::{ValidatorBuilder, DEFAULT_MAX_DEPTH};
pub use error::{codes, ValidationError, ValidationErrors};
pub use object::Validate;

/// Error accumulator for a single validation pass.
///
/// A validator is created fresh for one pass and consumed by
/// [`Validator::run`] or [`Validator::result`]. It is not meant to be shared
/// between documents.
#[derive(Debug)]
pub struct Validator {
    cursor: Path,
    base_depth: usize,
    max_depth: usize,
    errors: Vec<ValidationError>,
}

impl Validator {
    pub fn new() -> Self {
        ValidatorBuilder::new().build()
    }

    pub(crate) fn from_parts(root: Path, max_depth: usize) -> Self {
        Self {
            base_depth: root.len(),
            cursor: root,
            max_depth,
            errors: Vec::new(),
        }
    }

    /// Location of the value currently being validated.
    pub fn cursor(&self) -> &Path {
        &self.cursor
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn push(&mut self, token: Token) {
        let depth = self.cursor.len() - self.base_depth;
        if depth >= self.max_depth {
            panic!(
                "maximum validation depth ({}) exceeded at {}",
                self.max_depth, self.cursor
            );
        }
        self.cursor.push(token);
    }

    // Leaving a scope cuts the cursor back to the depth it was entered at,
    // so a scope can never pop more than it pushed.
    pub(crate) fn leave(&mut self, depth: usize) {
        self.cursor.truncate(depth);
    }

    /// Descend into `token` until the returned scope is dropped.
    ///
    /// The scope dereferences to the validator, so checks recorded through it
    /// land below `token`. Dropping the scope, including during unwinding,
    /// restores the cursor.
    ///
    /// Replacing the whole validator through the scope (`*scope =
    /// Validator::new()`) discards the errors collected so far; the cursor is
    /// still cut back to its depth on entry.
    pub fn enter(&mut self, token: impl Into<Token>) -> ChildScope<'_> {
        let depth = self.cursor.len();
        self.push(token.into());
        ChildScope {
            validator: self,
            depth,
        }
    }

    /// Run `f` with the cursor positioned at `token`.
    pub fn with_child<R>(
        &mut self,
        token: impl Into<Token>,
        f: impl FnOnce(&mut Validator) -> R,
    ) -> R {
        let mut scope = self.enter(token);
        f(&mut scope)
    }

    /// Record an error at the child `token` of the cursor.
    pub fn add_error(
        &mut self,
        token: impl Into<Token>,
        code: impl Into<String>,
        message: impl fmt::Display,
    ) {
        let error = ValidationError::new(self.cursor.child(token), code, message.to_string());
        trace!(path = %error.path, code = %error.code, "recorded validation error");
        self.errors.push(error);
    }

    /// Record an error unless `ok` holds, and return `ok`.
    pub fn check(
        &mut self,
        token: impl Into<Token>,
        ok: bool,
        code: impl Into<String>,
        message: impl fmt::Display,
    ) -> bool {
        if !ok {
            self.add_error(token, code, message);
        }
        ok
    }

    /// Validate `value` from the cursor and return the collected errors.
    pub fn run<T: Validate + ?Sized>(mut self, value: &T) -> Result<(), ValidationErrors> {
        debug!(root = %self.cursor, "starting validation pass");
        value.validate(&mut self);
        debug!(errors = self.errors.len(), "validation pass finished");
        self.result()
    }

    /// `Ok` if nothing was recorded, otherwise every error in discovery order.
    pub fn result(self) -> Result<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    /// Same outcome as [`Validator::result`], as an accumulating `Validation`.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<ValidationError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = self
            .errors
            .into_iter()
            .map(|error| Validation::fail(error))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor position held below a token; restored on drop.
pub struct ChildScope<'a> {
    validator: &'a mut Validator,
    depth: usize,
}

impl Deref for ChildScope<'_> {
    type Target = Validator;

    fn deref(&self) -> &Validator {
        self.validator
    }
}

impl DerefMut for ChildScope<'_> {
    fn deref_mut(&mut self) -> &mut Validator {
        self.validator
    }
}

impl Drop for ChildScope<'_> {
    fn drop(&mut self) {
        self.validator.leave(self.depth);
    }
}

/// Validate `value` with a fresh default validator.
///
/// Values that need no checks can implement [`Validate`] with an empty body.
pub fn validate<T: Validate + ?Sized>(value: &T) -> Result<(), ValidationErrors> {
    Validator::new().run(value)
}
