//! Self-validating entities and nested object checks.

use crate::path::Token;
use crate::validator::error::codes;
use crate::validator::Validator;

/// Trait for values that describe their own validity.
///
/// `validate` runs with the validator's cursor already positioned at the
/// value itself: checks on fields use the field name as token, nested
/// entities go through [`Validator::require_object`] or
/// [`Validator::optional_object`].
///
/// # Example
///
/// ```rust
/// use docvalid::{validate, Validate, Validator};
///
/// struct Bar {
///     integers: Vec<i64>,
/// }
///
/// impl Validate for Bar {
///     fn validate(&self, v: &mut Validator) {
///         v.with_child("Integers", |v| {
///             for (i, n) in self.integers.iter().enumerate() {
///                 v.check_int_max(i, *n, 10);
///             }
///         });
///     }
/// }
///
/// struct Foo {
///     bar: Option<Bar>,
/// }
///
/// impl Validate for Foo {
///     fn validate(&self, v: &mut Validator) {
///         v.require_object("Bar", self.bar.as_ref());
///     }
/// }
///
/// let errors = validate(&Foo { bar: Some(Bar { integers: vec![1, 15] }) }).unwrap_err();
/// assert_eq!(errors[0].path.to_string(), "/Bar/Integers/1");
///
/// let errors = validate(&Foo { bar: None }).unwrap_err();
/// assert_eq!(errors[0].code, "missingValue");
/// ```
pub trait Validate {
    fn validate(&self, v: &mut Validator);
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self, v: &mut Validator) {
        (**self).validate(v);
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self, v: &mut Validator) {
        (**self).validate(v);
    }
}

/// An absent value has nothing to check.
impl<T: Validate> Validate for Option<T> {
    fn validate(&self, v: &mut Validator) {
        if let Some(inner) = self {
            inner.validate(v);
        }
    }
}

/// Elements are validated at their index, in order.
impl<T: Validate> Validate for [T] {
    fn validate(&self, v: &mut Validator) {
        for (i, item) in self.iter().enumerate() {
            v.with_child(i, |v| item.validate(v));
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, v: &mut Validator) {
        self.as_slice().validate(v);
    }
}

impl Validator {
    /// Validate a nested entity that must be present.
    ///
    /// An absent value records `missingValue` at `token` without recursing.
    /// A present value is validated below `token`. Returns `true` when no
    /// error was added.
    pub fn require_object<T: Validate + ?Sized>(
        &mut self,
        token: impl Into<Token>,
        value: Option<&T>,
    ) -> bool {
        match value {
            Some(value) => self.validate_object(token.into(), value),
            None => {
                self.add_error(token, codes::MISSING_VALUE, "missing value");
                false
            }
        }
    }

    /// Validate a nested entity that may be absent; absence is not an error.
    pub fn optional_object<T: Validate + ?Sized>(
        &mut self,
        token: impl Into<Token>,
        value: Option<&T>,
    ) -> bool {
        match value {
            Some(value) => self.validate_object(token.into(), value),
            None => true,
        }
    }

    /// Presence check for values with no rules of their own.
    pub fn check_value<T: ?Sized>(&mut self, token: impl Into<Token>, value: Option<&T>) -> bool {
        self.check(token, value.is_some(), codes::MISSING_VALUE, "missing value")
    }

    /// Require every element of a sequence of nested entities.
    pub fn check_objects<T: Validate>(
        &mut self,
        token: impl Into<Token>,
        values: &[Option<T>],
    ) -> bool {
        self.with_child(token, |v| {
            let mut ok = true;
            for (i, value) in values.iter().enumerate() {
                ok &= v.require_object(i, value.as_ref());
            }
            ok
        })
    }

    fn validate_object<T: Validate + ?Sized>(&mut self, token: Token, value: &T) -> bool {
        let before = self.error_count();
        self.with_child(token, |v| value.validate(v));
        self.error_count() == before
    }
}
