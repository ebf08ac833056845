//! Docvalid: self-describing validation for decoded documents
//!
//! Docvalid sits between deserialization and business logic. A decoded value
//! describes its own rules by implementing [`Validate`]; a single pass walks
//! the value, and every violation is collected with the [`Path`] of the
//! offending location instead of stopping at the first one.
//!
//! # Core Concepts
//!
//! - **Path**: Immutable location inside a document, rendered like a JSON Pointer
//! - **Validator**: Accumulator pairing a path cursor with the errors found so far
//! - **Validate**: The single-method trait entities implement to check themselves
//! - **Decode**: JSON entry points that turn decoder type mismatches into the
//!   same error shape as validation failures
//!
//! # Example
//!
//! ```rust
//! use docvalid::{validate, Validate, Validator};
//!
//! struct Bar {
//!     integers: Vec<i64>,
//! }
//!
//! struct Foo {
//!     name: String,
//!     bars: Vec<Option<Bar>>,
//! }
//!
//! impl Validate for Foo {
//!     fn validate(&self, v: &mut Validator) {
//!         v.check_string_length_min("String", &self.name, 3);
//!         v.check_objects("Bars", &self.bars);
//!     }
//! }
//!
//! impl Validate for Bar {
//!     fn validate(&self, v: &mut Validator) {
//!         v.with_child("Integers", |v| {
//!             for (i, n) in self.integers.iter().enumerate() {
//!                 v.check_int_max(i, *n, 10);
//!             }
//!         });
//!     }
//! }
//!
//! let foo = Foo {
//!     name: "abcdef".to_string(),
//!     bars: vec![Some(Bar { integers: vec![4] }), Some(Bar { integers: vec![15] })],
//! };
//!
//! let errors = validate(&foo).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].path.to_string(), "/Bars/1/Integers/0");
//! assert_eq!(errors[0].code, "integerTooLarge");
//! ```

pub mod decode;
pub mod path;
pub mod validator;

// Re-export commonly used types
pub use path::{Path, PathError, Token};
pub use validator::{
    codes, validate, ChildScope, Validate, ValidationError, ValidationErrors, Validator,
    ValidatorBuilder,
};
