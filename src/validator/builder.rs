//! Builder API for configuring a validation pass.

use crate::path::Path;
use crate::validator::Validator;

/// Nesting depth past which a pass is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Builder for creating validators
///
/// # Example
///
/// ```rust
/// use docvalid::{Path, ValidatorBuilder};
///
/// let validator = ValidatorBuilder::new()
///     .max_depth(16)
///     .root(Path::root().child("items").child(3usize))
///     .build();
///
/// assert_eq!(validator.cursor().to_string(), "/items/3");
/// ```
#[derive(Clone, Debug)]
pub struct ValidatorBuilder {
    max_depth: usize,
    root: Path,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root: Path::root(),
        }
    }

    /// Set how many levels below the root a pass may descend.
    ///
    /// Descending further panics: documents that deep are either cyclic
    /// structures or hostile input the caller failed to bound.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Report every error relative to `root` instead of the empty path
    pub fn root(mut self, root: Path) -> Self {
        self.root = root;
        self
    }

    /// Build the validator
    pub fn build(self) -> Validator {
        Validator::from_parts(self.root, self.max_depth)
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
