//! Document locations.
//!
//! A [`Path`] identifies a value inside a decoded document tree as an ordered
//! list of [`Token`]s: object keys and sequence indices. Paths are immutable
//! values; [`Path::child`] and [`Path::parent`] return new paths and leave the
//! receiver untouched.
//!
//! Paths render like JSON Pointers (RFC 6901): the root is the empty string,
//! every token is prefixed with `/`, and `~` / `/` inside key tokens are
//! escaped as `~0` / `~1`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod error;

pub use error::PathError;

/// A single step into a document: an object key or a sequence index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// Object member name.
    Key(String),
    /// Zero-based position in a sequence.
    Index(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Token {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Token {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<&String> for Token {
    fn from(key: &String) -> Self {
        Self::Key(key.clone())
    }
}

impl From<usize> for Token {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Immutable location inside a document tree.
///
/// # Example
///
/// ```rust
/// use docvalid::Path;
///
/// let root = Path::root();
/// let path = root.child("Bars").child(1usize).child("Integers");
///
/// assert_eq!(root.to_string(), "");
/// assert_eq!(path.to_string(), "/Bars/1/Integers");
/// assert_eq!(path.parent().to_string(), "/Bars/1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    tokens: Vec<Token>,
}

impl Path {
    /// The empty path, locating the document itself.
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Return a new path with `token` appended.
    pub fn child(&self, token: impl Into<Token>) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend(self.tokens.iter().cloned());
        tokens.push(token.into());
        Self { tokens }
    }

    /// Return a new path with the last token removed.
    ///
    /// # Panics
    ///
    /// Panics when called on the root path. Asking for the parent of the
    /// document is a defect in the caller, not a property of the data.
    pub fn parent(&self) -> Self {
        match self.tokens.split_last() {
            Some((_, rest)) => Self {
                tokens: rest.to_vec(),
            },
            None => panic!("cannot take the parent of the root path"),
        }
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens, which is also the nesting depth of the location.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    // The validator cursor is the only owner allowed to mutate in place.
    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.tokens.truncate(len);
    }
}

impl From<Vec<Token>> for Path {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for Path {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    for c in key.chars() {
        match c {
            '~' => f.write_str("~0")?,
            '/' => f.write_str("~1")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str("/")?;
            match token {
                Token::Key(key) => write_escaped(f, key)?,
                Token::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

fn unescape(pointer: &str, start: usize, raw: &str) -> Result<String, PathError> {
    let mut key = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '~' {
            key.push(c);
            continue;
        }

        match chars.next() {
            Some((_, '0')) => key.push('~'),
            Some((_, '1')) => key.push('/'),
            _ => {
                return Err(PathError::InvalidEscape {
                    pointer: pointer.to_string(),
                    offset: start + offset,
                })
            }
        }
    }

    Ok(key)
}

impl FromStr for Path {
    type Err = PathError;

    /// Parse a rendered pointer. Every token comes back as [`Token::Key`]
    /// since the textual form does not distinguish indices from keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let Some(body) = s.strip_prefix('/') else {
            return Err(PathError::MissingLeadingSlash(s.to_string()));
        };

        let mut tokens = Vec::new();
        let mut start = 1;
        for raw in body.split('/') {
            tokens.push(Token::Key(unescape(s, start, raw)?));
            start += raw.len() + 1;
        }

        Ok(Self { tokens })
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pointer = String::deserialize(deserializer)?;
        pointer.parse().map_err(de::Error::custom)
    }
}
