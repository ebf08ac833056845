//! Reusable check primitives.
//!
//! Each check tests one value, records at most one error at the cursor child
//! `token` when the test fails, and returns whether it passed. Bounds are
//! inclusive. The `_min_max` variants skip the upper bound once the lower
//! bound has already failed, so a value never produces two errors.

use crate::path::Token;
use crate::validator::error::codes;
use crate::validator::Validator;
use regex::Regex;
use std::fmt::Display;
use url::{ParseError, Url};

impl Validator {
    pub fn check_int_min<N>(&mut self, token: impl Into<Token>, value: N, min: N) -> bool
    where
        N: PartialOrd + Display,
    {
        let ok = value >= min;
        self.check(
            token,
            ok,
            codes::INTEGER_TOO_SMALL,
            format_args!("integer must be greater or equal to {min}"),
        )
    }

    pub fn check_int_max<N>(&mut self, token: impl Into<Token>, value: N, max: N) -> bool
    where
        N: PartialOrd + Display,
    {
        let ok = value <= max;
        self.check(
            token,
            ok,
            codes::INTEGER_TOO_LARGE,
            format_args!("integer must be lower or equal to {max}"),
        )
    }

    pub fn check_int_min_max<N>(&mut self, token: impl Into<Token>, value: N, min: N, max: N) -> bool
    where
        N: PartialOrd + Display,
    {
        let token = token.into();
        if !self.check_int_min(token.clone(), &value, &min) {
            return false;
        }
        self.check_int_max(token, &value, &max)
    }

    /// Length is counted in characters, not bytes.
    pub fn check_string_length_min(&mut self, token: impl Into<Token>, s: &str, min: usize) -> bool {
        self.check(
            token,
            s.chars().count() >= min,
            codes::STRING_TOO_SHORT,
            format_args!("string length must be greater or equal to {min}"),
        )
    }

    pub fn check_string_length_max(&mut self, token: impl Into<Token>, s: &str, max: usize) -> bool {
        self.check(
            token,
            s.chars().count() <= max,
            codes::STRING_TOO_LONG,
            format_args!("string length must be lower or equal to {max}"),
        )
    }

    pub fn check_string_length_min_max(
        &mut self,
        token: impl Into<Token>,
        s: &str,
        min: usize,
        max: usize,
    ) -> bool {
        let token = token.into();
        if !self.check_string_length_min(token.clone(), s, min) {
            return false;
        }
        self.check_string_length_max(token, s, max)
    }

    pub fn check_string_not_empty(&mut self, token: impl Into<Token>, s: &str) -> bool {
        self.check(
            token,
            !s.is_empty(),
            codes::MISSING_OR_EMPTY_STRING,
            "missing or empty string",
        )
    }

    pub fn check_string_match(&mut self, token: impl Into<Token>, s: &str, re: &Regex) -> bool {
        self.check_string_match_with(
            token,
            s,
            re,
            codes::INVALID_STRING_FORMAT,
            format_args!(
                "string must match the following regular expression: {}",
                re.as_str()
            ),
        )
    }

    /// Pattern check reporting a caller-chosen code and message.
    pub fn check_string_match_with(
        &mut self,
        token: impl Into<Token>,
        s: &str,
        re: &Regex,
        code: impl Into<String>,
        message: impl Display,
    ) -> bool {
        self.check(token, re.is_match(s), code, message)
    }

    /// Accept absolute URIs only.
    ///
    /// The input is first split by URI-reference syntax: a scheme is
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` before the first `:`.
    /// References without a scheme are reported as such unless their first
    /// segment holds a `:`, which makes them malformed. Anything else must
    /// then parse as a URL; an empty authority (`http://`) is allowed.
    pub fn check_string_uri(&mut self, token: impl Into<Token>, s: &str) -> bool {
        match classify_uri(s) {
            UriKind::Absolute => true,
            UriKind::Relative => {
                self.add_error(token, codes::MISSING_URI_SCHEME, "uri must have a scheme");
                false
            }
            UriKind::Malformed => {
                self.add_error(token, codes::INVALID_URI_FORMAT, "string must be a valid uri");
                false
            }
        }
    }
}

enum UriKind {
    Absolute,
    Relative,
    Malformed,
}

fn classify_uri(s: &str) -> UriKind {
    for (i, c) in s.char_indices() {
        match c {
            c if c.is_ascii_alphabetic() => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => return UriKind::Malformed,
            ':' => return classify_absolute(s),
            _ => break,
        }
    }
    classify_relative(s)
}

fn classify_absolute(s: &str) -> UriKind {
    match Url::parse(s) {
        Ok(_) | Err(ParseError::EmptyHost) => UriKind::Absolute,
        Err(_) => UriKind::Malformed,
    }
}

fn classify_relative(s: &str) -> UriKind {
    let end = s
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(s.len());
    if s[..end].contains(':') {
        return UriKind::Malformed;
    }

    match Url::parse("reference-base:/") {
        Ok(base) if base.join(s).is_ok() => UriKind::Relative,
        _ => UriKind::Malformed,
    }
}
