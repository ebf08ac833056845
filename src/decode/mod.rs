//! Decode JSON documents and validate them in one step.
//!
//! Decoding fails fast: the first decoder failure is returned and nothing is
//! validated. Only a fully decoded document is handed to
//! [`validate`](crate::validate), so a caller never sees decoder and
//! validation errors mixed in one result.
//!
//! [`from_slice`] and [`from_str`] expect exactly one document. [`from_reader`]
//! and [`from_deserializer`] stop after one value and leave the rest of the
//! input alone, so a stream of documents can be read one at a time.
//!
//! # Example
//!
//! ```rust
//! use docvalid::{decode, Validate, Validator};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Link {
//!     href: String,
//! }
//!
//! impl Validate for Link {
//!     fn validate(&self, v: &mut Validator) {
//!         v.check_string_uri("href", &self.href);
//!     }
//! }
//!
//! let link: Link = decode::from_str(r#"{"href": "https://example.com"}"#).unwrap();
//! assert_eq!(link.href, "https://example.com");
//!
//! let err = decode::from_str::<Link>(r#"{"href": 42}"#).unwrap_err();
//! let errors = err.validation_errors().unwrap();
//! assert_eq!(errors[0].code, "invalidValueType");
//! assert_eq!(errors[0].path.to_string(), "/href");
//! ```

use crate::validator::{validate, Validate};
use serde::de::{Deserialize, DeserializeOwned};
use std::io;

pub mod error;

pub use error::{convert_decode_error, decode_error_path, Error};

pub fn from_slice<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Validate,
{
    let mut de = serde_json::Deserializer::from_slice(bytes);
    decode_and_validate(&mut de)
}

pub fn from_str<T>(s: &str) -> Result<T, Error>
where
    T: DeserializeOwned + Validate,
{
    let mut de = serde_json::Deserializer::from_str(s);
    decode_and_validate(&mut de)
}

/// Decode one document from any reader. The reader is not buffered here,
/// and nothing past the end of the first value is consumed.
pub fn from_reader<R, T>(reader: R) -> Result<T, Error>
where
    R: io::Read,
    T: DeserializeOwned + Validate,
{
    let mut de = serde_json::Deserializer::from_reader(reader);
    from_deserializer(&mut de)
}

/// Decode and validate the next document of a deserializer the caller owns.
///
/// Trailing input is left in `de`; call [`serde_json::Deserializer::end`] to
/// require that none remains.
pub fn from_deserializer<'de, R, T>(de: &mut serde_json::Deserializer<R>) -> Result<T, Error>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de> + Validate,
{
    let value: T = decode(de)?;
    validate(&value)?;
    Ok(value)
}

fn decode_and_validate<'de, R, T>(de: &mut serde_json::Deserializer<R>) -> Result<T, Error>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de> + Validate,
{
    let value: T = decode(de)?;
    de.end()?;
    validate(&value)?;
    Ok(value)
}

fn decode<'de, R, T>(de: &mut serde_json::Deserializer<R>) -> Result<T, Error>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de>,
{
    serde_path_to_error::deserialize(&mut *de).map_err(convert_decode_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validator;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Foo {
        #[serde(rename = "String")]
        string: String,
        #[serde(rename = "Bars", default)]
        bars: Vec<Option<Bar>>,
    }

    #[derive(Debug, Deserialize)]
    struct Bar {
        #[serde(rename = "Integers", default)]
        integers: Vec<i64>,
    }

    impl Validate for Foo {
        fn validate(&self, v: &mut Validator) {
            v.check_string_length_min("String", &self.string, 3);
            v.check_objects("Bars", &self.bars);
        }
    }

    impl Validate for Bar {
        fn validate(&self, v: &mut Validator) {
            v.with_child("Integers", |v| {
                for (i, n) in self.integers.iter().enumerate() {
                    v.check_int_max(i, *n, 10);
                }
            });
        }
    }

    fn single_error(err: Error) -> crate::ValidationError {
        let errors = err.validation_errors().expect("expected validation errors");
        assert_eq!(errors.len(), 1);
        errors[0].clone()
    }

    #[test]
    fn valid_document_decodes() {
        let foo: Foo = from_str(r#"{"String": "abcdef", "Bars": [{"Integers": [1, 2]}]}"#).unwrap();
        assert_eq!(foo.string, "abcdef");
        assert_eq!(foo.bars.len(), 1);
    }

    #[test]
    fn wrong_top_level_type_is_reported_at_root() {
        let error = single_error(from_str::<Foo>("42").unwrap_err());

        assert_eq!(error.code, "invalidValueType");
        assert!(error.path.is_root());
        assert!(error
            .message
            .starts_with("cannot decode integer `42` into value of type "));
    }

    #[test]
    fn wrong_field_type_is_reported_at_field() {
        let error = single_error(from_str::<Foo>(r#"{"String": 42}"#).unwrap_err());

        assert_eq!(error.code, "invalidValueType");
        assert_eq!(error.path.to_string(), "/String");
        assert_eq!(
            error.message,
            "cannot decode integer `42` into value of type a string"
        );
    }

    #[test]
    fn nested_type_error_carries_indices() {
        let input = r#"{"String": "abcdef", "Bars": [{"Integers": [1, "x"]}]}"#;
        let error = single_error(from_slice::<Foo>(input.as_bytes()).unwrap_err());

        assert_eq!(error.path.to_string(), "/Bars/0/Integers/1");
    }

    #[test]
    fn syntax_errors_pass_through() {
        let err = from_str::<Foo>(r#"{"String": "#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.validation_errors().is_none());
    }

    #[test]
    fn trailing_data_passes_through() {
        let err = from_str::<Foo>(r#"{"String": "abcdef"} {}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn missing_field_passes_through() {
        let err = from_str::<Foo>(r#"{"Bars": []}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn validation_runs_after_decoding() {
        let input = r#"{"String": "ab", "Bars": [{"Integers": [4]}, null]}"#;
        let err = from_reader::<_, Foo>(input.as_bytes()).unwrap_err();
        let errors = err.validation_errors().unwrap();

        let found: Vec<(String, &str)> = errors
            .iter()
            .map(|e| (e.path.to_string(), e.code.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("/String".to_string(), "stringTooShort"),
                ("/Bars/1".to_string(), "missingValue"),
            ]
        );
    }

    #[derive(Debug, Deserialize)]
    struct Counter {
        #[serde(rename = "N")]
        n: u8,
    }

    impl Validate for Counter {
        fn validate(&self, v: &mut Validator) {
            v.check_int_max("N", self.n, 10);
        }
    }

    #[test]
    fn out_of_range_number_is_a_type_error() {
        let err = from_str::<Counter>(r#"{"N": 300}"#).unwrap_err();
        let error = single_error(err);

        assert_eq!(error.code, "invalidValueType");
        assert_eq!(error.path.to_string(), "/N");
        assert_eq!(
            error.message,
            "cannot decode integer `300` into value of type u8"
        );
    }

    #[test]
    fn reader_stops_after_first_document() {
        let mut input: &[u8] = b"{\"N\": 1}\n{\"N\": 2}\n";

        let first: Counter = from_reader(&mut input).unwrap();
        let second: Counter = from_reader(&mut input).unwrap();

        assert_eq!((first.n, second.n), (1, 2));
    }

    #[test]
    fn deserializer_yields_documents_one_at_a_time() {
        let input = b"{\"N\": 1}\n{\"N\": 12}\n{\"N\": 3}";
        let mut de = serde_json::Deserializer::from_slice(input);

        let first: Counter = from_deserializer(&mut de).unwrap();
        let second: Result<Counter, _> = from_deserializer(&mut de);
        let third: Counter = from_deserializer(&mut de).unwrap();
        de.end().unwrap();

        assert_eq!(first.n, 1);
        assert_eq!(single_error(second.unwrap_err()).path.to_string(), "/N");
        assert_eq!(third.n, 3);
    }

    #[test]
    fn decode_error_path_follows_keys_and_indices() {
        let mut de = serde_json::Deserializer::from_str(r#"{"a": [true, {"b": 1}]}"#);
        let result: Result<std::collections::BTreeMap<String, Vec<Option<bool>>>, _> =
            serde_path_to_error::deserialize(&mut de);
        let err = result.unwrap_err();

        assert_eq!(decode_error_path(err.path()).to_string(), "/a/1");
    }
}
