//! Scalar codecs for the primitive ActivityStreams datatypes.
//!
//! Each datatype is a pure pair: `decode_*` takes a raw JSON value and either
//! yields the typed value or a [`CodecError`] without side effects, `encode_*`
//! turns the typed value back into JSON. Property resolution tries these in a
//! property's declared candidate order and treats a `CodecError` as "try the
//! next candidate".

pub mod date_time;
pub mod duration;
pub mod iri;
pub mod literal;

use serde_json::Value;
use thiserror::Error;

pub use date_time::{decode_date_time, encode_date_time};
pub use duration::{decode_duration, encode_duration};
pub use iri::{Iri, decode_iri, encode_iri};
pub use literal::{
    decode_float, decode_lang_string, decode_media_type, decode_non_negative_integer,
    decode_string, encode_float, encode_lang_string, encode_media_type,
    encode_non_negative_integer, encode_string,
};

/// Failure of a single scalar codec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("expected {expected}, found {found}")]
    UnexpectedJson {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid IRI `{value}`: {reason}")]
    InvalidIri {
        value: String,
        reason: url::ParseError,
    },

    #[error("invalid xsd:dateTime `{0}`")]
    InvalidDateTime(String),

    #[error("invalid xsd:duration `{0}`")]
    InvalidDuration(String),

    #[error("language map entry `{0}` is not a string")]
    InvalidLanguageEntry(String),

    #[error("non-finite float {0} has no JSON representation")]
    NonFiniteFloat(f64),
}

/// Name of the JSON kind of `raw`, for error messages.
pub fn json_kind(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn expect_str<'a>(raw: &'a Value, expected: &'static str) -> Result<&'a str, CodecError> {
    raw.as_str().ok_or(CodecError::UnexpectedJson {
        expected,
        found: json_kind(raw),
    })
}

/// Reads a value that may be either a bare value or an array of values.
///
/// Returns the elements in wire order; a bare value becomes a single element.
pub fn one_or_many(raw: &Value) -> Vec<Value> {
    match raw {
        Value::Array(values) => values.clone(),
        other => vec![other.clone()],
    }
}

/// Collapses encoded values following the singleton rule: nothing for zero
/// values, the bare value for one, an array otherwise.
pub fn collapse(mut values: Vec<Value>) -> Option<Value> {
    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => Some(Value::Array(values)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_or_many_accepts_bare_and_array() {
        assert_eq!(one_or_many(&json!("a")), vec![json!("a")]);
        assert_eq!(one_or_many(&json!(["a", "b"])), vec![json!("a"), json!("b")]);
        assert!(one_or_many(&json!([])).is_empty());
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse(vec![]), None);
        assert_eq!(collapse(vec![json!(1)]), Some(json!(1)));
        assert_eq!(collapse(vec![json!(1), json!(2)]), Some(json!([1, 2])));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!({})), "object");
        assert_eq!(json_kind(&json!(1.5)), "number");
    }
}
