//! Literal datatypes: `xsd:string`, `xsd:float`, `xsd:nonNegativeInteger`,
//! `rdf:langString` and MIME media types.

use serde_json::{Map, Number, Value};

use super::{CodecError, expect_str, json_kind};
use crate::vocab::LanguageMap;

pub fn decode_string(raw: &Value) -> Result<String, CodecError> {
    expect_str(raw, "xsd:string").map(str::to_string)
}

pub fn encode_string(value: &str) -> Value {
    Value::String(value.to_string())
}

pub fn decode_media_type(raw: &Value) -> Result<String, CodecError> {
    expect_str(raw, "MIME media type").map(str::to_string)
}

pub fn encode_media_type(value: &str) -> Value {
    Value::String(value.to_string())
}

pub fn decode_float(raw: &Value) -> Result<f64, CodecError> {
    raw.as_f64().ok_or(CodecError::UnexpectedJson {
        expected: "xsd:float",
        found: json_kind(raw),
    })
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole numbers are written as JSON integers, so `100` stays `100` and does
/// not come back as `100.0`.
pub fn encode_float(value: f64) -> Result<Value, CodecError> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return Ok(Value::Number(Number::from(value as i64)));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or(CodecError::NonFiniteFloat(value))
}

pub fn decode_non_negative_integer(raw: &Value) -> Result<u64, CodecError> {
    raw.as_u64().ok_or(CodecError::UnexpectedJson {
        expected: "xsd:nonNegativeInteger",
        found: json_kind(raw),
    })
}

pub fn encode_non_negative_integer(value: u64) -> Value {
    Value::Number(value.into())
}

/// An object mapping language tags to strings, e.g. `{"en": "Hi", "fr": "Salut"}`.
pub fn decode_lang_string(raw: &Value) -> Result<LanguageMap, CodecError> {
    let Value::Object(entries) = raw else {
        return Err(CodecError::UnexpectedJson {
            expected: "rdf:langString map",
            found: json_kind(raw),
        });
    };
    let mut map = LanguageMap::new();
    for (tag, value) in entries {
        let Value::String(text) = value else {
            return Err(CodecError::InvalidLanguageEntry(tag.clone()));
        };
        map.set(tag.clone(), text.clone());
    }
    Ok(map)
}

pub fn encode_lang_string(map: &LanguageMap) -> Value {
    let entries: Map<String, Value> = map
        .iter()
        .map(|(tag, text)| (tag.to_string(), Value::String(text.to_string())))
        .collect();
    Value::Object(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(decode_float(&json!(42)).unwrap(), 42.0);
        assert_eq!(decode_float(&json!(1.25)).unwrap(), 1.25);
        assert!(decode_float(&json!("1.25")).is_err());
    }

    #[test]
    fn test_float_whole_numbers_encode_as_integers() {
        assert_eq!(encode_float(100.0).unwrap(), json!(100));
        assert_eq!(encode_float(-3.0).unwrap(), json!(-3));
        assert_eq!(encode_float(12.5).unwrap(), json!(12.5));
        assert_eq!(encode_float(1e300).unwrap(), json!(1e300));
    }

    #[test]
    fn test_float_rejects_non_finite_on_encode() {
        assert!(matches!(
            encode_float(f64::NAN),
            Err(CodecError::NonFiniteFloat(_))
        ));
    }

    #[test]
    fn test_non_negative_integer() {
        assert_eq!(decode_non_negative_integer(&json!(7)).unwrap(), 7);
        assert!(decode_non_negative_integer(&json!(-1)).is_err());
        assert!(decode_non_negative_integer(&json!(1.5)).is_err());
        assert_eq!(encode_non_negative_integer(7), json!(7));
    }

    #[test]
    fn test_lang_string() {
        let map = decode_lang_string(&json!({"en": "Hello", "fr": "Bonjour"})).unwrap();
        assert_eq!(map.get("fr"), "Bonjour");
        assert_eq!(
            encode_lang_string(&map),
            json!({"en": "Hello", "fr": "Bonjour"})
        );
    }

    #[test]
    fn test_lang_string_rejects_non_string_entries() {
        assert_eq!(
            decode_lang_string(&json!({"en": 3})),
            Err(CodecError::InvalidLanguageEntry("en".to_string()))
        );
        assert!(decode_lang_string(&json!("Hello")).is_err());
    }
}
