//! `xsd:dateTime` values.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use super::{CodecError, expect_str};

// Peers occasionally drop the seconds field.
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M%:z";

pub fn decode_date_time(raw: &Value) -> Result<DateTime<FixedOffset>, CodecError> {
    let text = expect_str(raw, "xsd:dateTime")?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| parse_without_seconds(text))
        .ok_or_else(|| CodecError::InvalidDateTime(text.to_string()))
}

fn parse_without_seconds(text: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = match text.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => text.to_string(),
    };
    DateTime::parse_from_str(&normalized, WITHOUT_SECONDS).ok()
}

/// RFC 3339, `Z` for UTC, fractional seconds only when present.
pub fn encode_date_time(value: &DateTime<FixedOffset>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use serde_json::json;

    #[test]
    fn test_decode_rfc3339() {
        let value = decode_date_time(&json!("2024-03-01T12:30:45+02:00")).unwrap();
        let expected = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 12, 30, 45)
            .unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_decode_without_seconds() {
        let value = decode_date_time(&json!("2024-03-01T12:30Z")).unwrap();
        assert_eq!(value.minute(), 30);
        assert_eq!(value.second(), 0);
    }

    #[test]
    fn test_encode_uses_z_for_utc() {
        let value = decode_date_time(&json!("2024-03-01T12:30:45+00:00")).unwrap();
        assert_eq!(encode_date_time(&value), json!("2024-03-01T12:30:45Z"));
    }

    #[test]
    fn test_encode_keeps_fractional_seconds() {
        let value = decode_date_time(&json!("2024-03-01T12:30:45.250Z")).unwrap();
        assert_eq!(encode_date_time(&value), json!("2024-03-01T12:30:45.250Z"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(
            decode_date_time(&json!("yesterday")),
            Err(CodecError::InvalidDateTime("yesterday".to_string()))
        );
    }
}
