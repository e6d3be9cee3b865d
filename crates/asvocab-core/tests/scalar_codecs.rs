//! Scalar codec cases.

use asvocab_core::codec::{
    self, decode_date_time, decode_duration, decode_float, decode_iri,
    decode_non_negative_integer, encode_date_time, encode_duration,
};
use chrono::TimeDelta;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case("https://example.com/users/alice")]
#[case("http://localhost:8080/inbox")]
#[case("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66")]
#[case("https://example.com/a%20b?x=1#frag")]
#[case("HTTPS://Example.COM/Path")]
fn test_iri_text_is_preserved(#[case] text: &str) {
    let iri = decode_iri(&json!(text)).unwrap();
    assert_eq!(codec::encode_iri(&iri), json!(text));
}

#[rstest]
#[case(json!("relative/path"))]
#[case(json!(""))]
#[case(json!("no scheme here"))]
#[case(json!(42))]
#[case(json!({"href": "https://example.com"}))]
fn test_iri_rejects(#[case] raw: Value) {
    assert!(decode_iri(&raw).is_err());
}

#[rstest]
#[case("2024-05-01T09:00:00Z", "2024-05-01T09:00:00Z")]
#[case("2024-05-01T09:00:00+00:00", "2024-05-01T09:00:00Z")]
#[case("2024-05-01T09:00:00.5Z", "2024-05-01T09:00:00.500Z")]
#[case("2024-05-01T11:00:00+02:00", "2024-05-01T11:00:00+02:00")]
#[case("2024-05-01T09:00Z", "2024-05-01T09:00:00Z")]
#[case("2024-05-01T09:00-05:00", "2024-05-01T09:00:00-05:00")]
fn test_date_time_normalization(#[case] input: &str, #[case] expected: &str) {
    let value = decode_date_time(&json!(input)).unwrap();
    assert_eq!(encode_date_time(&value), json!(expected));
}

#[rstest]
#[case("2024-05-01")]
#[case("yesterday")]
#[case("2024-13-01T09:00:00Z")]
fn test_date_time_rejects(#[case] input: &str) {
    assert!(decode_date_time(&json!(input)).is_err());
}

#[rstest]
#[case("PT5S", TimeDelta::seconds(5))]
#[case("PT1H", TimeDelta::hours(1))]
#[case("P1D", TimeDelta::days(1))]
#[case("P1DT12H", TimeDelta::hours(36))]
#[case("PT0.25S", TimeDelta::milliseconds(250))]
#[case("-PT10M", TimeDelta::minutes(-10))]
#[case("P1Y", TimeDelta::days(365))]
fn test_duration_decode(#[case] input: &str, #[case] expected: TimeDelta) {
    assert_eq!(decode_duration(&json!(input)).unwrap(), expected);
}

#[rstest]
#[case(TimeDelta::zero(), "PT0S")]
#[case(TimeDelta::seconds(5), "PT5S")]
#[case(TimeDelta::hours(36), "P1DT12H")]
#[case(TimeDelta::milliseconds(1500), "PT1.5S")]
#[case(TimeDelta::minutes(-10), "-PT10M")]
fn test_duration_encode(#[case] value: TimeDelta, #[case] expected: &str) {
    assert_eq!(encode_duration(&value), json!(expected));
}

#[rstest]
#[case("P")]
#[case("PT")]
#[case("P1H")]
#[case("PT1D")]
#[case("P1S")]
#[case("1D")]
#[case("P1.5D")]
fn test_duration_rejects(#[case] input: &str) {
    assert!(decode_duration(&json!(input)).is_err());
}

#[rstest]
#[case(json!(0), Some(0.0))]
#[case(json!(-3.5), Some(-3.5))]
#[case(json!(1e10), Some(1e10))]
#[case(json!("3.5"), None)]
#[case(json!(null), None)]
fn test_float_decode(#[case] raw: Value, #[case] expected: Option<f64>) {
    assert_eq!(decode_float(&raw).ok(), expected);
}

#[rstest]
#[case(json!(0), Some(0))]
#[case(json!(640), Some(640))]
#[case(json!(-1), None)]
#[case(json!(2.5), None)]
#[case(json!("640"), None)]
fn test_non_negative_integer_decode(#[case] raw: Value, #[case] expected: Option<u64>) {
    assert_eq!(decode_non_negative_integer(&raw).ok(), expected);
}
