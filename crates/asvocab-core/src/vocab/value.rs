//! Polymorphic property values.
//!
//! Decoding follows the property's candidate list in declared order and stops at
//! the first match:
//!
//! 1. A JSON object, when the property has typed candidates, is matched by its
//!    `type` discriminator. For each typed candidate in order, every type name is
//!    looked up in the registry; the first candidate with any hit wins and the
//!    object is decoded recursively into that node. An object without `type`
//!    cannot match and is kept as [`PropertyValue::Unknown`].
//! 2. Anything else non-null is offered to each literal candidate in order.
//! 3. Whatever is left is kept as [`PropertyValue::Unknown`], verbatim.
//!
//! Only a failing nested decode is an error.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::language_map::LanguageMap;
use super::node::{Node, VocabType, VocabularyNode};
use super::registry::TypeRegistry;
use super::shape::Shape;
use super::slot::PropertySpec;
use crate::codec::{self, Iri};
use crate::error::{Error, Result};

/// A single property value: one populated candidate, or raw JSON that matched
/// none of the property's candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A typed object; collections land here too.
    Object(Box<Node>),
    Link(Box<Node>),
    Iri(Iri),
    String(String),
    LangString(LanguageMap),
    Float(f64),
    NonNegativeInteger(u64),
    DateTime(DateTime<FixedOffset>),
    Duration(TimeDelta),
    MediaType(String),
    /// Re-emitted exactly as received.
    Unknown(Value),
}

impl PropertyValue {
    pub fn object(node: Node) -> Self {
        PropertyValue::Object(Box::new(node))
    }

    pub fn link(node: Node) -> Self {
        PropertyValue::Link(Box::new(node))
    }

    pub fn string(value: impl Into<String>) -> Self {
        PropertyValue::String(value.into())
    }

    pub fn media_type(value: impl Into<String>) -> Self {
        PropertyValue::MediaType(value.into())
    }

    pub fn unknown(raw: Value) -> Self {
        PropertyValue::Unknown(raw)
    }

    pub fn decode(raw: &Value, spec: &PropertySpec, registry: &dyn TypeRegistry) -> Result<Self> {
        if let Value::Object(map) = raw {
            if spec.candidates.iter().any(|shape| shape.is_typed()) {
                return match map.get("type") {
                    Some(discriminator) => decode_typed(map, discriminator, spec, registry),
                    None => {
                        debug!(property = spec.name, "object without `type`, keeping as unknown");
                        Ok(PropertyValue::Unknown(raw.clone()))
                    }
                };
            }
        }

        if !raw.is_null() {
            for shape in spec.candidates.iter().filter(|shape| !shape.is_typed()) {
                if let Ok(value) = decode_literal(raw, *shape) {
                    return Ok(value);
                }
            }
        }

        debug!(property = spec.name, "value matched no candidate shape, keeping as unknown");
        Ok(PropertyValue::Unknown(raw.clone()))
    }

    pub fn encode(&self) -> Result<Value> {
        Ok(match self {
            PropertyValue::Object(node) | PropertyValue::Link(node) => {
                Value::Object(node.encode()?)
            }
            PropertyValue::Iri(iri) => codec::encode_iri(iri),
            PropertyValue::String(text) => codec::encode_string(text),
            PropertyValue::LangString(map) => codec::encode_lang_string(map),
            PropertyValue::Float(value) => {
                codec::encode_float(*value).map_err(|source| Error::Encode {
                    shape: Shape::Float,
                    source,
                })?
            }
            PropertyValue::NonNegativeInteger(value) => codec::encode_non_negative_integer(*value),
            PropertyValue::DateTime(value) => codec::encode_date_time(value),
            PropertyValue::Duration(value) => codec::encode_duration(value),
            PropertyValue::MediaType(text) => codec::encode_media_type(text),
            PropertyValue::Unknown(raw) => raw.clone(),
        })
    }

    /// Whether this value is an instance of `shape`.
    ///
    /// A collection node matches both `Object` and `Collection`.
    pub fn matches(&self, shape: Shape) -> bool {
        match (self, shape) {
            (PropertyValue::Object(_), Shape::Object) => true,
            (PropertyValue::Object(node), Shape::Collection) => node.vocab_type().is_collection(),
            (PropertyValue::Link(_), Shape::Link) => true,
            (PropertyValue::Iri(_), Shape::Iri) => true,
            (PropertyValue::String(_), Shape::String) => true,
            (PropertyValue::LangString(_), Shape::LangString) => true,
            (PropertyValue::Float(_), Shape::Float) => true,
            (PropertyValue::NonNegativeInteger(_), Shape::NonNegativeInteger) => true,
            (PropertyValue::DateTime(_), Shape::DateTime) => true,
            (PropertyValue::Duration(_), Shape::Duration) => true,
            (PropertyValue::MediaType(_), Shape::MediaType) => true,
            _ => false,
        }
    }

    /// The most specific shape of this value, `None` for unknown values.
    pub fn shape(&self) -> Option<Shape> {
        Some(match self {
            PropertyValue::Object(node) if node.vocab_type().is_collection() => Shape::Collection,
            PropertyValue::Object(_) => Shape::Object,
            PropertyValue::Link(_) => Shape::Link,
            PropertyValue::Iri(_) => Shape::Iri,
            PropertyValue::String(_) => Shape::String,
            PropertyValue::LangString(_) => Shape::LangString,
            PropertyValue::Float(_) => Shape::Float,
            PropertyValue::NonNegativeInteger(_) => Shape::NonNegativeInteger,
            PropertyValue::DateTime(_) => Shape::DateTime,
            PropertyValue::Duration(_) => Shape::Duration,
            PropertyValue::MediaType(_) => Shape::MediaType,
            PropertyValue::Unknown(_) => return None,
        })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PropertyValue::Unknown(_))
    }

    pub fn as_object(&self) -> Option<&Node> {
        match self {
            PropertyValue::Object(node) => Some(&**node),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Node> {
        self.as_object().filter(|node| node.vocab_type().is_collection())
    }

    pub fn as_link(&self) -> Option<&Node> {
        match self {
            PropertyValue::Link(node) => Some(&**node),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            PropertyValue::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_lang_string(&self) -> Option<&LanguageMap> {
        match self {
            PropertyValue::LangString(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_non_negative_integer(&self) -> Option<u64> {
        match self {
            PropertyValue::NonNegativeInteger(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            PropertyValue::DateTime(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&TimeDelta> {
        match self {
            PropertyValue::Duration(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_media_type(&self) -> Option<&str> {
        match self {
            PropertyValue::MediaType(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            PropertyValue::Unknown(raw) => Some(raw),
            _ => None,
        }
    }
}

fn decode_typed(
    map: &Map<String, Value>,
    discriminator: &Value,
    spec: &PropertySpec,
    registry: &dyn TypeRegistry,
) -> Result<PropertyValue> {
    let names = discriminator_names(discriminator);
    for shape in spec.candidates.iter().filter(|shape| shape.is_typed()) {
        for name in &names {
            let Some(vocab_type) = resolve(registry, *shape, name) else {
                trace!(property = spec.name, type_name = name, %shape, "registry miss");
                continue;
            };
            let node = Node::decode_map(vocab_type, map, registry)?;
            return Ok(match shape {
                Shape::Link => PropertyValue::link(node),
                _ => PropertyValue::object(node),
            });
        }
    }
    debug!(property = spec.name, types = ?names, "no typed candidate resolved, keeping as unknown");
    Ok(PropertyValue::Unknown(Value::Object(map.clone())))
}

fn resolve(registry: &dyn TypeRegistry, shape: Shape, name: &str) -> Option<VocabType> {
    match shape {
        Shape::Object => registry.resolve_object(name),
        Shape::Link => registry.resolve_link(name),
        Shape::Collection => registry
            .resolve_object(name)
            .filter(VocabType::is_collection),
        _ => None,
    }
}

/// Type names from a `type` value that is either a string or an array; other
/// entries are ignored.
pub(crate) fn discriminator_names(discriminator: &Value) -> Vec<&str> {
    match discriminator {
        Value::String(name) => vec![name.as_str()],
        Value::Array(values) => values.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn decode_literal(raw: &Value, shape: Shape) -> std::result::Result<PropertyValue, codec::CodecError> {
    Ok(match shape {
        Shape::Iri => PropertyValue::Iri(codec::decode_iri(raw)?),
        Shape::String => PropertyValue::String(codec::decode_string(raw)?),
        Shape::LangString => PropertyValue::LangString(codec::decode_lang_string(raw)?),
        Shape::Float => PropertyValue::Float(codec::decode_float(raw)?),
        Shape::NonNegativeInteger => {
            PropertyValue::NonNegativeInteger(codec::decode_non_negative_integer(raw)?)
        }
        Shape::DateTime => PropertyValue::DateTime(codec::decode_date_time(raw)?),
        Shape::Duration => PropertyValue::Duration(codec::decode_duration(raw)?),
        Shape::MediaType => PropertyValue::MediaType(codec::decode_media_type(raw)?),
        Shape::Object | Shape::Link | Shape::Collection => {
            return Err(codec::CodecError::UnexpectedJson {
                expected: shape.as_str(),
                found: codec::json_kind(raw),
            });
        }
    })
}

impl From<Iri> for PropertyValue {
    fn from(iri: Iri) -> Self {
        PropertyValue::Iri(iri)
    }
}

impl From<LanguageMap> for PropertyValue {
    fn from(map: LanguageMap) -> Self {
        PropertyValue::LangString(map)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::NonNegativeInteger(value)
    }
}

impl From<DateTime<FixedOffset>> for PropertyValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PropertyValue::DateTime(value)
    }
}

impl From<TimeDelta> for PropertyValue {
    fn from(value: TimeDelta) -> Self {
        PropertyValue::Duration(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::catalog;
    use crate::vocab::registry::default_registry;
    use serde_json::json;

    #[test]
    fn test_bare_iri_decodes_as_iri() {
        let value = PropertyValue::decode(
            &json!("https://example.com/users/alice"),
            &catalog::ACTOR,
            default_registry(),
        )
        .unwrap();
        assert!(value.matches(Shape::Iri));
        assert_eq!(value.as_iri().unwrap().as_str(), "https://example.com/users/alice");
    }

    #[test]
    fn test_object_without_type_is_unknown() {
        let raw = json!({"name": "no type here"});
        let value = PropertyValue::decode(&raw, &catalog::ACTOR, default_registry()).unwrap();
        assert_eq!(value, PropertyValue::Unknown(raw));
    }

    #[test]
    fn test_unresolved_type_is_unknown() {
        let raw = json!({"type": "Frobnicator"});
        let value = PropertyValue::decode(&raw, &catalog::ACTOR, default_registry()).unwrap();
        assert_eq!(value, PropertyValue::Unknown(raw));
    }

    #[test]
    fn test_null_is_unknown() {
        let value =
            PropertyValue::decode(&Value::Null, &catalog::ALTITUDE, default_registry()).unwrap();
        assert_eq!(value, PropertyValue::Unknown(Value::Null));
    }

    #[test]
    fn test_language_map_under_plain_key() {
        let raw = json!({"en": "Hello"});
        let value = PropertyValue::decode(&raw, &catalog::NAME, default_registry()).unwrap();
        assert_eq!(value.as_lang_string().unwrap().get("en"), "Hello");
    }

    #[test]
    fn test_collection_candidate_requires_collection_type() {
        let note = json!({"type": "Note"});
        let value = PropertyValue::decode(&note, &catalog::REPLIES, default_registry()).unwrap();
        assert!(value.is_unknown());

        let collection = json!({"type": "Collection", "totalItems": 0});
        let value =
            PropertyValue::decode(&collection, &catalog::REPLIES, default_registry()).unwrap();
        assert!(value.matches(Shape::Collection));
        assert!(value.matches(Shape::Object));
        assert_eq!(value.shape(), Some(Shape::Collection));
    }

    #[test]
    fn test_discriminator_names() {
        assert_eq!(discriminator_names(&json!("Note")), vec!["Note"]);
        assert_eq!(discriminator_names(&json!(["Note", 3, "Page"])), vec!["Note", "Page"]);
        assert!(discriminator_names(&json!(3)).is_empty());
    }
}
