//! Vocabulary nodes.
//!
//! A node is a JSON object made of an `id`, a `type` discriminator list, one slot
//! per declared property and an unknown map that catches everything else. The
//! decode/encode algorithm lives once in [`VocabularyNode`]; concrete node types
//! only say where their slots are.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use tracing::trace;

use super::registry::TypeRegistry;
use super::slot::{Functional, LanguageSlot, PropertyKind, PropertySlot, PropertySpec, Repeatable};
use super::value::discriminator_names;
use crate::codec::{self, Iri};
use crate::error::{Error, Result};

/// Key carrying the JSON-LD context. Recognised on decode, never stored.
pub const CONTEXT_KEY: &str = "@context";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    Link,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Object => "object",
            TypeKind::Link => "link",
        }
    }
}

/// Descriptor of a vocabulary type: its name, kind and the property groups it
/// inherits, in declaration order.
#[derive(Clone, PartialEq)]
pub struct VocabType {
    name: Cow<'static, str>,
    kind: TypeKind,
    collection: bool,
    groups: &'static [&'static [PropertySpec]],
}

impl VocabType {
    pub const fn new(
        name: &'static str,
        kind: TypeKind,
        collection: bool,
        groups: &'static [&'static [PropertySpec]],
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            collection,
            groups,
        }
    }

    /// The same descriptor under another name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_collection(&self) -> bool {
        self.collection
    }

    /// Declared properties in wire order.
    pub fn properties(&self) -> impl Iterator<Item = &'static PropertySpec> + use<> {
        let groups = self.groups;
        groups.iter().flat_map(|group| group.iter())
    }

    pub fn property(&self, name: &str) -> Option<&'static PropertySpec> {
        self.properties().find(|spec| spec.name == name)
    }
}

impl fmt::Debug for VocabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabType")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

/// State every node carries besides its property slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeBase {
    id: Option<Iri>,
    type_names: Vec<Value>,
    unknown: Map<String, Value>,
}

impl NodeBase {
    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: Iri) {
        self.id = Some(id);
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// The `type` values as received; normally strings but kept opaque.
    pub fn type_names(&self) -> &[Value] {
        &self.type_names
    }

    pub fn push_type(&mut self, name: impl Into<String>) {
        self.type_names.push(Value::String(name.into()));
    }

    pub fn set_type_names(&mut self, names: Vec<Value>) {
        self.type_names = names;
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.type_names.iter().any(|value| value.as_str() == Some(name))
    }

    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    pub fn unknown_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.unknown
    }

    pub fn get_unknown(&self, key: &str) -> Option<&Value> {
        self.unknown.get(key)
    }

    pub fn set_unknown(&mut self, key: impl Into<String>, raw: Value) {
        self.unknown.insert(key.into(), raw);
    }
}

/// The shared decode/encode algorithm over a node's property slots.
pub trait VocabularyNode {
    /// Canonical type name, stamped into `type` on encode.
    fn type_name(&self) -> &str;

    fn base(&self) -> &NodeBase;

    fn base_mut(&mut self) -> &mut NodeBase;

    fn property(&self, name: &str) -> Option<&dyn PropertySlot>;

    fn property_mut(&mut self, name: &str) -> Option<&mut dyn PropertySlot>;

    /// Every slot, in encode order.
    fn properties(&self) -> Vec<&dyn PropertySlot>;

    fn id(&self) -> Option<&Iri> {
        self.base().id()
    }

    fn set_id(&mut self, id: Iri) {
        self.base_mut().set_id(id);
    }

    /// Populates this node from a wire object.
    ///
    /// Keys are dispatched to their slots; whatever a slot does not take and
    /// every unrecognised key lands in the unknown map. `@context` is dropped.
    /// Nested decode failures abort the whole decode.
    fn decode_fields(&mut self, map: &Map<String, Value>, registry: &dyn TypeRegistry) -> Result<()> {
        for (key, raw) in map {
            match key.as_str() {
                CONTEXT_KEY => {}
                "id" => {
                    let id = codec::decode_iri(raw).map_err(|source| Error::InvalidId {
                        type_name: self.type_name().to_string(),
                        source,
                    })?;
                    self.base_mut().id = Some(id);
                }
                "type" => self.base_mut().type_names = codec::one_or_many(raw),
                _ => {
                    let taken = match self.property_mut(key) {
                        Some(slot) => slot.decode(raw, registry)?,
                        None => {
                            trace!(type_name = self.type_name(), key, "unrecognised key");
                            false
                        }
                    };
                    if !taken {
                        self.base_mut().unknown.insert(key.clone(), raw.clone());
                    }
                }
            }
        }
        Ok(())
    }

    /// Encodes this node to a wire object.
    ///
    /// Unknown entries form the base layer, then `id`, `type` and each populated
    /// property in declared order. The node's own type name is appended to
    /// `type` when missing.
    fn encode(&self) -> Result<Map<String, Value>> {
        let base = self.base();
        let mut out = base.unknown.clone();

        if let Some(id) = &base.id {
            out.insert("id".to_string(), codec::encode_iri(id));
        }

        let mut type_names = base.type_names.clone();
        if !base.has_type(self.type_name()) {
            type_names.push(Value::String(self.type_name().to_string()));
        }
        if let Some(types) = codec::collapse(type_names) {
            out.insert("type".to_string(), types);
        }

        for slot in self.properties() {
            if let Some(value) = slot.encode()? {
                out.insert(slot.spec().name.to_string(), value);
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Functional(Functional),
    Repeatable(Repeatable),
    Languages(LanguageSlot),
}

impl Slot {
    fn new(spec: &'static PropertySpec) -> Self {
        match spec.kind {
            PropertyKind::Functional => Slot::Functional(Functional::new(spec)),
            PropertyKind::Repeatable => Slot::Repeatable(Repeatable::new(spec)),
            PropertyKind::LanguageMap => Slot::Languages(LanguageSlot::new(spec)),
        }
    }

    fn as_dyn(&self) -> &dyn PropertySlot {
        match self {
            Slot::Functional(slot) => slot,
            Slot::Repeatable(slot) => slot,
            Slot::Languages(slot) => slot,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn PropertySlot {
        match self {
            Slot::Functional(slot) => slot,
            Slot::Repeatable(slot) => slot,
            Slot::Languages(slot) => slot,
        }
    }

    fn name(&self) -> &'static str {
        self.as_dyn().spec().name
    }
}

/// A node whose layout comes from a [`VocabType`] descriptor.
///
/// Every typed value nested inside a property decodes into one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    vocab: VocabType,
    base: NodeBase,
    slots: Vec<Slot>,
}

impl Node {
    pub fn new(vocab: VocabType) -> Self {
        let slots = vocab.properties().map(Slot::new).collect();
        Self {
            vocab,
            base: NodeBase::default(),
            slots,
        }
    }

    pub fn vocab_type(&self) -> &VocabType {
        &self.vocab
    }

    /// Decodes `raw` as a node of the given type.
    pub fn decode(vocab: VocabType, raw: &Value, registry: &dyn TypeRegistry) -> Result<Self> {
        match raw {
            Value::Object(map) => Self::decode_map(vocab, map, registry),
            other => Err(Error::NotAnObject {
                type_name: vocab.name().to_string(),
                found: codec::json_kind(other),
            }),
        }
    }

    pub fn decode_map(
        vocab: VocabType,
        map: &Map<String, Value>,
        registry: &dyn TypeRegistry,
    ) -> Result<Self> {
        let mut node = Self::new(vocab);
        node.decode_fields(map, registry)?;
        Ok(node)
    }

    /// Decodes `raw`, taking the node's type from its own `type` field. Object
    /// types are tried before link types.
    pub fn from_value(raw: &Value, registry: &dyn TypeRegistry) -> Result<Self> {
        let Value::Object(map) = raw else {
            return Err(Error::NotAnObject {
                type_name: "node".to_string(),
                found: codec::json_kind(raw),
            });
        };
        let names = map.get("type").map(discriminator_names).unwrap_or_default();
        let vocab = names
            .iter()
            .find_map(|name| registry.resolve_object(name))
            .or_else(|| names.iter().find_map(|name| registry.resolve_link(name)))
            .ok_or_else(|| Error::UnresolvedType {
                names: names.iter().map(|name| name.to_string()).collect(),
            })?;
        Self::decode_map(vocab, map, registry)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(Value::Object(self.encode()?))
    }

    pub fn functional(&self, name: &str) -> Option<&Functional> {
        self.slots.iter().find_map(|slot| match slot {
            Slot::Functional(slot) if slot.name() == name => Some(slot),
            _ => None,
        })
    }

    pub fn functional_mut(&mut self, name: &str) -> Option<&mut Functional> {
        self.slots.iter_mut().find_map(|slot| match slot {
            Slot::Functional(slot) if slot.name() == name => Some(slot),
            _ => None,
        })
    }

    pub fn repeatable(&self, name: &str) -> Option<&Repeatable> {
        self.slots.iter().find_map(|slot| match slot {
            Slot::Repeatable(slot) if slot.name() == name => Some(slot),
            _ => None,
        })
    }

    pub fn repeatable_mut(&mut self, name: &str) -> Option<&mut Repeatable> {
        self.slots.iter_mut().find_map(|slot| match slot {
            Slot::Repeatable(slot) if slot.name() == name => Some(slot),
            _ => None,
        })
    }

    pub fn language_map(&self, name: &str) -> Option<&LanguageSlot> {
        self.slots.iter().find_map(|slot| match slot {
            Slot::Languages(slot) if slot.name() == name => Some(slot),
            _ => None,
        })
    }

    pub fn language_map_mut(&mut self, name: &str) -> Option<&mut LanguageSlot> {
        self.slots.iter_mut().find_map(|slot| match slot {
            Slot::Languages(slot) if slot.name() == name => Some(slot),
            _ => None,
        })
    }
}

impl VocabularyNode for Node {
    fn type_name(&self) -> &str {
        self.vocab.name()
    }

    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn property(&self, name: &str) -> Option<&dyn PropertySlot> {
        self.slots
            .iter()
            .find(|slot| slot.name() == name)
            .map(Slot::as_dyn)
    }

    fn property_mut(&mut self, name: &str) -> Option<&mut dyn PropertySlot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.name() == name)
            .map(Slot::as_dyn_mut)
    }

    fn properties(&self) -> Vec<&dyn PropertySlot> {
        self.slots.iter().map(Slot::as_dyn).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::registry::{VocabularyRegistry, default_registry};
    use crate::vocab::shape::Shape;
    use serde_json::json;

    #[test]
    fn test_from_value_resolves_own_type() {
        let raw = json!({
            "type": "Note",
            "id": "https://example.com/notes/1",
            "content": "hello"
        });
        let node = Node::from_value(&raw, default_registry()).unwrap();
        assert_eq!(node.type_name(), "Note");
        assert_eq!(node.id().unwrap().as_str(), "https://example.com/notes/1");
        assert_eq!(
            node.repeatable("content").unwrap().get_string(0).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_from_value_unresolved_type() {
        let err = Node::from_value(&json!({"type": "Frobnicator"}), default_registry()).unwrap_err();
        assert!(matches!(err, Error::UnresolvedType { names } if names == vec!["Frobnicator"]));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let vocab = default_registry().resolve_object("Note").unwrap();
        let err = Node::decode(vocab, &json!([1]), default_registry()).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "array", .. }));
    }

    #[test]
    fn test_invalid_id_is_fatal() {
        let err = Node::from_value(&json!({"type": "Note", "id": "not an iri"}), default_registry())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));
    }

    #[test]
    fn test_context_is_dropped_and_extras_kept() {
        let raw = json!({
            "@context": "https://www.w3.org/ns/activitystreams",
            "type": "Note",
            "fooBarBaz": 42
        });
        let node = Node::from_value(&raw, default_registry()).unwrap();
        assert_eq!(node.base().get_unknown("fooBarBaz"), Some(&json!(42)));
        assert_eq!(node.base().get_unknown(CONTEXT_KEY), None);

        let out = node.to_value().unwrap();
        assert_eq!(out, json!({"fooBarBaz": 42, "type": "Note"}));
    }

    #[test]
    fn test_type_is_stamped_once() {
        let vocab = default_registry().resolve_object("Note").unwrap();
        let mut node = Node::new(vocab);
        assert_eq!(node.encode().unwrap()["type"], json!("Note"));

        node.base_mut().push_type("Note");
        assert_eq!(node.encode().unwrap()["type"], json!("Note"));

        node.base_mut().set_type_names(vec![json!("Extension")]);
        assert_eq!(node.encode().unwrap()["type"], json!(["Extension", "Note"]));
    }

    #[test]
    fn test_link_layout() {
        let raw = json!({
            "type": "Link",
            "href": "https://example.com/a.png",
            "mediaType": "image/png",
            "width": 640
        });
        let node = Node::from_value(&raw, default_registry()).unwrap();
        assert_eq!(node.vocab_type().kind(), TypeKind::Link);
        assert!(node.functional("width").unwrap().is(Shape::NonNegativeInteger));
        assert!(node.property("actor").is_none());
        assert_eq!(node.to_value().unwrap(), raw);
    }

    #[test]
    fn test_alias_keeps_extension_name() {
        let mut registry = VocabularyRegistry::new();
        registry.alias("ChatMessage", "Note").unwrap();
        let node = Node::from_value(&json!({"type": "ChatMessage", "name": "hi"}), &registry).unwrap();
        assert_eq!(node.type_name(), "ChatMessage");
        assert_eq!(
            node.to_value().unwrap(),
            json!({"type": "ChatMessage", "name": "hi"})
        );
    }
}
