//! Property slots.
//!
//! A [`PropertySpec`] declares a property's wire name, its slot kind and its
//! ordered candidate shapes. Nodes hold one slot per declared property:
//!
//! - [`Functional`]: at most one value.
//! - [`Repeatable`]: an ordered sequence, one element on the wire collapses to a
//!   bare value.
//! - [`LanguageSlot`]: a `...Map` companion holding per-language overrides.

use serde_json::Value;
use std::fmt;

use super::language_map::LanguageMap;
use super::node::Node;
use super::registry::TypeRegistry;
use super::shape::Shape;
use super::value::PropertyValue;
use crate::codec::{self, Iri};
use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Functional,
    Repeatable,
    LanguageMap,
}

/// Declarative description of one vocabulary property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Wire key.
    pub name: &'static str,
    pub kind: PropertyKind,
    /// Candidate shapes in decode priority order.
    pub candidates: &'static [Shape],
}

impl PropertySpec {
    pub const fn functional(name: &'static str, candidates: &'static [Shape]) -> Self {
        Self {
            name,
            kind: PropertyKind::Functional,
            candidates,
        }
    }

    pub const fn repeatable(name: &'static str, candidates: &'static [Shape]) -> Self {
        Self {
            name,
            kind: PropertyKind::Repeatable,
            candidates,
        }
    }

    pub const fn language_map(name: &'static str) -> Self {
        Self {
            name,
            kind: PropertyKind::LanguageMap,
            candidates: &[Shape::LangString],
        }
    }

    /// Whether `value` fits one of the candidates. Unknown values always fit.
    pub fn accepts(&self, value: &PropertyValue) -> bool {
        value.is_unknown() || self.candidates.iter().any(|shape| value.matches(*shape))
    }

    fn check(&self, value: &PropertyValue) -> Result<()> {
        if self.accepts(value) {
            return Ok(());
        }
        Err(Error::ShapeNotAccepted {
            property: self.name,
            shape: value.shape().unwrap_or(Shape::Object),
        })
    }
}

/// Behaviour shared by every slot kind, used by the node decode/encode loop.
pub trait PropertySlot: fmt::Debug {
    fn spec(&self) -> &'static PropertySpec;

    fn is_present(&self) -> bool;

    /// Decodes `raw` into this slot, replacing its contents.
    ///
    /// Returns `false` when the raw value does not belong in the slot at all; the
    /// caller keeps it in the node's unknown map instead.
    fn decode(&mut self, raw: &Value, registry: &dyn TypeRegistry) -> Result<bool>;

    /// `None` when nothing should be emitted for this property.
    fn encode(&self) -> Result<Option<Value>>;

    fn clear(&mut self);

    /// Shape of each held value in order, `None` for unknown values.
    fn shapes(&self) -> Vec<Option<Shape>>;
}

// =============================================================================
// Functional
// =============================================================================

/// A single-valued property.
#[derive(Debug, Clone, PartialEq)]
pub struct Functional {
    spec: &'static PropertySpec,
    value: Option<PropertyValue>,
}

impl Functional {
    pub fn new(spec: &'static PropertySpec) -> Self {
        Self { spec, value: None }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn get(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }

    pub fn is(&self, shape: Shape) -> bool {
        self.value.as_ref().is_some_and(|value| value.matches(shape))
    }

    /// Replaces the value, rejecting shapes the property does not declare.
    pub fn set(&mut self, value: impl Into<PropertyValue>) -> Result<()> {
        let value = value.into();
        self.spec.check(&value)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn take(&mut self) -> Option<PropertyValue> {
        self.value.take()
    }

    pub fn has_unknown(&self) -> bool {
        self.value.as_ref().is_some_and(PropertyValue::is_unknown)
    }

    pub fn get_unknown(&self) -> Option<&Value> {
        self.value.as_ref().and_then(PropertyValue::as_unknown)
    }

    pub fn set_unknown(&mut self, raw: Value) {
        self.value = Some(PropertyValue::Unknown(raw));
    }
}

impl PropertySlot for Functional {
    fn spec(&self) -> &'static PropertySpec {
        self.spec
    }

    fn is_present(&self) -> bool {
        self.value.is_some()
    }

    fn decode(&mut self, raw: &Value, registry: &dyn TypeRegistry) -> Result<bool> {
        self.value = Some(PropertyValue::decode(raw, self.spec, registry)?);
        Ok(true)
    }

    fn encode(&self) -> Result<Option<Value>> {
        self.value.as_ref().map(PropertyValue::encode).transpose()
    }

    fn clear(&mut self) {
        self.value = None;
    }

    fn shapes(&self) -> Vec<Option<Shape>> {
        self.value.iter().map(PropertyValue::shape).collect()
    }
}

// =============================================================================
// Repeatable
// =============================================================================

/// A property that may hold several values, kept in order.
///
/// Indexed access is checked: asking for a shape an element does not hold, or
/// for an index past the end, is an error rather than a panic.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeatable {
    spec: &'static PropertySpec,
    values: Vec<PropertyValue>,
}

impl Repeatable {
    pub fn new(spec: &'static PropertySpec) -> Self {
        Self {
            spec,
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyValue> {
        self.values.iter()
    }

    pub fn values(&self) -> &[PropertyValue] {
        &self.values
    }

    /// Whether element `index` holds `shape`; `false` past the end.
    pub fn is(&self, index: usize, shape: Shape) -> bool {
        self.values
            .get(index)
            .is_some_and(|value| value.matches(shape))
    }

    pub fn get(&self, index: usize) -> Result<&PropertyValue> {
        self.values.get(index).ok_or(Error::IndexOutOfRange {
            property: self.spec.name,
            index,
            len: self.values.len(),
        })
    }

    fn get_as<'a, T: ?Sized>(
        &'a self,
        index: usize,
        shape: Shape,
        extract: impl FnOnce(&'a PropertyValue) -> Option<&'a T>,
    ) -> Result<&'a T> {
        extract(self.get(index)?).ok_or(Error::ShapeMismatch {
            property: self.spec.name,
            index,
            expected: shape,
        })
    }

    pub fn get_object(&self, index: usize) -> Result<&Node> {
        self.get_as(index, Shape::Object, PropertyValue::as_object)
    }

    pub fn get_collection(&self, index: usize) -> Result<&Node> {
        self.get_as(index, Shape::Collection, PropertyValue::as_collection)
    }

    pub fn get_link(&self, index: usize) -> Result<&Node> {
        self.get_as(index, Shape::Link, PropertyValue::as_link)
    }

    pub fn get_iri(&self, index: usize) -> Result<&Iri> {
        self.get_as(index, Shape::Iri, PropertyValue::as_iri)
    }

    pub fn get_string(&self, index: usize) -> Result<&str> {
        self.get_as(index, Shape::String, PropertyValue::as_string)
    }

    pub fn get_lang_string(&self, index: usize) -> Result<&LanguageMap> {
        self.get_as(index, Shape::LangString, PropertyValue::as_lang_string)
    }

    pub fn get_date_time(&self, index: usize) -> Result<&DateTime<FixedOffset>> {
        self.get_as(index, Shape::DateTime, PropertyValue::as_date_time)
    }

    pub fn get_duration(&self, index: usize) -> Result<&TimeDelta> {
        self.get_as(index, Shape::Duration, PropertyValue::as_duration)
    }

    pub fn get_media_type(&self, index: usize) -> Result<&str> {
        self.get_as(index, Shape::MediaType, PropertyValue::as_media_type)
    }

    pub fn get_float(&self, index: usize) -> Result<f64> {
        self.get(index)?.as_float().ok_or(Error::ShapeMismatch {
            property: self.spec.name,
            index,
            expected: Shape::Float,
        })
    }

    pub fn get_non_negative_integer(&self, index: usize) -> Result<u64> {
        self.get(index)?
            .as_non_negative_integer()
            .ok_or(Error::ShapeMismatch {
                property: self.spec.name,
                index,
                expected: Shape::NonNegativeInteger,
            })
    }

    pub fn append(&mut self, value: impl Into<PropertyValue>) -> Result<()> {
        let value = value.into();
        self.spec.check(&value)?;
        self.values.push(value);
        Ok(())
    }

    pub fn prepend(&mut self, value: impl Into<PropertyValue>) -> Result<()> {
        self.insert(0, value)
    }

    /// Inserts before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<PropertyValue>) -> Result<()> {
        let value = value.into();
        self.spec.check(&value)?;
        if index > self.values.len() {
            return Err(Error::IndexOutOfRange {
                property: self.spec.name,
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value);
        Ok(())
    }

    /// Replaces element `index`.
    pub fn set(&mut self, index: usize, value: impl Into<PropertyValue>) -> Result<()> {
        let value = value.into();
        self.spec.check(&value)?;
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or(Error::IndexOutOfRange {
            property: self.spec.name,
            index,
            len,
        })?;
        *slot = value;
        Ok(())
    }

    /// Removes element `index`, keeping the others in order.
    pub fn remove(&mut self, index: usize) -> Result<PropertyValue> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                property: self.spec.name,
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    // The unknown accessors look at the first element only.

    pub fn has_unknown(&self) -> bool {
        self.values.first().is_some_and(PropertyValue::is_unknown)
    }

    pub fn get_unknown(&self) -> Option<&Value> {
        self.values.first().and_then(PropertyValue::as_unknown)
    }

    /// Makes the first element unknown, replacing whatever it held. An empty slot
    /// gains one element.
    pub fn set_unknown(&mut self, raw: Value) {
        match self.values.first_mut() {
            Some(first) => *first = PropertyValue::Unknown(raw),
            None => self.values.push(PropertyValue::Unknown(raw)),
        }
    }
}

impl<'a> IntoIterator for &'a Repeatable {
    type Item = &'a PropertyValue;
    type IntoIter = std::slice::Iter<'a, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl PropertySlot for Repeatable {
    fn spec(&self) -> &'static PropertySpec {
        self.spec
    }

    fn is_present(&self) -> bool {
        !self.values.is_empty()
    }

    fn decode(&mut self, raw: &Value, registry: &dyn TypeRegistry) -> Result<bool> {
        // An empty array has no element to hold; the node keeps it verbatim.
        if matches!(raw, Value::Array(values) if values.is_empty()) {
            return Ok(false);
        }
        self.values = codec::one_or_many(raw)
            .iter()
            .map(|element| PropertyValue::decode(element, self.spec, registry))
            .collect::<Result<_>>()?;
        Ok(true)
    }

    fn encode(&self) -> Result<Option<Value>> {
        let encoded = self
            .values
            .iter()
            .map(PropertyValue::encode)
            .collect::<Result<Vec<_>>>()?;
        Ok(codec::collapse(encoded))
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    fn shapes(&self) -> Vec<Option<Shape>> {
        self.values.iter().map(PropertyValue::shape).collect()
    }
}

// =============================================================================
// LanguageSlot
// =============================================================================

/// A natural language map companion property such as `nameMap`.
///
/// A present but empty map is still emitted, as `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSlot {
    spec: &'static PropertySpec,
    map: Option<LanguageMap>,
}

impl LanguageSlot {
    pub fn new(spec: &'static PropertySpec) -> Self {
        Self { spec, map: None }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn get(&self) -> Option<&LanguageMap> {
        self.map.as_ref()
    }

    pub fn languages(&self) -> Vec<&str> {
        self.map
            .as_ref()
            .map(LanguageMap::languages)
            .unwrap_or_default()
    }

    /// The value for `tag`, or the empty string.
    pub fn get_language(&self, tag: &str) -> &str {
        self.map.as_ref().map(|map| map.get(tag)).unwrap_or("")
    }

    pub fn set_language(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.map.get_or_insert_with(LanguageMap::new).set(tag, value);
    }

    pub fn set(&mut self, map: LanguageMap) {
        self.map = Some(map);
    }
}

impl PropertySlot for LanguageSlot {
    fn spec(&self) -> &'static PropertySpec {
        self.spec
    }

    fn is_present(&self) -> bool {
        self.map.is_some()
    }

    fn decode(&mut self, raw: &Value, _registry: &dyn TypeRegistry) -> Result<bool> {
        match codec::decode_lang_string(raw) {
            Ok(map) => {
                self.map = Some(map);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    fn encode(&self) -> Result<Option<Value>> {
        Ok(self.map.as_ref().map(codec::encode_lang_string))
    }

    fn clear(&mut self) {
        self.map = None;
    }

    fn shapes(&self) -> Vec<Option<Shape>> {
        self.map.iter().map(|_| Some(Shape::LangString)).collect()
    }
}
