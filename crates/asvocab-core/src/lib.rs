//! ActivityStreams vocabulary nodes.
//!
//! Every vocabulary type shares one mechanism: a property may hold one of several
//! candidate shapes (typed object, typed link, IRI, literal, language map), and
//! anything that matches none of them is kept verbatim so that a document survives
//! a decode/encode round-trip unchanged.
//!
//! - [`codec`] holds the scalar codecs (IRI, dateTime, duration, ...).
//! - [`vocab`] holds shapes, property values, slots, the type registry, the
//!   vocabulary catalog and the node types built from them.

pub mod codec;
pub mod error;
pub mod prelude;
pub mod vocab;

pub use codec::{CodecError, Iri};
pub use error::{Error, Result};
pub use vocab::{
    default_registry, Functional, LanguageMap, LanguageSlot, Node, NodeBase, PropertyKind,
    PropertySlot, PropertySpec, PropertyValue, Repeatable, Shape, TentativeReject, TypeKind,
    TypeRegistry, VocabType, VocabularyNode, VocabularyRegistry,
};
