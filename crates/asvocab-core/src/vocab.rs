//! Vocabulary model.
//!
//! The pieces, bottom-up:
//!
//! - [`Shape`]: the candidate representations a property value may take.
//! - [`PropertyValue`]: exactly one populated candidate, or the raw JSON that
//!   matched none of them.
//! - [`Functional`], [`Repeatable`], [`LanguageSlot`]: the three slot kinds a
//!   property can have, driven by a declarative [`PropertySpec`].
//! - [`TypeRegistry`]: resolves `type` discriminators to [`VocabType`] descriptors.
//! - [`VocabularyNode`]: the shared decode/encode algorithm over a node's slots,
//!   implemented by the generic [`Node`] and by [`TentativeReject`].

pub mod catalog;
pub mod language_map;
pub mod node;
pub mod registry;
pub mod shape;
pub mod slot;
pub mod tentative_reject;
pub mod value;

pub use language_map::LanguageMap;
pub use node::{Node, NodeBase, TypeKind, VocabType, VocabularyNode};
pub use registry::{TypeRegistry, VocabularyRegistry, default_registry};
pub use shape::Shape;
pub use slot::{Functional, LanguageSlot, PropertyKind, PropertySlot, PropertySpec, Repeatable};
pub use tentative_reject::TentativeReject;
pub use value::PropertyValue;
