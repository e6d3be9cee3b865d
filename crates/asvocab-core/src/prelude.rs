//! Prelude module for convenient imports
//!
//! ```rust
//! use asvocab_core::prelude::*;
//! ```

// Node types and the shared algorithm
pub use crate::vocab::{Node, NodeBase, TentativeReject, VocabularyNode};

// Slots and values
pub use crate::vocab::{
    Functional, LanguageMap, LanguageSlot, PropertySlot, PropertyValue, Repeatable, Shape,
};

// Registry
pub use crate::vocab::{TypeKind, TypeRegistry, VocabType, VocabularyRegistry, default_registry};

// Scalars and errors
pub use crate::codec::{CodecError, Iri};
pub use crate::error::{Error, Result};
