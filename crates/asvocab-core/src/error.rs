//! Error types for vocabulary nodes
//!
//! Shape mismatches during decode are not errors: they degrade to unknown values.
//! What remains here are structural failures and caller contract violations.

use thiserror::Error;

use crate::codec::CodecError;
use crate::vocab::Shape;

/// Result type alias for vocabulary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for vocabulary node operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("expected a JSON object for a `{type_name}` node, found {found}")]
    NotAnObject {
        type_name: String,
        found: &'static str,
    },

    #[error("invalid `id` on `{type_name}`: {source}")]
    InvalidId {
        type_name: String,
        #[source]
        source: CodecError,
    },

    #[error("no registered vocabulary type for {names:?}")]
    UnresolvedType { names: Vec<String> },

    #[error("property `{property}` does not accept {shape} values")]
    ShapeNotAccepted {
        property: &'static str,
        shape: Shape,
    },

    #[error("property `{property}` at index {index} holds no {expected} value")]
    ShapeMismatch {
        property: &'static str,
        index: usize,
        expected: Shape,
    },

    #[error("property `{property}` has no index {index} (length {len})")]
    IndexOutOfRange {
        property: &'static str,
        index: usize,
        len: usize,
    },

    #[error("cannot encode {shape} value: {source}")]
    Encode {
        shape: Shape,
        #[source]
        source: CodecError,
    },
}
