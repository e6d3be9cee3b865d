//! `xsd:anyURI` values.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use url::Url;

use super::{CodecError, expect_str};

/// An absolute IRI.
///
/// The text is validated with [`Url::parse`] (a scheme is required) but kept as
/// written, so re-encoding never normalises what a peer sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    pub fn parse(value: impl Into<String>) -> Result<Self, CodecError> {
        let value = value.into();
        match Url::parse(&value) {
            Ok(_) => Ok(Iri(value)),
            Err(reason) => Err(CodecError::InvalidIri { value, reason }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses into a [`Url`] for callers that need its components.
    pub fn to_url(&self) -> Result<Url, CodecError> {
        Url::parse(&self.0).map_err(|reason| CodecError::InvalidIri {
            value: self.0.clone(),
            reason,
        })
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iri {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iri::parse(s)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Iri(url.into())
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn decode_iri(raw: &Value) -> Result<Iri, CodecError> {
    Iri::parse(expect_str(raw, "xsd:anyURI")?)
}

pub fn encode_iri(iri: &Iri) -> Value {
    Value::String(iri.0.clone())
}
