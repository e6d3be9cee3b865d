use std::fmt;

/// One candidate representation of a property value.
///
/// `Object`, `Link` and `Collection` are typed shapes: they only match JSON
/// objects whose `type` resolves through the registry. The rest are literal
/// shapes parsed by the scalar codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Object,
    Link,
    Collection,
    Iri,
    String,
    LangString,
    Float,
    NonNegativeInteger,
    DateTime,
    Duration,
    MediaType,
}

impl Shape {
    pub fn is_typed(self) -> bool {
        matches!(self, Shape::Object | Shape::Link | Shape::Collection)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Object => "object",
            Shape::Link => "link",
            Shape::Collection => "collection",
            Shape::Iri => "IRI",
            Shape::String => "string",
            Shape::LangString => "language map",
            Shape::Float => "float",
            Shape::NonNegativeInteger => "non-negative integer",
            Shape::DateTime => "date-time",
            Shape::Duration => "duration",
            Shape::MediaType => "media type",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
