use std::collections::BTreeMap;

/// Natural language values keyed by BCP 47 language tag.
///
/// Backs both the `rdf:langString` candidate shape and the `...Map` companion
/// properties (`nameMap`, `summaryMap`, ...). Tags are unique; iteration is in
/// tag order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap(BTreeMap<String, String>);

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tags present, empty if none.
    pub fn languages(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// The value for `tag`, or the empty string when the tag is absent.
    pub fn get(&self, tag: &str) -> &str {
        self.0.get(tag).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    /// Inserts or overwrites the value for `tag`.
    pub fn set(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.0.insert(tag.into(), value.into());
    }

    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.0.remove(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(tag, text)| (tag.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tag, text)| (tag.into(), text.into()))
                .collect(),
        )
    }
}
