//! Type registry.
//!
//! Resolves a `type` discriminator name to the descriptor used to decode the
//! object. A miss is not an error: the caller moves on to its next candidate.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use tracing::debug;

use super::catalog;
use super::node::{TypeKind, VocabType};
use crate::error::{Error, Result};

/// Lookup of vocabulary types by name, split by kind.
pub trait TypeRegistry {
    fn resolve_object(&self, name: &str) -> Option<VocabType>;

    fn resolve_link(&self, name: &str) -> Option<VocabType>;
}

/// Registry of vocabulary types.
///
/// `new()` loads the full ActivityStreams catalog; extension types can be added
/// with [`register`](Self::register) or mapped onto a catalog type with
/// [`alias`](Self::alias).
#[derive(Debug, Clone)]
pub struct VocabularyRegistry {
    objects: HashMap<String, VocabType>,
    links: HashMap<String, VocabType>,
    aliases: BTreeMap<String, String>,
}

impl VocabularyRegistry {
    /// Creates a registry holding every catalog type.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for vocab in catalog::types() {
            registry.register(vocab);
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            objects: HashMap::new(),
            links: HashMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Registers a type, replacing any type of the same kind and name.
    pub fn register(&mut self, vocab: VocabType) {
        debug!(name = vocab.name(), kind = vocab.kind().as_str(), "registering vocabulary type");
        let table = match vocab.kind() {
            TypeKind::Object => &mut self.objects,
            TypeKind::Link => &mut self.links,
        };
        table.insert(vocab.name().to_string(), vocab);
    }

    /// Makes `alias` resolve to the layout of the registered type `target`.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> Result<()> {
        let alias = alias.into();
        let vocab = self.get(target).ok_or_else(|| Error::UnresolvedType {
            names: vec![target.to_string()],
        })?;
        let renamed = vocab.renamed(alias.clone());
        self.register(renamed);
        self.aliases.insert(alias, target.to_string());
        Ok(())
    }

    /// Looks a type up by name, objects first.
    pub fn get(&self, name: &str) -> Option<&VocabType> {
        self.objects.get(name).or_else(|| self.links.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered types sorted by name, aliases included.
    pub fn types(&self) -> Vec<&VocabType> {
        let mut types: Vec<_> = self.objects.values().chain(self.links.values()).collect();
        types.sort_by(|a, b| a.name().cmp(b.name()).then(a.kind().as_str().cmp(b.kind().as_str())));
        types
    }

    /// Alias name to target name.
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }
}

impl Default for VocabularyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry for VocabularyRegistry {
    fn resolve_object(&self, name: &str) -> Option<VocabType> {
        self.objects.get(name).cloned()
    }

    fn resolve_link(&self, name: &str) -> Option<VocabType> {
        self.links.get(name).cloned()
    }
}

static DEFAULT_REGISTRY: LazyLock<VocabularyRegistry> = LazyLock::new(VocabularyRegistry::new);

/// Shared registry holding the catalog, built on first use.
pub fn default_registry() -> &'static VocabularyRegistry {
    &DEFAULT_REGISTRY
}
