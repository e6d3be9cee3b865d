//! JSON document loading.
//!
//! A document is one top-level vocabulary node plus the `@context` it carried.
//! The node layer drops `@context`, so it is kept here and put back on output.

use crate::config::OutputSection;
use crate::vfs::Vfs;
use anyhow::{Context, Result};
use asvocab_core::vocab::node::CONTEXT_KEY;
use asvocab_core::{Node, TentativeReject, TypeRegistry, VocabularyNode};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path argument meaning standard input.
pub const STDIN: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    TentativeReject(Box<TentativeReject>),
    Other(Node),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    context: Option<Value>,
    node: DocumentNode,
}

impl Document {
    pub fn from_value(raw: &Value, registry: &dyn TypeRegistry) -> Result<Self> {
        let context = raw.get(CONTEXT_KEY).cloned();
        let node = if declares_type(raw, TentativeReject::TYPE_NAME) {
            DocumentNode::TentativeReject(Box::new(TentativeReject::from_value(raw, registry)?))
        } else {
            DocumentNode::Other(Node::from_value(raw, registry)?)
        };
        debug!(type_name = node_ref(&node).type_name(), "decoded document");
        Ok(Self { context, node })
    }

    pub fn parse(text: &str, registry: &dyn TypeRegistry) -> Result<Self> {
        let raw: Value = serde_json::from_str(text).context("Failed to parse JSON document")?;
        Self::from_value(&raw, registry)
    }

    /// Loads a document from `path`, or from standard input for `-`.
    pub fn load(vfs: &impl Vfs, path: &Path, registry: &dyn TypeRegistry) -> Result<Self> {
        let text = read_source(vfs, path)?;
        Self::parse(&text, registry).with_context(|| format!("Failed to load {}", path.display()))
    }

    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    pub fn node(&self) -> &dyn VocabularyNode {
        node_ref(&self.node)
    }

    pub fn as_tentative_reject(&self) -> Option<&TentativeReject> {
        match &self.node {
            DocumentNode::TentativeReject(node) => Some(&**node),
            DocumentNode::Other(_) => None,
        }
    }

    /// Encodes the node, with `@context` in front when kept.
    pub fn to_value(&self, keep_context: bool) -> Result<Value> {
        let encoded = self.node().encode()?;
        let mut out = Map::new();
        if let Some(context) = self.context.as_ref().filter(|_| keep_context) {
            out.insert(CONTEXT_KEY.to_string(), context.clone());
        }
        out.extend(encoded);
        Ok(Value::Object(out))
    }

    pub fn render(&self, output: &OutputSection) -> Result<String> {
        let value = self.to_value(output.keep_context)?;
        let text = if output.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

fn node_ref(node: &DocumentNode) -> &dyn VocabularyNode {
    match node {
        DocumentNode::TentativeReject(node) => &**node,
        DocumentNode::Other(node) => node,
    }
}

fn declares_type(raw: &Value, name: &str) -> bool {
    match raw.get("type") {
        Some(Value::String(value)) => value == name,
        Some(Value::Array(values)) => values.iter().any(|value| value.as_str() == Some(name)),
        _ => false,
    }
}

/// Reads a whole input, `-` meaning standard input.
pub fn read_source(vfs: &impl Vfs, path: &Path) -> Result<String> {
    if path == Path::new(STDIN) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    vfs.read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryVfs;
    use asvocab_core::default_registry;
    use serde_json::json;

    const ACTIVITY: &str = r#"{
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "TentativeReject",
        "actor": "https://example.com/users/alice",
        "object": "https://example.com/invites/1"
    }"#;

    #[test]
    fn test_tentative_reject_uses_named_node() -> anyhow::Result<()> {
        let document = Document::parse(ACTIVITY, default_registry())?;
        let node = document.as_tentative_reject().expect("named node");
        assert_eq!(node.actor().get_iri(0)?.as_str(), "https://example.com/users/alice");
        Ok(())
    }

    #[test]
    fn test_other_types_use_generic_node() -> anyhow::Result<()> {
        let document = Document::parse(r#"{"type": "Note", "content": "hi"}"#, default_registry())?;
        assert!(document.as_tentative_reject().is_none());
        assert_eq!(document.node().type_name(), "Note");
        Ok(())
    }

    #[test]
    fn test_context_is_restored_first() -> anyhow::Result<()> {
        let document = Document::parse(ACTIVITY, default_registry())?;
        let value = document.to_value(true)?;
        let keys: Vec<_> = value.as_object().expect("object").keys().cloned().collect();
        assert_eq!(keys[0], "@context");
        assert_eq!(value["@context"], json!("https://www.w3.org/ns/activitystreams"));

        let stripped = document.to_value(false)?;
        assert!(stripped.get("@context").is_none());
        Ok(())
    }

    #[test]
    fn test_render_compact() -> anyhow::Result<()> {
        let document = Document::parse(r#"{"type": "Note"}"#, default_registry())?;
        let output = OutputSection {
            pretty: false,
            keep_context: true,
        };
        assert_eq!(document.render(&output)?, r#"{"type":"Note"}"#);
        Ok(())
    }

    #[test]
    fn test_load_from_vfs() -> anyhow::Result<()> {
        let vfs = MemoryVfs::new().with_file("activity.json", ACTIVITY);
        let document = Document::load(&vfs, Path::new("activity.json"), default_registry())?;
        assert_eq!(document.node().type_name(), "TentativeReject");
        Ok(())
    }

    #[test]
    fn test_load_reports_path() {
        let vfs = MemoryVfs::new().with_file("broken.json", "{");
        let err = Document::load(&vfs, Path::new("broken.json"), default_registry()).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_unresolved_type_is_an_error() {
        let err = Document::parse(r#"{"type": "Frobnicator"}"#, default_registry()).unwrap_err();
        assert!(format!("{err:#}").contains("Frobnicator"));
    }
}
