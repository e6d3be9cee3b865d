//! Types Command
//!
//! Lists the vocabulary types the registry resolves, including configured aliases.

use asvocab_common::config::AsvocabConfig;
use asvocab_core::{TypeKind, VocabularyRegistry};
use owo_colors::OwoColorize;
use serde::Serialize;
use starbase::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeEntry {
    pub name: String,
    pub kind: &'static str,
    pub collection: bool,
    pub properties: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,
}

/// Registry contents, sorted by name and optionally narrowed to one kind.
pub fn list_types(registry: &VocabularyRegistry, kind: Option<TypeKind>) -> Vec<TypeEntry> {
    registry
        .types()
        .into_iter()
        .filter(|vocab| kind.is_none_or(|kind| vocab.kind() == kind))
        .map(|vocab| TypeEntry {
            name: vocab.name().to_string(),
            kind: vocab.kind().as_str(),
            collection: vocab.is_collection(),
            properties: vocab.properties().count(),
            alias_of: registry.aliases().get(vocab.name()).cloned(),
        })
        .collect()
}

pub fn run_types(kind: Option<TypeKind>, json: bool, config: &AsvocabConfig) -> AppResult {
    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return Ok(Some(1));
        }
    };
    let entries = list_types(&registry, kind);

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                return Ok(Some(1));
            }
        }
        return Ok(None);
    }

    for entry in &entries {
        let mut line = format!("{:<28} {:<7} {:>3} properties", entry.name, entry.kind, entry.properties);
        if entry.collection {
            line.push_str(" (collection)");
        }
        match &entry.alias_of {
            Some(target) => println!("{} {}", line, format!("alias of {target}").dimmed()),
            None => println!("{line}"),
        }
    }
    println!("{} {} types", "Total:".bold(), entries.len());
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_includes_tentative_reject() {
        let entries = list_types(&VocabularyRegistry::new(), None);
        let entry = entries
            .iter()
            .find(|entry| entry.name == "TentativeReject")
            .expect("TentativeReject listed");
        assert_eq!(entry.kind, "object");
        assert!(!entry.collection);
        assert!(entry.properties > 50);
    }

    #[test]
    fn test_filter_by_kind() {
        let links = list_types(&VocabularyRegistry::new(), Some(TypeKind::Link));
        assert!(!links.is_empty());
        assert!(links.iter().all(|entry| entry.kind == "link"));
        assert!(links.iter().any(|entry| entry.name == "Mention"));
    }

    #[test]
    fn test_aliases_are_marked() -> anyhow::Result<()> {
        let mut registry = VocabularyRegistry::new();
        registry.alias("ChatMessage", "Note")?;
        let entries = list_types(&registry, None);
        let entry = entries
            .iter()
            .find(|entry| entry.name == "ChatMessage")
            .expect("alias listed");
        assert_eq!(entry.alias_of.as_deref(), Some("Note"));
        Ok(())
    }

    #[test]
    fn test_collections_flagged() {
        let entries = list_types(&VocabularyRegistry::new(), None);
        let page = entries
            .iter()
            .find(|entry| entry.name == "OrderedCollectionPage")
            .expect("page listed");
        assert!(page.collection);
    }
}
