//! Inspect Command
//!
//! Reports which candidate shape every property of a document resolved to, and
//! which keys were kept verbatim because nothing in the vocabulary claimed them.

use anyhow::Result;
use asvocab_common::config::AsvocabConfig;
use asvocab_common::document::Document;
use asvocab_common::vfs::{OsVfs, Vfs};
use asvocab_core::{PropertyKind, Shape, TypeRegistry, VocabularyNode};
use owo_colors::OwoColorize;
use serde::Serialize;
use starbase::AppResult;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub properties: Vec<PropertyReport>,
    pub unknown_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyReport {
    pub name: String,
    pub kind: &'static str,
    /// One entry per value; `None` for a value kept verbatim.
    pub shapes: Vec<Option<&'static str>>,
}

impl PropertyReport {
    pub fn unmatched(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.is_none()).count()
    }
}

fn kind_label(kind: PropertyKind) -> &'static str {
    match kind {
        PropertyKind::Functional => "functional",
        PropertyKind::Repeatable => "repeatable",
        PropertyKind::LanguageMap => "language map",
    }
}

/// Builds the report for a decoded node. Absent properties are left out.
pub fn inspect_node(node: &dyn VocabularyNode) -> InspectReport {
    let properties = node
        .properties()
        .into_iter()
        .filter(|slot| slot.is_present())
        .map(|slot| PropertyReport {
            name: slot.spec().name.to_string(),
            kind: kind_label(slot.spec().kind),
            shapes: slot.shapes().into_iter().map(|shape| shape.map(Shape::as_str)).collect(),
        })
        .collect();

    InspectReport {
        type_name: node.type_name().to_string(),
        id: node.id().map(|id| id.as_str().to_string()),
        properties,
        unknown_keys: node.base().unknown().keys().cloned().collect(),
    }
}

pub fn inspect_text(text: &str, registry: &dyn TypeRegistry) -> Result<InspectReport> {
    let document = Document::parse(text, registry)?;
    Ok(inspect_node(document.node()))
}

fn print_report(report: &InspectReport) {
    println!("{} {}", "Type:".bold(), report.type_name.cyan());
    if let Some(id) = &report.id {
        println!("{} {}", "Id:".bold(), id);
    }

    if report.properties.is_empty() {
        println!("{}", "No properties set".dimmed());
    }
    for property in &report.properties {
        let shapes: Vec<String> = property
            .shapes
            .iter()
            .map(|shape| match shape {
                Some(shape) => shape.green().to_string(),
                None => "unknown".yellow().to_string(),
            })
            .collect();
        println!(
            "  {:<28} {:<13} {}",
            property.name,
            property.kind.dimmed().to_string(),
            shapes.join(", ")
        );
    }

    if !report.unknown_keys.is_empty() {
        println!("{}", "Unrecognised keys:".bold());
        for key in &report.unknown_keys {
            println!("  {}", key.yellow());
        }
    }
}

fn inspect_file(vfs: &impl Vfs, input: &Path, config: &AsvocabConfig) -> Result<InspectReport> {
    let registry = config.registry()?;
    let document = Document::load(vfs, input, &registry)?;
    Ok(inspect_node(document.node()))
}

pub fn run_inspect(input: PathBuf, json: bool, config: &AsvocabConfig) -> AppResult {
    let report = match inspect_file(&OsVfs, &input, config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return Ok(Some(1));
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                return Ok(Some(1));
            }
        }
    } else {
        print_report(&report);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asvocab_core::default_registry;

    const ACTIVITY: &str = r#"{
        "id": "https://example.com/activities/7",
        "type": "TentativeReject",
        "actor": {"type": "Person", "name": "Alice"},
        "object": ["https://example.com/invites/1", {"type": "Frobnicator"}, 42],
        "nameMap": {"en": "Maybe not", "fr": "Peut-être pas"},
        "toot:discoverable": true
    }"#;

    #[test]
    fn test_inspect_reports_resolved_shapes() -> anyhow::Result<()> {
        let report = inspect_text(ACTIVITY, default_registry())?;
        assert_eq!(report.type_name, "TentativeReject");
        assert_eq!(report.id.as_deref(), Some("https://example.com/activities/7"));

        let names: Vec<&str> = report.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["actor", "object", "nameMap"]);

        assert_eq!(report.properties[0].shapes, vec![Some("object")]);
        assert_eq!(report.properties[1].shapes, vec![Some("IRI"), None, None]);
        assert_eq!(report.properties[1].unmatched(), 2);
        assert_eq!(report.properties[2].kind, "language map");
        Ok(())
    }

    #[test]
    fn test_inspect_lists_unknown_keys() -> anyhow::Result<()> {
        let report = inspect_text(ACTIVITY, default_registry())?;
        assert_eq!(report.unknown_keys, vec!["toot:discoverable".to_string()]);
        Ok(())
    }

    #[test]
    fn test_report_serializes_type_key() -> anyhow::Result<()> {
        let report = inspect_text(r#"{"type": "Note"}"#, default_registry())?;
        let value = serde_json::to_value(&report)?;
        assert_eq!(value["type"], "Note");
        assert!(value.get("id").is_none());
        assert_eq!(value["properties"], serde_json::json!([]));
        Ok(())
    }
}
