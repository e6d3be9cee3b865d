//! Normalize Command
//!
//! Decodes a document through the vocabulary and re-encodes it: repeatable
//! properties collapse to their canonical form, `type` is stamped, and anything
//! unrecognised is carried through unchanged.

use anyhow::Result;
use asvocab_common::config::{AsvocabConfig, OutputSection};
use asvocab_common::document::{Document, read_source};
use asvocab_common::vfs::{OsVfs, Vfs};
use asvocab_core::TypeRegistry;
use owo_colors::OwoColorize;
use starbase::AppResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// Normalizes one JSON document given as text.
pub fn normalize_text(text: &str, registry: &dyn TypeRegistry, output: &OutputSection) -> Result<String> {
    Document::parse(text, registry)?.render(output)
}

fn normalize_file(
    vfs: &impl Vfs,
    input: &Path,
    output: Option<&Path>,
    config: &AsvocabConfig,
    settings: &OutputSection,
) -> Result<()> {
    let registry = config.registry()?;
    let text = read_source(vfs, input)?;
    let normalized = normalize_text(&text, &registry, settings)?;
    match output {
        Some(path) => {
            vfs.write_from_string(path, &format!("{normalized}\n"))?;
            info!(input = %input.display(), output = %path.display(), "normalized document");
        }
        None => println!("{normalized}"),
    }
    Ok(())
}

pub fn run_normalize(
    input: PathBuf,
    output: Option<PathBuf>,
    compact: bool,
    strip_context: bool,
    config: &AsvocabConfig,
) -> AppResult {
    let settings = OutputSection {
        pretty: config.output.pretty && !compact,
        keep_context: config.output.keep_context && !strip_context,
    };

    if let Err(e) = normalize_file(&OsVfs, &input, output.as_deref(), config, &settings) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        return Ok(Some(1));
    }
    Ok(None)
}
