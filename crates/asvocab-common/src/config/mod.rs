//! Configuration module
//!
//! Handles loading and discovery of asvocab configuration files (asvocab.toml,
//! asvocab.json).

pub mod model;

use crate::vfs::{OsVfs, Vfs};
use anyhow::Context;
use asvocab_core::VocabularyRegistry;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use self::model::*;

/// File names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["asvocab.toml", "asvocab.json"];

impl AsvocabConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> crate::Result<Self> {
        Self::load_from(&OsVfs, path)
    }

    /// Load configuration through `vfs`: JSON for `.json` files, TOML otherwise.
    pub fn load_from(vfs: &impl Vfs, path: &Path) -> crate::Result<Self> {
        let content = vfs
            .read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            return serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()));
        }

        toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Finds a config file in `dir`, then in the user config directory.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        Self::discover_in(&OsVfs, dir)
    }

    pub fn discover_in(vfs: &impl Vfs, dir: &Path) -> Option<PathBuf> {
        let user_dir = dirs::config_dir().map(|config| config.join("asvocab"));
        std::iter::once(dir.to_path_buf())
            .chain(user_dir)
            .flat_map(|dir| CONFIG_FILE_NAMES.map(|name| dir.join(name)))
            .find(|candidate| vfs.exists(candidate))
    }

    /// Loads the discovered config, or the defaults when there is none.
    pub fn load_or_default(dir: &Path) -> crate::Result<Self> {
        match Self::discover(dir) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// The catalog registry with this config's aliases applied.
    pub fn registry(&self) -> crate::Result<VocabularyRegistry> {
        let mut registry = VocabularyRegistry::new();
        for (alias, target) in &self.types.aliases {
            registry
                .alias(alias.as_str(), target)
                .with_context(|| format!("Invalid type alias `{alias}` = `{target}`"))?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryVfs;
    use asvocab_core::TypeRegistry;

    #[test]
    fn test_load_toml() -> anyhow::Result<()> {
        let toml_content = r#"
[types.aliases]
ChatMessage = "Note"

[output]
pretty = false

[logging]
level = "asvocab_core=debug"
format = "json"
"#;
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("asvocab.toml");
        std::fs::write(&file_path, toml_content)?;

        let config = AsvocabConfig::load(&file_path)?;
        assert_eq!(config.types.aliases.get("ChatMessage").map(String::as_str), Some("Note"));
        assert!(!config.output.pretty);
        assert!(config.output.keep_context);
        assert_eq!(config.logging.level, "asvocab_core=debug");
        assert_eq!(config.logging.format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn test_load_json() -> anyhow::Result<()> {
        let json_content = r#"{
    "types": {"aliases": {"Emoji": "Image"}},
    "output": {"keep_context": false}
}"#;
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("asvocab.json");
        std::fs::write(&file_path, json_content)?;

        let config = AsvocabConfig::load(&file_path)?;
        assert_eq!(config.types.aliases.len(), 1);
        assert!(config.output.pretty);
        assert!(!config.output.keep_context);
        assert_eq!(config.logging, LoggingSection::default());

        Ok(())
    }

    #[test]
    fn test_empty_file_gives_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("asvocab.toml");
        std::fs::write(&file_path, "")?;

        assert_eq!(AsvocabConfig::load(&file_path)?, AsvocabConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_reports_path() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("asvocab.toml");
        std::fs::write(&file_path, "[output\npretty = maybe")?;

        let err = AsvocabConfig::load(&file_path).unwrap_err();
        assert!(err.to_string().contains("asvocab.toml"));
        Ok(())
    }

    #[test]
    fn test_discover_prefers_working_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("asvocab.toml");
        std::fs::write(&file_path, "")?;

        assert_eq!(AsvocabConfig::discover(dir.path()), Some(file_path));
        Ok(())
    }

    #[test]
    fn test_discover_in_memory_prefers_toml() -> anyhow::Result<()> {
        let vfs = MemoryVfs::new()
            .with_file("project/asvocab.json", r#"{"output": {"pretty": false}}"#)
            .with_file("project/asvocab.toml", "[output]\nkeep_context = false\n");

        let found = AsvocabConfig::discover_in(&vfs, Path::new("project"));
        assert_eq!(found, Some(PathBuf::from("project/asvocab.toml")));

        let config = AsvocabConfig::load_from(&vfs, Path::new("project/asvocab.toml"))?;
        assert!(config.output.pretty);
        assert!(!config.output.keep_context);
        Ok(())
    }

    #[test]
    fn test_discover_in_memory_falls_back_to_json() -> anyhow::Result<()> {
        let vfs = MemoryVfs::new().with_file("project/asvocab.json", r#"{"output": {"pretty": false}}"#);

        let found = AsvocabConfig::discover_in(&vfs, Path::new("project"));
        assert_eq!(found, Some(PathBuf::from("project/asvocab.json")));
        assert!(!AsvocabConfig::load_from(&vfs, Path::new("project/asvocab.json"))?.output.pretty);
        Ok(())
    }

    #[test]
    fn test_registry_applies_aliases() -> anyhow::Result<()> {
        let mut config = AsvocabConfig::default();
        config.types.aliases.insert("ChatMessage".into(), "Note".into());

        let registry = config.registry()?;
        assert_eq!(
            registry.resolve_object("ChatMessage").map(|vocab| vocab.name().to_string()),
            Some("ChatMessage".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_registry_rejects_unknown_target() {
        let mut config = AsvocabConfig::default();
        config.types.aliases.insert("Thing".into(), "Missing".into());

        let err = config.registry().unwrap_err();
        assert!(err.to_string().contains("Thing"));
    }
}
