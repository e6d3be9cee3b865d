use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration from asvocab.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AsvocabConfig {
    /// Vocabulary type settings
    #[serde(default)]
    pub types: TypesSection,

    /// Output formatting
    #[serde(default)]
    pub output: OutputSection,

    /// Logging
    #[serde(default)]
    pub logging: LoggingSection,
}

/// [types] section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TypesSection {
    /// Extension type name to the catalog type whose layout it uses
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// [output] section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Pretty-print JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Re-emit the document's @context
    #[serde(default = "default_true")]
    pub keep_context: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            pretty: true,
            keep_context: true,
        }
    }
}

/// [logging] section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSection {
    /// Filter directive, e.g. `warn` or `asvocab_core=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_log_level() -> String {
    "warn".to_string()
}
