//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{InvxError, SetupError};
use crate::invoice::rules::{DATE_PATTERNS, NUMBER_PATTERNS, VALUE_PATTERNS};
use crate::invoice::FieldPatterns;

/// Main configuration for the invx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvxConfig {
    /// Where documents are read from.
    pub input: InputConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report output configuration.
    pub report: ReportConfig,
}

/// Document discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory scanned for documents.
    pub dir: PathBuf,

    /// File extensions to include, without the dot.
    pub extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("invoices"),
            extensions: vec!["pdf".to_string()],
        }
    }
}

/// Field extraction configuration.
///
/// A `None` pattern list selects the built-in list for that field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Invoice number patterns, most specific first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_patterns: Option<Vec<String>>,

    /// Issue date patterns, most specific first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_patterns: Option<Vec<String>>,

    /// Value patterns, most specific first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_patterns: Option<Vec<String>>,
}

impl ExtractionConfig {
    /// Compile the configured pattern sets.
    pub fn field_patterns(&self) -> Result<FieldPatterns, SetupError> {
        if self.number_patterns.is_none()
            && self.date_patterns.is_none()
            && self.value_patterns.is_none()
        {
            return Ok(FieldPatterns::default());
        }

        FieldPatterns::from_sources(
            &resolve(&self.number_patterns, NUMBER_PATTERNS),
            &resolve(&self.date_patterns, DATE_PATTERNS),
            &resolve(&self.value_patterns, VALUE_PATTERNS),
        )
    }
}

fn resolve(configured: &Option<Vec<String>>, builtin: &[&str]) -> Vec<String> {
    match configured {
        Some(patterns) => patterns.clone(),
        None => builtin.iter().map(|p| p.to_string()).collect(),
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Primary directory for the report file.
    pub output_dir: PathBuf,

    /// Report file name prefix; a timestamp is appended.
    pub file_prefix: String,

    /// Placeholder written for fields that were not found.
    pub not_found: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            file_prefix: "invoices".to_string(),
            not_found: "not found".to_string(),
        }
    }
}

impl InvxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| InvxError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| InvxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
