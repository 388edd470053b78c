//! Per-document extraction records.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::ExtractedFields;

/// Outcome of processing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Text was extracted and searched. Individual fields may still be absent.
    #[default]
    Processed,
    /// The document produced no text.
    EmptyDocument,
    /// Reading the document failed.
    ExtractionError(String),
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processed => write!(f, "Processed"),
            Self::EmptyDocument => write!(f, "EmptyDocument"),
            Self::ExtractionError(message) => write!(f, "ExtractionError: {}", message),
        }
    }
}

/// Extraction result for a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Identifier of the source document (its file name).
    pub source_id: String,

    /// Invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Issue date, as matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Normalized monetary value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    /// Processing status.
    pub status: DocumentStatus,
}

impl DocumentRecord {
    /// Create an empty record with status `Processed`.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            number: None,
            date: None,
            value: None,
            status: DocumentStatus::default(),
        }
    }

    /// Copy extracted fields into the record.
    pub fn apply(&mut self, fields: ExtractedFields) {
        self.number = fields.number;
        self.date = fields.date;
        self.value = fields.value;
    }
}
