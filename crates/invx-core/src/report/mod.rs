//! Tabular report construction and persistence.
//!
//! A report has a fixed header and one row per record, in batch order.
//! Saving goes through a [`ReportSink`] with two tiers: the configured
//! directory first, then a fallback directory if the first write fails.

mod csv_sink;

pub use csv_sink::CsvSink;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::ReportError;
use crate::models::record::DocumentRecord;

/// Column titles, in order.
pub const HEADER: [&str; 5] = ["Number", "Issue Date", "Value", "Source Name", "Status"];

/// Placeholder for fields that were not found.
pub const NOT_FOUND: &str = "not found";

/// One report cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Header plus body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Turns records into report rows.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    not_found: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            not_found: NOT_FOUND.to_string(),
        }
    }

    /// Use a different placeholder for missing fields.
    pub fn with_not_found(mut self, placeholder: impl Into<String>) -> Self {
        self.not_found = placeholder.into();
        self
    }

    pub fn build(&self, records: &[DocumentRecord]) -> Report {
        Report {
            header: HEADER.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(|record| self.row(record)).collect(),
        }
    }

    fn row(&self, record: &DocumentRecord) -> Vec<Cell> {
        let text_or_placeholder = |field: &Option<String>| match field {
            Some(text) => Cell::Text(text.clone()),
            None => Cell::Text(self.not_found.clone()),
        };

        vec![
            text_or_placeholder(&record.number),
            text_or_placeholder(&record.date),
            match record.value {
                Some(value) => Cell::Number(value),
                None => Cell::Text(self.not_found.clone()),
            },
            Cell::Text(record.source_id.clone()),
            Cell::Text(record.status.to_string()),
        ]
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Persists a report to a path.
pub trait ReportSink {
    /// File extension written by this sink, without the dot.
    fn extension(&self) -> &str;

    /// Write the report to `path`, creating missing parent directories.
    fn save(&self, report: &Report, path: &Path) -> Result<(), ReportError>;
}

/// Which write attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTier {
    Primary,
    Fallback,
}

impl fmt::Display for SaveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Where a report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    pub tier: SaveTier,
    pub path: PathBuf,
}

/// Save to `primary_dir`, or to `fallback_dir` if that fails.
///
/// The fallback is skipped when it resolves to the same path as the primary
/// attempt. Fails only when no tier could be written.
pub fn save_with_fallback<K: ReportSink + ?Sized>(
    sink: &K,
    report: &Report,
    primary_dir: &Path,
    fallback_dir: &Path,
    file_name: &str,
) -> Result<SavedReport, ReportError> {
    let primary = primary_dir.join(file_name);
    let primary_error = match sink.save(report, &primary) {
        Ok(()) => {
            info!("Report saved to {}", primary.display());
            return Ok(SavedReport {
                tier: SaveTier::Primary,
                path: primary,
            });
        }
        Err(e) => e,
    };

    let fallback = fallback_dir.join(file_name);
    if same_dir(primary_dir, fallback_dir) {
        return Err(ReportError::AllTiersFailed {
            primary: Box::new(primary_error),
            fallback: Box::new(ReportError::Write {
                path: fallback,
                reason: "fallback location is the primary location".to_string(),
            }),
        });
    }

    warn!("{}; retrying in {}", primary_error, fallback_dir.display());

    match sink.save(report, &fallback) {
        Ok(()) => {
            info!("Report saved to fallback location {}", fallback.display());
            Ok(SavedReport {
                tier: SaveTier::Fallback,
                path: fallback,
            })
        }
        Err(fallback_error) => Err(ReportError::AllTiersFailed {
            primary: Box::new(primary_error),
            fallback: Box::new(fallback_error),
        }),
    }
}

/// Directories that exist are compared by their canonical path.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// `<prefix>_<YYYYmmdd_HHMMSS>.<extension>`
pub fn report_file_name(prefix: &str, generated_at: NaiveDateTime, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        generated_at.format("%Y%m%d_%H%M%S"),
        extension
    )
}
