//! Core library for batch invoice field extraction.
//!
//! This crate provides:
//! - Document text sources (PDF via lopdf/pdf-extract, plain text)
//! - Ordered, case-insensitive pattern search for invoice number, date and value
//! - Amount normalization for `1.234,56` style numbers
//! - Batch processing with per-document failure isolation
//! - Report rows and a two-tier (primary, fallback) save policy

pub mod batch;
pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;
pub mod report;
pub mod source;

pub use batch::{BatchProcessor, BatchSummary};
pub use error::{InvxError, Result};
pub use invoice::{ExtractedFields, FieldPatterns, InvoiceFieldExtractor, PatternSet};
pub use invoice::rules::normalize_value;
pub use models::config::InvxConfig;
pub use models::record::{DocumentRecord, DocumentStatus};
pub use pdf::{PdfExtractor, PdfProcessor, PdfTextSource};
pub use report::{
    report_file_name, save_with_fallback, Cell, CsvSink, Report, ReportBuilder, ReportSink,
    SaveTier, SavedReport,
};
pub use source::{DocumentHandle, FileTextSource, TextSource};
