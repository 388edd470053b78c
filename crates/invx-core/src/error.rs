//! Error types for the invx-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the invx library.
#[derive(Error, Debug)]
pub enum InvxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Document text extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Batch setup error (no input, no documents).
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised while turning one document into text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No text source handles this kind of file.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to writing the report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A single write attempt failed.
    #[error("failed to write report to {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// Both the primary and the fallback location failed.
    #[error("report could not be saved (primary: {primary}; fallback: {fallback})")]
    AllTiersFailed {
        primary: Box<ReportError>,
        fallback: Box<ReportError>,
    },
}

/// Errors that stop a run before any document is processed.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The input directory does not exist.
    #[error("input directory not found: {0}")]
    InputMissing(PathBuf),

    /// The input directory holds no matching documents.
    #[error("no documents found in {dir} (extensions: {extensions})")]
    NoDocuments { dir: PathBuf, extensions: String },

    /// Listing the input directory failed.
    #[error("failed to list documents: {0}")]
    Discovery(String),

    /// A configured field pattern is not a usable regular expression.
    #[error("invalid {field} pattern `{pattern}`: {reason}")]
    InvalidPattern {
        field: String,
        pattern: String,
        reason: String,
    },
}

/// Result type for the invx library.
pub type Result<T> = std::result::Result<T, InvxError>;
