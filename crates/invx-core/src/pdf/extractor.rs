//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::{ExtractionError, PdfError};
use crate::source::{DocumentHandle, TextSource};

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        // pdf-extract panics on some malformed content streams.
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&self.raw_data)
        }))
        .map_err(|payload| PdfError::TextExtraction(panic_message(payload.as_ref())))?;

        extracted.map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "text extraction panicked".to_string()
    }
}

/// Text source that reads PDF files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract_text(&self, document: &DocumentHandle) -> crate::Result<String> {
        let data = fs::read(document.path()).map_err(|source| ExtractionError::Read {
            path: document.path().to_path_buf(),
            source,
        })?;

        let mut extractor = PdfExtractor::new();
        match extractor.load(&data) {
            Err(PdfError::NoPages) => {
                debug!("{}: no pages", document.id());
                return Ok(String::new());
            }
            loaded => loaded?,
        }
        debug!("{}: {} pages", document.id(), extractor.page_count());

        Ok(extractor.extract_text()?)
    }
}
