//! Document handles and the text-extraction seam.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractionError;
use crate::pdf::PdfTextSource;
use crate::Result;

/// A document in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    id: String,
    path: PathBuf,
}

impl DocumentHandle {
    /// Handle identified by the file name of `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { id, path }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowercase file extension, or an empty string.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase()
    }
}

/// Produces the full text of a document.
///
/// Implementations may return an empty string when a document has no text
/// layer, and report unreadable documents as errors.
pub trait TextSource {
    fn extract_text(&self, document: &DocumentHandle) -> Result<String>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn extract_text(&self, document: &DocumentHandle) -> Result<String> {
        (**self).extract_text(document)
    }
}

/// Text source for files on disk, chosen by extension.
///
/// `pdf` files go through [`PdfTextSource`]; `txt` files are read as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextSource {
    pdf: PdfTextSource,
}

impl FileTextSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSource for FileTextSource {
    fn extract_text(&self, document: &DocumentHandle) -> Result<String> {
        match document.extension().as_str() {
            "pdf" => self.pdf.extract_text(document),
            "txt" => fs::read_to_string(document.path()).map_err(|source| {
                ExtractionError::Read {
                    path: document.path().to_path_buf(),
                    source,
                }
                .into()
            }),
            other => Err(ExtractionError::UnsupportedFormat(other.to_string()).into()),
        }
    }
}
