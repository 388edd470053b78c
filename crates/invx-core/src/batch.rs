//! Batch processing of documents into records.
//!
//! Each document is handled on its own: a failure while reading one document
//! is recorded in that document's status and the batch moves on. The output
//! always holds one record per input document, in input order.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::invoice::InvoiceFieldExtractor;
use crate::models::config::ExtractionConfig;
use crate::models::record::{DocumentRecord, DocumentStatus};
use crate::source::{DocumentHandle, TextSource};
use crate::Result;

/// Drives field extraction over a batch of documents.
pub struct BatchProcessor<S> {
    source: S,
    extractor: InvoiceFieldExtractor,
}

impl<S: TextSource> BatchProcessor<S> {
    /// Create a processor with the given text source and extractor.
    pub fn new(source: S, extractor: InvoiceFieldExtractor) -> Self {
        Self { source, extractor }
    }

    /// Create a processor using the configured pattern sets.
    pub fn from_config(source: S, config: &ExtractionConfig) -> Result<Self> {
        let patterns = config.field_patterns()?;
        Ok(Self::new(source, InvoiceFieldExtractor::new(patterns)))
    }

    /// Process every document, in order.
    pub fn process(&self, documents: &[DocumentHandle]) -> Vec<DocumentRecord> {
        self.process_with(documents, |_| {})
    }

    /// Process every document, calling `observer` after each record is built.
    pub fn process_with<F>(&self, documents: &[DocumentHandle], mut observer: F) -> Vec<DocumentRecord>
    where
        F: FnMut(&DocumentRecord),
    {
        debug!("Processing batch of {} documents", documents.len());

        documents
            .iter()
            .map(|document| {
                let record = self.process_document(document);
                observer(&record);
                record
            })
            .collect()
    }

    /// Process a single document. Never fails; errors end up in the status.
    pub fn process_document(&self, document: &DocumentHandle) -> DocumentRecord {
        let mut record = DocumentRecord::new(document.id());

        if let Err(e) = self.populate(document, &mut record) {
            warn!("Failed to process {}: {}", document.id(), e);
            record.status = DocumentStatus::ExtractionError(e.to_string());
        }

        record
    }

    fn populate(&self, document: &DocumentHandle, record: &mut DocumentRecord) -> Result<()> {
        let text = self.source.extract_text(document)?;

        if text.trim().is_empty() {
            warn!("{}: no text extracted", document.id());
            record.status = DocumentStatus::EmptyDocument;
            return Ok(());
        }

        record.apply(self.extractor.extract(&text));

        info!(
            "{}: number={}, date={}, value={}",
            document.id(),
            display_field(record.number.as_ref()),
            display_field(record.date.as_ref()),
            display_field(record.value.as_ref()),
        );

        Ok(())
    }
}

fn display_field<T: ToString>(field: Option<&T>) -> String {
    field.map(ToString::to_string).unwrap_or_else(|| "-".to_string())
}

/// Counts over a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub processed: usize,
    pub empty: usize,
    pub failed: usize,
    pub with_number: usize,
    pub with_date: usize,
    pub with_value: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            match record.status {
                DocumentStatus::Processed => summary.processed += 1,
                DocumentStatus::EmptyDocument => summary.empty += 1,
                DocumentStatus::ExtractionError(_) => summary.failed += 1,
            }
            summary.with_number += usize::from(record.number.is_some());
            summary.with_date += usize::from(record.date.is_some());
            summary.with_value += usize::from(record.value.is_some());
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvxError, PdfError};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::str::FromStr;

    /// In-memory source: documents without an entry fail to read.
    struct FakeSource {
        texts: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn new(texts: &[(&str, &str)]) -> Self {
            Self {
                texts: texts
                    .iter()
                    .map(|(id, text)| (id.to_string(), text.to_string()))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextSource for FakeSource {
        fn extract_text(&self, document: &DocumentHandle) -> Result<String> {
            self.calls.borrow_mut().push(document.id().to_string());
            self.texts
                .get(document.id())
                .cloned()
                .ok_or_else(|| InvxError::Pdf(PdfError::Parse("corrupt xref table".to_string())))
        }
    }

    fn handles(ids: &[&str]) -> Vec<DocumentHandle> {
        ids.iter().map(|id| DocumentHandle::new(*id)).collect()
    }

    fn processor(source: FakeSource) -> BatchProcessor<FakeSource> {
        BatchProcessor::new(source, InvoiceFieldExtractor::default())
    }

    #[test]
    fn test_one_record_per_document_in_order() {
        let source = FakeSource::new(&[
            ("c.pdf", "Invoice #: 3"),
            ("a.pdf", "Invoice #: 1"),
            ("b.pdf", ""),
        ]);
        let documents = handles(&["c.pdf", "a.pdf", "missing.pdf", "b.pdf"]);

        let records = processor(source).process(&documents);

        let ids: Vec<&str> = records.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["c.pdf", "a.pdf", "missing.pdf", "b.pdf"]);
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let source = FakeSource::new(&[("blank.pdf", "  \n\n ")]);

        let record = processor(source).process_document(&DocumentHandle::new("blank.pdf"));

        assert_eq!(record.status, DocumentStatus::EmptyDocument);
        assert_eq!(record.number, None);
        assert_eq!(record.date, None);
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_read_failure_does_not_stop_batch() {
        let source = FakeSource::new(&[("ok.pdf", "Invoice #: 9\nTotal: 10,00")]);
        let documents = handles(&["broken.pdf", "ok.pdf"]);

        let processor = processor(source);
        let records = processor.process(&documents);

        match &records[0].status {
            DocumentStatus::ExtractionError(message) => {
                assert!(!message.is_empty());
                assert!(message.contains("corrupt xref table"));
            }
            other => panic!("unexpected status {:?}", other),
        }
        assert_eq!(records[1].status, DocumentStatus::Processed);
        assert_eq!(records[1].number, Some("9".to_string()));
        assert_eq!(*processor.source.calls.borrow(), vec!["broken.pdf", "ok.pdf"]);
    }

    #[test]
    fn test_missing_fields_keep_processed_status() {
        let source = FakeSource::new(&[("memo.pdf", "Meeting notes, nothing billable")]);

        let record = processor(source).process_document(&DocumentHandle::new("memo.pdf"));

        assert_eq!(record.status, DocumentStatus::Processed);
        assert_eq!(record.number, None);
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_fields_extracted() {
        let source = FakeSource::new(&[(
            "doc1.pdf",
            "Invoice #: 100\nDate: 01/02/2024\nTotal: 1.000,00",
        )]);

        let record = processor(source).process_document(&DocumentHandle::new("doc1.pdf"));

        assert_eq!(record.number, Some("100".to_string()));
        assert_eq!(record.date, Some("01/02/2024".to_string()));
        assert_eq!(record.value, Some(Decimal::from_str("1000.00").unwrap()));
        assert_eq!(record.status, DocumentStatus::Processed);
    }

    #[test]
    fn test_observer_sees_every_record() {
        let source = FakeSource::new(&[("a.pdf", "x"), ("b.pdf", "y")]);
        let mut seen = Vec::new();

        processor(source).process_with(&handles(&["a.pdf", "b.pdf"]), |record| {
            seen.push(record.source_id.clone())
        });

        assert_eq!(seen, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_from_config_rejects_bad_patterns() {
        let config = ExtractionConfig {
            date_patterns: Some(vec!["[".to_string()]),
            ..Default::default()
        };

        assert!(BatchProcessor::from_config(FakeSource::new(&[]), &config).is_err());
    }

    #[test]
    fn test_batch_to_report() {
        use crate::report::{Cell, ReportBuilder};

        let source = FakeSource::new(&[
            ("doc1.pdf", "Invoice #: 100\nDate: 01/02/2024\nTotal: 1.000,00"),
            ("doc2.pdf", ""),
        ]);
        let records = processor(source).process(&handles(&["doc1.pdf", "doc2.pdf", "doc3.pdf"]));

        let report = ReportBuilder::new().build(&records);

        assert_eq!(report.row_count(), 4);
        assert_eq!(
            report.rows[0],
            vec![
                Cell::from("100"),
                Cell::from("01/02/2024"),
                Cell::Number(Decimal::from_str("1000.00").unwrap()),
                Cell::from("doc1.pdf"),
                Cell::from("Processed"),
            ]
        );
        assert_eq!(
            report.rows[1],
            vec![
                Cell::from("not found"),
                Cell::from("not found"),
                Cell::from("not found"),
                Cell::from("doc2.pdf"),
                Cell::from("EmptyDocument"),
            ]
        );
        assert_eq!(report.rows[2][3], Cell::from("doc3.pdf"));
        assert_eq!(
            report.rows[2][4],
            Cell::from("ExtractionError: PDF error: failed to parse PDF: corrupt xref table")
        );
    }

    #[test]
    fn test_batch_summary() {
        let source = FakeSource::new(&[
            ("a.pdf", "Invoice #: 1\nTotal: 5,00"),
            ("b.pdf", ""),
            ("c.pdf", "Date: 02/03/2024"),
        ]);
        let records = processor(source).process(&handles(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]));

        let summary = BatchSummary::from_records(&records);

        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                processed: 2,
                empty: 1,
                failed: 1,
                with_number: 1,
                with_date: 1,
                with_value: 1,
            }
        );
    }
}
