//! CSV report sink.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Report, ReportSink};
use crate::error::ReportError;

/// Writes reports as comma-separated files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl CsvSink {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, report: &Report, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(&report.header)?;
        for row in &report.rows {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl ReportSink for CsvSink {
    fn extension(&self) -> &str {
        "csv"
    }

    fn save(&self, report: &Report, path: &Path) -> Result<(), ReportError> {
        self.write(report, path).map_err(|e| ReportError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Wrote {} report rows to {}", report.row_count(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{DocumentRecord, DocumentStatus};
    use crate::report::{save_with_fallback, ReportBuilder, SaveTier};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn report() -> Report {
        let mut paid = DocumentRecord::new("a.pdf");
        paid.number = Some("7".to_string());
        paid.value = Some(Decimal::from_str("1234.56").unwrap());

        let mut broken = DocumentRecord::new("b.pdf");
        broken.status = DocumentStatus::ExtractionError("bad header, offset 3".to_string());

        ReportBuilder::new().build(&[paid, broken])
    }

    #[test]
    fn test_csv_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.csv");

        CsvSink::new().save(&report(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Number,Issue Date,Value,Source Name,Status\n\
             7,not found,1234.56,a.pdf,Processed\n\
             not found,not found,not found,b.pdf,\"ExtractionError: bad header, offset 3\"\n"
        );
    }

    #[test]
    fn test_unwritable_primary_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let fallback_dir = dir.path().join("fallback");

        let saved = save_with_fallback(
            &CsvSink::new(),
            &report(),
            &blocker.join("reports"),
            &fallback_dir,
            "invoices.csv",
        )
        .unwrap();

        assert_eq!(saved.tier, SaveTier::Fallback);
        assert_eq!(saved.path, fallback_dir.join("invoices.csv"));
        assert!(saved.path.exists());
    }
}
