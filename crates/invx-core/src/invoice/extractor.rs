//! Extraction of the three record fields from document text.

use rust_decimal::Decimal;
use tracing::trace;

use super::rules::{
    normalize_value, DateExtractor, FieldExtractor, FieldPatterns, NumberExtractor,
    ValueExtractor,
};

/// Fields found in one document's text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    /// Invoice number.
    pub number: Option<String>,
    /// Issue date as written.
    pub date: Option<String>,
    /// Value text as matched, before normalization.
    pub raw_value: Option<String>,
    /// Normalized value.
    pub value: Option<Decimal>,
}

/// Runs the number, date and value extractors over a document.
pub struct InvoiceFieldExtractor {
    number: NumberExtractor,
    date: DateExtractor,
    value: ValueExtractor,
}

impl InvoiceFieldExtractor {
    /// Create an extractor from compiled pattern sets.
    pub fn new(patterns: FieldPatterns) -> Self {
        Self {
            number: NumberExtractor::new(patterns.number),
            date: DateExtractor::new(patterns.date),
            value: ValueExtractor::new(patterns.value),
        }
    }

    /// Extract all fields. Fields that are not found are `None`.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let number = self.number.extract(text);
        let date = self.date.extract(text);
        let raw_value = self.value.extract_raw(text);
        let value = normalize_value(raw_value.as_deref());

        trace!(
            "Extracted fields: number={:?}, date={:?}, raw_value={:?}, value={:?}",
            number, date, raw_value, value
        );

        ExtractedFields {
            number,
            date,
            raw_value,
            value,
        }
    }
}

impl Default for InvoiceFieldExtractor {
    fn default() -> Self {
        Self::new(FieldPatterns::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_extract_english_invoice() {
        let text = r#"
            ACME Supplies Ltd.
            Invoice #: 100
            Date: 01/02/2024

            Item            Qty   Price
            Widgets         200   5,00

            Total: R$ 1.000,00
        "#;

        let fields = InvoiceFieldExtractor::default().extract(text);

        assert_eq!(fields.number, Some("100".to_string()));
        assert_eq!(fields.date, Some("01/02/2024".to_string()));
        assert_eq!(fields.raw_value, Some("1.000,00".to_string()));
        assert_eq!(fields.value, Some(Decimal::from_str("1000.00").unwrap()));
    }

    #[test]
    fn test_extract_portuguese_invoice() {
        let text = r#"
            Fatura: 2024
            Data: 15-03-2024
            Valor: 3.456,78
        "#;

        let fields = InvoiceFieldExtractor::default().extract(text);

        assert_eq!(fields.number, Some("2024".to_string()));
        assert_eq!(fields.date, Some("15-03-2024".to_string()));
        assert_eq!(fields.value, Some(Decimal::from_str("3456.78").unwrap()));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let fields = InvoiceFieldExtractor::default().extract("Lorem ipsum dolor sit amet");

        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn test_unparseable_value_keeps_raw_text() {
        let fields = InvoiceFieldExtractor::default().extract("Total: 1.2.3");

        assert_eq!(fields.raw_value, Some("1.2.3".to_string()));
        assert_eq!(fields.value, None);
    }
}
