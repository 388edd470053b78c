//! Built-in pattern sets for invoice fields.
//!
//! Labels cover English and Portuguese documents. Each list is ordered from
//! most to least specific.

use lazy_static::lazy_static;

use super::PatternSet;
use crate::error::SetupError;

/// Invoice number: `# 123`, `Invoice #: 123`, `Fatura 123`, `Número: 123`.
pub const NUMBER_PATTERNS: &[&str] = &[
    r"#\s*(\d+)",
    r"Invoice\s*#?\s*:?\s*(\d+)",
    r"Fatura\s*#?\s*:?\s*(\d+)",
    r"N[úu]mero\s*:?\s*(\d+)",
];

/// Issue date, kept as written (`01/02/2024`, `1-2-2024`).
pub const DATE_PATTERNS: &[&str] = &[
    r"Date\s*:?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    r"Data\s*:?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
    r"(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
];

/// Monetary value in `1.234,56` notation, optionally prefixed by `R$`.
pub const VALUE_PATTERNS: &[&str] = &[
    r"Total\s*:?\s*R?\$?\s*([\d.,]+)",
    r"Valor\s*:?\s*R?\$?\s*([\d.,]+)",
    r"R\$\s*([\d.,]+)",
    r"(\d{1,3}(?:\.\d{3})*,\d{2})",
];

lazy_static! {
    static ref DEFAULT_FIELD_PATTERNS: FieldPatterns =
        FieldPatterns::from_sources(NUMBER_PATTERNS, DATE_PATTERNS, VALUE_PATTERNS)
            .expect("built-in field patterns must compile");
}

/// The three pattern sets used to extract a record.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    pub number: PatternSet,
    pub date: PatternSet,
    pub value: PatternSet,
}

impl FieldPatterns {
    /// Compile the three pattern sets from source strings.
    pub fn from_sources<N, D, V>(number: &[N], date: &[D], value: &[V]) -> Result<Self, SetupError>
    where
        N: AsRef<str>,
        D: AsRef<str>,
        V: AsRef<str>,
    {
        Ok(Self {
            number: PatternSet::new("number", number)?,
            date: PatternSet::new("date", date)?,
            value: PatternSet::new("value", value)?,
        })
    }
}

impl Default for FieldPatterns {
    fn default() -> Self {
        DEFAULT_FIELD_PATTERNS.clone()
    }
}
