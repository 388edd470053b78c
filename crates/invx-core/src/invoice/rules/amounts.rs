//! Amount extraction and normalization.
//!
//! Source documents write amounts with `.` as the thousands separator and `,`
//! as the decimal separator (`1.234,56`).

use rust_decimal::Decimal;
use std::str::FromStr;

use super::{FieldExtractor, PatternSet};

/// Value field extractor.
pub struct ValueExtractor {
    patterns: PatternSet,
}

impl ValueExtractor {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// The matched text before normalization.
    pub fn extract_raw(&self, text: &str) -> Option<String> {
        self.patterns.find(text)
    }
}

impl FieldExtractor for ValueExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        normalize_value(self.extract_raw(text).as_deref())
    }
}

/// Convert a matched amount into a decimal.
///
/// Everything except digits, `.` and `,` is dropped first. When both
/// separators appear, `.` groups thousands and `,` marks the fraction
/// (`1.234,56` -> `1234.56`). A lone `,` is a decimal comma. A lone `.` is
/// left alone, so `1.234` reads as `1.234` and not `1234`.
///
/// Amounts outside the range of [`Decimal`] (about 7.9e28) come out as `None`.
pub fn normalize_value(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?;

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let normalized = match (cleaned.contains('.'), cleaned.contains(',')) {
        (true, true) => cleaned.replace('.', "").replace(',', "."),
        (false, true) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}
