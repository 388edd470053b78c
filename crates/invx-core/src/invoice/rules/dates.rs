//! Issue date extraction.
//!
//! Dates are returned exactly as written in the document. Day/month order
//! differs between sources, so no parsing is attempted here.

use super::{FieldExtractor, PatternSet};

/// Date field extractor.
pub struct DateExtractor {
    patterns: PatternSet,
}

impl DateExtractor {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.patterns.find(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::rules::DATE_PATTERNS;

    #[test]
    fn test_extract_labeled_date() {
        let extractor = DateExtractor::new(PatternSet::new("date", DATE_PATTERNS).unwrap());

        assert_eq!(
            extractor.extract("Data de emissão\nData: 07/11/2023"),
            Some("07/11/2023".to_string())
        );
    }

    #[test]
    fn test_date_kept_verbatim() {
        let extractor = DateExtractor::new(PatternSet::new("date", DATE_PATTERNS).unwrap());

        assert_eq!(extractor.extract("issued 1-2-2024"), Some("1-2-2024".to_string()));
        assert_eq!(extractor.extract("issued 31/31/2024"), Some("31/31/2024".to_string()));
    }
}
