//! Invoice number extraction.

use super::{FieldExtractor, PatternSet};

/// Invoice number extractor.
pub struct NumberExtractor {
    patterns: PatternSet,
}

impl NumberExtractor {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }
}

impl FieldExtractor for NumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.patterns.find(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::rules::NUMBER_PATTERNS;

    #[test]
    fn test_hash_prefix_wins_over_label() {
        let extractor = NumberExtractor::new(PatternSet::new("number", NUMBER_PATTERNS).unwrap());

        // `#\s*(\d+)` is listed first, so a bare `#` reference anywhere wins.
        assert_eq!(
            extractor.extract("Invoice: 10\nPO #77"),
            Some("77".to_string())
        );
    }

    #[test]
    fn test_missing_number() {
        let extractor = NumberExtractor::new(PatternSet::new("number", NUMBER_PATTERNS).unwrap());

        assert_eq!(extractor.extract("Thank you for your business"), None);
    }
}
