//! Rule-based field extractors for invoice text.
//!
//! Every field is described by an ordered [`PatternSet`]. Patterns are tried
//! in the order they were given and the first one that matches wins, so the
//! most specific (label-qualified) patterns must come before the general ones.

pub mod amounts;
pub mod dates;
pub mod numbers;
pub mod patterns;

pub use amounts::{normalize_value, ValueExtractor};
pub use dates::DateExtractor;
pub use numbers::NumberExtractor;
pub use patterns::{FieldPatterns, DATE_PATTERNS, NUMBER_PATTERNS, VALUE_PATTERNS};

use regex::{Regex, RegexBuilder};

use crate::error::SetupError;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Ordered, case-insensitive patterns for one field.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile `sources` in order. Each pattern must define capture group 1.
    pub fn new<S: AsRef<str>>(field: &str, sources: &[S]) -> Result<Self, SetupError> {
        let patterns = sources
            .iter()
            .map(|source| compile(field, source.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// First capture of the first matching pattern.
    pub fn find(&self, text: &str) -> Option<String> {
        find(text, &self.patterns)
    }
}

fn compile(field: &str, source: &str) -> Result<Regex, SetupError> {
    let invalid = |reason: String| SetupError::InvalidPattern {
        field: field.to_string(),
        pattern: source.to_string(),
        reason,
    };

    let regex = RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| invalid(e.to_string()))?;

    if regex.captures_len() < 2 {
        return Err(invalid("pattern has no capture group".to_string()));
    }

    Ok(regex)
}

/// Search `text` with each pattern in turn and return capture group 1 of the
/// first pattern that matches.
///
/// A match whose group 1 did not participate does not count; the search moves
/// on to the next pattern.
pub fn find(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
