//! Invoice field extraction module.

mod extractor;
pub mod rules;

pub use extractor::{ExtractedFields, InvoiceFieldExtractor};
pub use rules::{FieldExtractor, FieldPatterns, PatternSet};
