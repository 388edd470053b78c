//! Data models for records and configuration.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, InputConfig, InvxConfig, ReportConfig};
pub use record::{DocumentRecord, DocumentStatus};
