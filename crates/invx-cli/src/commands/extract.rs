//! Extract command - run the field extraction on a single document.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use invx_core::models::record::{DocumentRecord, DocumentStatus};
use invx_core::{BatchProcessor, DocumentHandle, FileTextSource};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let processor = BatchProcessor::from_config(FileTextSource::new(), &config.extraction)?;
    let record = processor.process_document(&DocumentHandle::new(&args.input));

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Text => format_text(&record, &config.report.not_found),
    };
    println!("{}", output);

    if let DocumentStatus::ExtractionError(message) = &record.status {
        eprintln!("{} {}", style("✗").red(), message);
    }

    Ok(())
}

fn format_text(record: &DocumentRecord, not_found: &str) -> String {
    let or_placeholder = |field: Option<String>| field.unwrap_or_else(|| not_found.to_string());

    let mut output = String::new();
    output.push_str(&format!("Document: {}\n", record.source_id));
    output.push_str(&format!("Status:   {}\n", record.status));
    output.push_str(&format!("Number:   {}\n", or_placeholder(record.number.clone())));
    output.push_str(&format!("Date:     {}\n", or_placeholder(record.date.clone())));
    output.push_str(&format!(
        "Value:    {}",
        or_placeholder(record.value.map(|v| v.to_string()))
    ));
    output
}
