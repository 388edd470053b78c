//! Run command - extract fields from a directory of documents into a report.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::{glob_with, MatchOptions, Pattern};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{debug, warn};

use invx_core::error::SetupError;
use invx_core::report::{report_file_name, save_with_fallback, CsvSink, ReportBuilder, ReportSink, SaveTier};
use invx_core::{BatchProcessor, BatchSummary, DocumentHandle, FileTextSource};

use super::load_config;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Directory containing the documents (default: from config)
    input_dir: Option<PathBuf>,

    /// Directory for the report (default: from config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File extension to include; repeat for several (default: from config)
    #[arg(short = 'e', long = "extension")]
    extensions: Vec<String>,

    /// Report file name prefix (default: from config)
    #[arg(long)]
    prefix: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let input_dir = args.input_dir.unwrap_or(config.input.dir);
    let output_dir = args.output_dir.unwrap_or(config.report.output_dir);
    let prefix = args.prefix.unwrap_or(config.report.file_prefix);
    let extensions = if args.extensions.is_empty() {
        config.input.extensions
    } else {
        args.extensions
    };

    let processor = BatchProcessor::from_config(FileTextSource::new(), &config.extraction)?;

    if !input_dir.is_dir() {
        anyhow::bail!(SetupError::InputMissing(input_dir));
    }

    let documents = discover_documents(&input_dir, &extensions)?;
    if documents.is_empty() {
        anyhow::bail!(SetupError::NoDocuments {
            dir: input_dir,
            extensions: extensions.join(", "),
        });
    }

    println!(
        "{} Found {} documents to process",
        style("ℹ").blue(),
        documents.len()
    );

    let pb = ProgressBar::new(documents.len() as u64);
    if args.no_progress {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let records = processor.process_with(&documents, |record| {
        pb.set_message(record.source_id.clone());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let report = ReportBuilder::new()
        .with_not_found(config.report.not_found)
        .build(&records);

    let sink = CsvSink::new();
    let file_name = report_file_name(&prefix, Local::now().naive_local(), sink.extension());
    let fallback_dir = env::current_dir()?;

    let saved = save_with_fallback(&sink, &report, &output_dir, &fallback_dir, &file_name)?;

    match saved.tier {
        SaveTier::Primary => println!(
            "{} Report written to {}",
            style("✓").green(),
            saved.path.display()
        ),
        SaveTier::Fallback => println!(
            "{} Could not write to {}; report written to {}",
            style("!").yellow(),
            output_dir.display(),
            saved.path.display()
        ),
    }

    print_summary(&BatchSummary::from_records(&records));
    debug!("Total run time: {:?}", start.elapsed());

    Ok(())
}

/// Files directly inside `dir` whose extension is one of `extensions`,
/// sorted by path.
fn discover_documents(dir: &Path, extensions: &[String]) -> Result<Vec<DocumentHandle>, SetupError> {
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let base = Pattern::escape(&dir.to_string_lossy());

    let mut paths = Vec::new();
    for extension in extensions {
        let pattern = format!("{}/*.{}", base, extension.trim_start_matches('.'));
        let entries = glob_with(&pattern, options).map_err(|e| SetupError::Discovery(e.to_string()))?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry: {}", e),
            }
        }
    }

    paths.sort();
    paths.dedup();

    Ok(paths.into_iter().map(DocumentHandle::new).collect())
}

fn print_summary(summary: &BatchSummary) {
    println!();
    println!(
        "{} Processed {} documents",
        style("✓").green(),
        summary.total
    );
    println!(
        "   {} processed, {} empty, {} failed",
        style(summary.processed).green(),
        style(summary.empty).yellow(),
        style(summary.failed).red()
    );
    println!(
        "   fields found: number {}/{}, date {}/{}, value {}/{}",
        summary.with_number,
        summary.total,
        summary.with_date,
        summary.total,
        summary.with_value,
        summary.total
    );
}
