//! Command-line entry point: scan a transcript, print the report.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use chat_stats::config::AppConfig;
use chat_stats::logging::{init_logging, OperationTimer};
use chat_stats::report::{print_report, ReportLimits};
use chat_stats::transcript::TranscriptReader;
use chat_stats::TranscriptStats;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the exported chat transcript (defaults to the configured path)
    input: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(Some(level))?;

    info!("Starting chat-stats");

    let input = cli
        .input
        .unwrap_or_else(|| PathBuf::from(&config.input.path));

    let reader = TranscriptReader::new()?;
    let mut stats = TranscriptStats::new()?;

    let timer = OperationTimer::new("transcript scan");
    reader.scan_file(&input, &mut stats)?;
    timer.finish();

    info!(senders = stats.senders().len(), "Transcript scanned");

    let limits = ReportLimits::from(&config.report);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_report(&mut out, &stats, &limits)?;
    out.flush()?;

    Ok(())
}
