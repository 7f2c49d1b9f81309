use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexi_collector::{Collector, HttpSource};
use lexi_config::Config;
use lexi_core::telemetry;
use lexi_types::OutputFormat;

#[derive(Parser)]
#[command(
    name = "lexi-collect",
    about = "Scrape dictionary entries from a Webonary site into CSV or JSON"
)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output-format", default_value = "csv")]
    output_format: OutputFormat,

    /// Include gloss columns for every language found
    #[arg(long)]
    include_translation: bool,

    /// Output file, defaults to entries.<format>
    #[arg(long)]
    output: Option<PathBuf>,

    /// Comma separated letters to browse instead of the configured alphabet
    #[arg(long, value_delimiter = ',')]
    letters: Option<Vec<String>>,

    /// JSON config file; environment variables are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    telemetry::init(config.log_format);

    let mut collector_config = config.collector;
    if let Some(letters) = cli.letters {
        collector_config.letters = letters;
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("entries.{}", cli.output_format.extension())));

    tracing::info!(
        site = %collector_config.base_url,
        letters = collector_config.letters.len(),
        format = %cli.output_format,
        include_translation = cli.include_translation,
        "Starting collection"
    );

    let source = HttpSource::new(&collector_config)?;
    let collector = Collector::new(source, collector_config, cli.include_translation)?;
    let report = collector.run().await;

    if report.entries.is_empty() {
        tracing::warn!("No entries collected");
    }

    lexi_io::save_entries(&output, &report.entries, cli.output_format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
