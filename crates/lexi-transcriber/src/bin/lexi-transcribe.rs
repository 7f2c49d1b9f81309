use std::path::PathBuf;

use clap::Parser;
use lexi_config::Config;
use lexi_core::telemetry;
use lexi_transcriber::RunOptions;

#[derive(Parser)]
#[command(
    name = "lexi-transcribe",
    about = "Convert a word list file (CSV or JSON) to a word<TAB>IPA pronunciation dictionary"
)]
struct Cli {
    /// The path to the input CSV or JSON file (e.g., entries.csv or entries.json)
    #[arg(short = 'f', long)]
    filename: PathBuf,

    /// Output TSV path, defaults to <input>_ipa.tsv
    #[arg(long)]
    output: Option<PathBuf>,

    /// Transducer language, e.g. ful-Latn
    #[arg(long)]
    lang: Option<String>,

    /// Extra grapheme<TAB>phoneme rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Also write <input>_ipa.<ext> with an ipa field on every row
    #[arg(long)]
    enrich: bool,

    /// JSON config file; environment variables are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    telemetry::init(config.log_format);

    let mut transcriber_config = config.transcriber;
    if let Some(lang) = cli.lang {
        transcriber_config.language = lang;
    }
    if let Some(rules) = cli.rules {
        transcriber_config.rules_path = Some(rules);
    }

    let options = RunOptions {
        input: cli.filename,
        output: cli.output,
        enrich: cli.enrich,
    };

    let summary = lexi_transcriber::run(&options, &transcriber_config)?;
    tracing::info!(
        "Wrote {} of {} {} words to {}",
        summary.written,
        summary.rows,
        summary.language,
        summary.tsv_path.display()
    );

    Ok(())
}
