use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lexi_config::transcriber::TranscriberConfig;
use lexi_core::error::TranscribeError;
use lexi_core::g2p::Transducer;
use lexi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexi_io::WordList;
use lexi_lang_fulfulde::{FulfuldeTransducer, RuleTable};
use lexi_types::WordRecord;

/// Result of transcribing a word list
#[derive(Debug, Default)]
pub struct Transcription {
    /// One record per distinct word, input order
    pub records: Vec<WordRecord>,
    /// Transcription per input row, None where the row produced none
    pub ipa: Vec<Option<String>>,
    pub failed: usize,
    pub empty: usize,
    pub duplicates: usize,
}

/// Pick the transducer for the configured language, with any extra rules merged in
pub fn transducer_for(config: &TranscriberConfig) -> Result<Box<dyn Transducer>> {
    if !lexi_lang_fulfulde::supports(&config.language) {
        return Err(TranscribeError::UnsupportedLanguage(config.language.clone()).into());
    }

    let mut rules = RuleTable::with_defaults();
    if let Some(path) = &config.rules_path {
        let extra = RuleTable::load_from_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?;
        tracing::info!("Merging {} rules from {}", extra.len(), path.display());
        rules = rules.merge(extra);
    }

    Ok(Box::new(FulfuldeTransducer::with_rules(rules)))
}

/// Transcribe words in order; failures are logged and dropped
pub fn transcribe_words(transducer: &dyn Transducer, words: &[String]) -> Transcription {
    let mut out = Transcription::default();
    let mut seen = HashSet::new();

    tracing::info!("Converting {} words to IPA...", words.len());

    for raw in words {
        // Normalized text feeds the rules; the record keeps the word as written
        let normalized = DefaultPreprocessor.process(raw);
        if normalized.is_empty() {
            out.empty += 1;
            out.ipa.push(None);
            continue;
        }
        let word = raw.trim();

        match transducer.transliterate(&normalized) {
            Ok(ipa) => {
                out.ipa.push(Some(ipa.clone()));
                if seen.insert(word) {
                    out.records.push(WordRecord::new(word, ipa));
                } else {
                    out.duplicates += 1;
                }
            }
            Err(e) => {
                tracing::warn!("Error converting '{word}' to IPA: {e}");
                out.failed += 1;
                out.ipa.push(None);
            }
        }
    }

    out
}

pub struct RunOptions {
    pub input: PathBuf,
    /// Defaults to `<input stem>_ipa.tsv` next to the input
    pub output: Option<PathBuf>,
    /// Also write the input rows back with an `ipa` field
    pub enrich: bool,
}

#[derive(Debug)]
pub struct RunSummary {
    /// Code of the transducer that produced the transcriptions
    pub language: String,
    pub tsv_path: PathBuf,
    pub enriched_path: Option<PathBuf>,
    pub rows: usize,
    pub written: usize,
    pub failed: usize,
}

pub fn run(options: &RunOptions, config: &TranscriberConfig) -> Result<RunSummary> {
    let transducer = transducer_for(config)?;
    let list = WordList::load(&options.input)
        .with_context(|| format!("Error processing file {}", options.input.display()))?;

    let transcription = transcribe_words(transducer.as_ref(), &list.words());
    if transcription.records.is_empty() {
        tracing::warn!("No transcriptions produced from {}", options.input.display());
    }

    let tsv_path = options
        .output
        .clone()
        .unwrap_or_else(|| lexi_io::ipa_sibling(&options.input, "tsv"));
    lexi_io::save_tsv(&tsv_path, &transcription.records)
        .with_context(|| format!("Error writing to file {}", tsv_path.display()))?;

    let enriched_path = if options.enrich {
        let path = enriched_path(&options.input, &list);
        list.save_enriched(&path, &transcription.ipa)
            .with_context(|| format!("Error writing to file {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    tracing::info!(
        language = transducer.language_code(),
        rows = list.len(),
        written = transcription.records.len(),
        failed = transcription.failed,
        empty = transcription.empty,
        duplicates = transcription.duplicates,
        "Transcription finished"
    );

    Ok(RunSummary {
        language: transducer.language_code().to_string(),
        tsv_path,
        enriched_path,
        rows: list.len(),
        written: transcription.records.len(),
        failed: transcription.failed,
    })
}

fn enriched_path(input: &Path, list: &WordList) -> PathBuf {
    lexi_io::ipa_sibling(input, list.format().extension())
}
