//! Word list in, pronunciation dictionary out

use std::path::Path;

use lexi_config::transcriber::TranscriberConfig;
use lexi_lang_fulfulde::FulfuldeTransducer;
use lexi_types::{Entry, OutputFormat};

use crate::{RunOptions, run, transcribe_words, transducer_for};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn options(input: &Path, enrich: bool) -> RunOptions {
    RunOptions {
        input: input.to_path_buf(),
        output: None,
        enrich,
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_two_words_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.json");
    std::fs::write(&input, r#"["naange","ndiyam"]"#).unwrap();

    let summary = run(&options(&input, false), &TranscriberConfig::default()).unwrap();

    assert_eq!(summary.tsv_path, dir.path().join("words_ipa.tsv"));
    assert_eq!(summary.language, "ful-Latn");
    assert_eq!(
        read_lines(&summary.tsv_path),
        vec!["naange\tn aː ᵑɡ e", "ndiyam\tⁿd i j a m"]
    );
}

#[test]
fn test_failures_dropped_and_duplicates_collapsed() {
    let transducer = FulfuldeTransducer::new();
    let result = transcribe_words(
        &transducer,
        &words(&["ndiyam", "1990", "", "ndiyam", "  ɓaleejo "]),
    );

    let written: Vec<&str> = result.records.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(written, vec!["ndiyam", "ɓaleejo"]);
    assert_eq!(result.failed, 1);
    assert_eq!(result.empty, 1);
    assert_eq!(result.duplicates, 1);
    assert_eq!(result.ipa.len(), 5);
    assert_eq!(result.ipa[1], None);
    assert_eq!(result.ipa[3].as_deref(), Some("ⁿd i j a m"));
}

#[test]
fn test_each_word_on_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.csv");
    std::fs::write(
        &input,
        "source_text;part_of_speech\nnaange;n\nnaange;n\nka7e;\nhoore;n\n",
    )
    .unwrap();

    let summary = run(&options(&input, false), &TranscriberConfig::default()).unwrap();
    let lines = read_lines(&summary.tsv_path);

    assert!(lines.len() <= summary.rows);
    for word in ["naange", "hoore"] {
        let count = lines
            .iter()
            .filter(|l| l.split('\t').next() == Some(word))
            .count();
        assert_eq!(count, 1, "{word}");
    }
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_accepts_collector_output() {
    let mut naange = Entry::new("naange").with_part_of_speech("n");
    naange.add_translation("en", "sun");
    let entries = vec![naange, Entry::new("ƴiiƴam")];

    for format in [OutputFormat::Csv, OutputFormat::Json] {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(format!("entries.{format}"));
        lexi_io::save_entries(&input, &entries, format).unwrap();

        let summary = run(&options(&input, false), &TranscriberConfig::default()).unwrap();
        assert_eq!(
            read_lines(&summary.tsv_path),
            vec!["naange\tn aː ᵑɡ e", "ƴiiƴam\tʔʲ iː ʔʲ a m"],
            "{format}"
        );
    }
}

#[test]
fn test_enrich_writes_input_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.csv");
    std::fs::write(&input, "source_text;part_of_speech\nhoore;n\n1990;\n").unwrap();

    let summary = run(&options(&input, true), &TranscriberConfig::default()).unwrap();
    let enriched = summary.enriched_path.unwrap();

    assert_eq!(enriched, dir.path().join("entries_ipa.csv"));
    assert_eq!(
        read_lines(&enriched),
        vec!["source_text;part_of_speech;ipa", "hoore;n;h oː r e", "1990;;"]
    );
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.json");
    let output = dir.path().join("dict").with_extension("txt");
    std::fs::write(&input, r#"[{"source_text": "jam"}]"#).unwrap();

    let opts = RunOptions {
        output: Some(output.clone()),
        ..options(&input, false)
    };
    let summary = run(&opts, &TranscriberConfig::default()).unwrap();

    assert_eq!(summary.tsv_path, output);
    assert_eq!(read_lines(&output), vec!["jam\tdʒ a m"]);
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(
        &options(&dir.path().join("absent.csv"), false),
        &TranscriberConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_unsupported_language() {
    let config = TranscriberConfig {
        language: "yor-Latn".to_string(),
        rules_path: None,
    };
    assert!(transducer_for(&config).is_err());
}

#[test]
fn test_rules_file_merged() {
    let dir = tempfile::tempdir().unwrap();
    let rules = dir.path().join("rules.tsv");
    std::fs::write(&rules, "# Nigerian spelling\nbh\tɓ\n").unwrap();

    let config = TranscriberConfig {
        language: "ful-Latn".to_string(),
        rules_path: Some(rules),
    };
    let transducer = transducer_for(&config).unwrap();
    assert_eq!(transducer.transliterate("bhii").unwrap(), "ɓ iː");
}

#[test]
fn test_written_word_matches_input_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.json");
    std::fs::write(&input, "[\"n\u{303}aamde\", \"jam  waali\"]").unwrap();

    let summary = run(&options(&input, false), &TranscriberConfig::default()).unwrap();
    let lines = read_lines(&summary.tsv_path);
    let written: Vec<&str> = lines.iter().filter_map(|l| l.split('\t').next()).collect();

    assert_eq!(written, vec!["n\u{303}aamde", "jam  waali"]);
    assert_eq!(lines[0], "n\u{303}aamde\tɲ aː m d e");
    assert_eq!(lines[1], "jam  waali\tdʒ a m w aː l i");
}
