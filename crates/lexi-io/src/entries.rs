use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use lexi_types::{Entry, OutputFormat};

use crate::{CSV_DELIMITER, CodecError, WORD_FIELD};

const POS_FIELD: &str = "part_of_speech";
const TRANSLATION_PREFIX: &str = "translation_";

/// Serialize entries in scrape order
pub fn write_entries<W: Write>(
    mut writer: W,
    entries: &[Entry],
    format: OutputFormat,
) -> Result<(), CodecError> {
    match format {
        OutputFormat::Csv => write_csv(writer, entries),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writeln!(writer)?;
            writer.flush()?;
            Ok(())
        }
    }
}

fn write_csv<W: Write>(writer: W, entries: &[Entry]) -> Result<(), CodecError> {
    // One column per gloss language, sorted so output is stable across runs
    let languages: BTreeSet<&str> = entries
        .iter()
        .flat_map(|e| e.translations.keys().map(String::as_str))
        .collect();

    let mut csv = csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .from_writer(writer);

    let mut header = vec![WORD_FIELD.to_string(), POS_FIELD.to_string()];
    header.extend(languages.iter().map(|l| format!("{TRANSLATION_PREFIX}{l}")));
    csv.write_record(&header)?;

    for entry in entries {
        let mut row = vec![
            entry.source_text.as_str(),
            entry.part_of_speech.as_deref().unwrap_or(""),
        ];
        row.extend(
            languages
                .iter()
                .map(|l| entry.translations.get(*l).map(String::as_str).unwrap_or("")),
        );
        csv.write_record(&row)?;
    }

    csv.flush()?;
    Ok(())
}

/// Decode entries previously written by [`write_entries`]
pub fn read_entries<R: Read>(reader: R, format: OutputFormat) -> Result<Vec<Entry>, CodecError> {
    match format {
        OutputFormat::Csv => read_csv(reader),
        OutputFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<Entry>, CodecError> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let word_idx = headers
        .iter()
        .position(|h| h == WORD_FIELD)
        .ok_or_else(|| CodecError::InvalidFormat(format!("missing '{WORD_FIELD}' column")))?;
    let pos_idx = headers.iter().position(|h| h == POS_FIELD);
    let translation_cols: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| h.strip_prefix(TRANSLATION_PREFIX).map(|lang| (i, lang)))
        .collect();

    let mut entries = Vec::new();
    for record in csv.records() {
        let record = record?;
        let mut entry = Entry::new(record.get(word_idx).unwrap_or_default());

        if let Some(pos) = pos_idx.and_then(|i| record.get(i)).filter(|p| !p.is_empty()) {
            entry.part_of_speech = Some(pos.to_string());
        }

        for (i, lang) in &translation_cols {
            if let Some(text) = record.get(*i).filter(|t| !t.is_empty()) {
                entry.translations.insert(lang.to_string(), text.to_string());
            }
        }

        entries.push(entry);
    }

    Ok(entries)
}

pub fn save_entries(path: &Path, entries: &[Entry], format: OutputFormat) -> Result<(), CodecError> {
    let file = File::create(path)?;
    write_entries(BufWriter::new(file), entries, format)?;
    tracing::info!("Saved {} entries to {}", entries.len(), path.display());
    Ok(())
}
