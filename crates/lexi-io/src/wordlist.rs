use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use lexi_types::OutputFormat;
use serde_json::{Map, Value};

use crate::{CSV_DELIMITER, CodecError, IPA_FIELD, WORD_FIELD, format_of};

/// Input rows kept verbatim so an enriched copy can be written back
#[derive(Debug, Clone)]
enum Rows {
    Csv {
        headers: Vec<String>,
        records: Vec<Vec<String>>,
        word_column: usize,
    },
    Json(Vec<Value>),
}

/// A word list read from collector output or a hand-made file
#[derive(Debug, Clone)]
pub struct WordList {
    format: OutputFormat,
    rows: Rows,
}

impl WordList {
    /// Load a `.csv` or `.json` word list, inferring the format from the extension
    pub fn load(path: &Path) -> Result<Self, CodecError> {
        if !path.exists() {
            return Err(CodecError::FileNotFound(path.display().to_string()));
        }
        let format = format_of(path)?;

        tracing::info!("Reading data from {}...", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: Read>(reader: R, format: OutputFormat) -> Result<Self, CodecError> {
        let rows = match format {
            OutputFormat::Csv => read_csv_rows(reader)?,
            OutputFormat::Json => read_json_rows(reader)?,
        };
        Ok(Self { format, rows })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        match &self.rows {
            Rows::Csv { records, .. } => records.len(),
            Rows::Json(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Word of every row in input order; rows without a word give ""
    pub fn words(&self) -> Vec<String> {
        match &self.rows {
            Rows::Csv {
                records,
                word_column,
                ..
            } => records
                .iter()
                .map(|r| r.get(*word_column).cloned().unwrap_or_default())
                .collect(),
            Rows::Json(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(word) => word.clone(),
                    Value::Object(fields) => fields
                        .get(WORD_FIELD)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    _ => String::new(),
                })
                .collect(),
        }
    }

    /// Write every input row back with an `ipa` field; `ipa` is indexed like [`Self::words`]
    pub fn write_enriched<W: Write>(
        &self,
        mut writer: W,
        ipa: &[Option<String>],
    ) -> Result<(), CodecError> {
        if ipa.len() != self.len() {
            return Err(CodecError::InvalidFormat(format!(
                "{} transcriptions for {} rows",
                ipa.len(),
                self.len()
            )));
        }

        match &self.rows {
            Rows::Csv {
                headers, records, ..
            } => {
                let mut headers = headers.clone();
                let ipa_column = match headers.iter().position(|h| h == IPA_FIELD) {
                    Some(i) => i,
                    None => {
                        headers.push(IPA_FIELD.to_string());
                        headers.len() - 1
                    }
                };

                let mut csv = csv::WriterBuilder::new()
                    .delimiter(CSV_DELIMITER)
                    .from_writer(writer);
                csv.write_record(&headers)?;

                for (record, ipa) in records.iter().zip(ipa) {
                    let mut row = record.clone();
                    row.resize(headers.len(), String::new());
                    if let Some(ipa) = ipa {
                        row[ipa_column] = ipa.clone();
                    }
                    csv.write_record(&row)?;
                }
                csv.flush()?;
            }
            Rows::Json(items) => {
                let enriched: Vec<Value> = items
                    .iter()
                    .zip(ipa)
                    .map(|(item, ipa)| enrich_json(item, ipa.as_deref()))
                    .collect();
                serde_json::to_writer_pretty(&mut writer, &enriched)?;
                writeln!(writer)?;
                writer.flush()?;
            }
        }

        Ok(())
    }

    pub fn save_enriched(&self, path: &Path, ipa: &[Option<String>]) -> Result<(), CodecError> {
        tracing::info!("Saving data to {}...", path.display());
        let file = File::create(path)?;
        self.write_enriched(BufWriter::new(file), ipa)?;
        tracing::info!("Successfully saved data to {}", path.display());
        Ok(())
    }
}

fn enrich_json(item: &Value, ipa: Option<&str>) -> Value {
    match (item, ipa) {
        (Value::Object(fields), Some(ipa)) => {
            let mut fields = fields.clone();
            fields.insert(IPA_FIELD.to_string(), Value::String(ipa.to_string()));
            Value::Object(fields)
        }
        (Value::String(word), Some(ipa)) => {
            let mut fields = Map::new();
            fields.insert(WORD_FIELD.to_string(), Value::String(word.clone()));
            fields.insert(IPA_FIELD.to_string(), Value::String(ipa.to_string()));
            Value::Object(fields)
        }
        (other, _) => other.clone(),
    }
}

fn read_csv_rows<R: Read>(reader: R) -> Result<Rows, CodecError> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CodecError::InvalidFormat("missing header row".to_string()));
    }

    let word_column = match headers.iter().position(|h| h == WORD_FIELD) {
        Some(i) => i,
        None => {
            tracing::warn!("No '{WORD_FIELD}' column, reading words from '{}'", headers[0]);
            0
        }
    };

    let records = csv
        .records()
        .map(|r| r.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(Rows::Csv {
        headers,
        records,
        word_column,
    })
}

fn read_json_rows<R: Read>(reader: R) -> Result<Rows, CodecError> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(items) => Ok(Rows::Json(items)),
        _ => Err(CodecError::InvalidFormat(
            "expected a JSON array of words or objects".to_string(),
        )),
    }
}
