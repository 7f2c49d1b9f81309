use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One scraped dictionary record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Headword in the vernacular orthography
    pub source_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Glosses keyed by language code
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl Entry {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            part_of_speech: None,
            translations: BTreeMap::new(),
        }
    }

    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    /// Add a gloss; repeated glosses in one language are joined with "; "
    pub fn add_translation(&mut self, lang: &str, text: &str) {
        let text = text.trim();
        if lang.is_empty() || text.is_empty() {
            return;
        }

        match self.translations.get_mut(lang) {
            Some(existing) => {
                if !existing.split("; ").any(|gloss| gloss == text) {
                    existing.push_str("; ");
                    existing.push_str(text);
                }
            }
            None => {
                self.translations.insert(lang.to_string(), text.to_string());
            }
        }
    }
}

/// A word paired with its phonemic transcription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    /// Space separated phoneme segments
    pub ipa: String,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, ipa: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ipa: ipa.into(),
        }
    }

    pub fn to_tsv_line(&self) -> String {
        format!("{}\t{}", self.word, self.ipa)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Infer the format from a file extension, ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_extension(s).ok_or_else(|| format!("unknown output format: {s}"))
    }
}
