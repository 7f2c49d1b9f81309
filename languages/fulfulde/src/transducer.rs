use lexi_core::error::TranscribeError;
use lexi_core::g2p::Transducer;
use unicode_normalization::UnicodeNormalization;

use crate::rules::RuleTable;

const LENGTH_MARK: char = 'ː';

/// Rule-based transducer for Fulfulde written in Latin script
pub struct FulfuldeTransducer {
    rules: RuleTable,
}

impl FulfuldeTransducer {
    /// Create a transducer with the built-in rule table
    pub fn new() -> Self {
        Self::with_rules(RuleTable::with_defaults())
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        tracing::debug!("Fulfulde transducer ready with {} rules", rules.len());
        Self { rules }
    }

    fn starts_digraph(&self, rest: &[char]) -> bool {
        matches!(self.rules.longest_match(rest), Some((len, _)) if len > 1)
    }
}

impl Default for FulfuldeTransducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transducer for FulfuldeTransducer {
    fn language_code(&self) -> &str {
        "ful-Latn"
    }

    fn normalize(&self, word: &str) -> String {
        word.trim()
            .nfc()
            .flat_map(char::to_lowercase)
            .map(|c| match c {
                // Typographic apostrophes all spell the glottal stop
                '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
                c => c,
            })
            .collect()
    }

    fn segments(&self, word: &str) -> Result<Vec<String>, TranscribeError> {
        let normalized = self.normalize(word);
        let chars: Vec<char> = normalized.chars().collect();
        let mut segments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c.is_whitespace() || c == '-' {
                i += 1;
                continue;
            }

            let (len, phoneme) =
                self.rules
                    .longest_match(&chars[i..])
                    .ok_or_else(|| TranscribeError::UnmappedGrapheme {
                        word: normalized.clone(),
                        grapheme: c,
                        position: i,
                    })?;
            i += len;

            let mut segment = phoneme.to_string();
            // Doubled single letters are long: aa -> aː, ll -> lː. A repeat that
            // opens a longer grapheme stays separate: nny -> n ɲ
            if len == 1 && chars.get(i) == Some(&c) && !self.starts_digraph(&chars[i..]) {
                segment.push(LENGTH_MARK);
                i += 1;
            }

            if !segment.is_empty() {
                segments.push(segment);
            }
        }

        Ok(segments)
    }
}
