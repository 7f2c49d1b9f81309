use std::collections::HashMap;
use std::path::Path;

/// Grapheme to phoneme table
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<String, String>,
    /// Longest grapheme, in chars
    max_len: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rule on line {line}: '{content}'")]
    Malformed { line: usize, content: String },
}

impl RuleTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            max_len: 0,
        }
    }

    /// Fulfulde Latin orthography
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        // Vowels; length comes from doubling
        let vowels = [("a", "a"), ("e", "e"), ("i", "i"), ("o", "o"), ("u", "u")];

        let consonants = [
            ("b", "b"),
            ("c", "tʃ"),
            ("d", "d"),
            ("f", "f"),
            ("g", "ɡ"),
            ("h", "h"),
            ("j", "dʒ"),
            ("k", "k"),
            ("l", "l"),
            ("m", "m"),
            ("n", "n"),
            ("p", "p"),
            ("q", "q"),
            ("r", "r"),
            ("s", "s"),
            ("t", "t"),
            ("v", "v"),
            ("w", "w"),
            ("x", "x"),
            ("y", "j"),
            ("z", "z"),
            ("ñ", "ɲ"),
            ("ny", "ɲ"),
            ("ŋ", "ŋ"),
            ("'", "ʔ"),
        ];

        let implosives = [
            ("ɓ", "ɓ"),
            ("ɗ", "ɗ"),
            ("ƴ", "ʔʲ"),
            ("'b", "ɓ"),
            ("'d", "ɗ"),
            ("'y", "ʔʲ"),
        ];

        let prenasalized = [("mb", "ᵐb"), ("nd", "ⁿd"), ("ng", "ᵑɡ"), ("nj", "ⁿdʒ")];

        for (grapheme, phoneme) in vowels
            .into_iter()
            .chain(consonants)
            .chain(implosives)
            .chain(prenasalized)
        {
            table.insert(grapheme, phoneme);
        }

        table
    }

    /// Load rules from TSV file (grapheme\tphoneme format, '#' starts a comment)
    pub fn load_from_file(path: &Path) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, RulesError> {
        let mut table = Self::new();

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim_end_matches('\r');
            if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
                continue;
            }

            match trimmed.split_once('\t') {
                Some((grapheme, phoneme)) if !grapheme.trim().is_empty() => {
                    table.insert(grapheme.trim(), phoneme.trim());
                }
                _ => {
                    return Err(RulesError::Malformed {
                        line: i + 1,
                        content: trimmed.to_string(),
                    });
                }
            }
        }

        Ok(table)
    }

    pub fn insert(&mut self, grapheme: &str, phoneme: &str) {
        let grapheme = grapheme.to_lowercase();
        self.max_len = self.max_len.max(grapheme.chars().count());
        self.rules.insert(grapheme, phoneme.to_string());
    }

    /// Rules from `other` override existing ones
    pub fn merge(mut self, other: RuleTable) -> Self {
        for (grapheme, phoneme) in other.rules {
            self.insert(&grapheme, &phoneme);
        }
        self
    }

    /// Longest grapheme matching at the start of `chars`, with its length in chars
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        let mut key = String::new();
        let upper = self.max_len.min(chars.len());

        (1..=upper).rev().find_map(|len| {
            key.clear();
            key.extend(&chars[..len]);
            self.rules.get(&key).map(|phoneme| (len, phoneme.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_longest_match_prefers_digraph() {
        let table = RuleTable::with_defaults();
        assert_eq!(table.longest_match(&chars("ndiyam")), Some((2, "ⁿd")));
        assert_eq!(table.longest_match(&chars("nadde")), Some((1, "n")));
        assert_eq!(table.longest_match(&chars("'baaba")), Some((2, "ɓ")));
        assert_eq!(table.longest_match(&chars("7")), None);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let table = RuleTable::parse("# extra rules\n\nhw\tʍ\r\nkp\tk͡p\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.longest_match(&chars("kpa")), Some((2, "k͡p")));
    }

    #[test]
    fn test_parse_reports_line() {
        let err = RuleTable::parse("a\ta\nbroken\n").unwrap_err();
        assert!(matches!(err, RulesError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_merge_overrides() {
        let extra = RuleTable::parse("c\tc\nsh\tʃ\n").unwrap();
        let table = RuleTable::with_defaults().merge(extra);

        assert_eq!(table.longest_match(&chars("ca")), Some((1, "c")));
        assert_eq!(table.longest_match(&chars("sho")), Some((2, "ʃ")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.tsv");
        std::fs::write(&path, "ɓh\tɓ\n").unwrap();

        let table = RuleTable::load_from_file(&path).unwrap();
        assert_eq!(table.len(), 1);
    }
}
