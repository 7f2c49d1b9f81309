use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default orthographic preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Canonical composition only: compatibility folding would turn
        // modifier letters such as ⁿ into plain n
        let text: String = text.nfc().collect();

        collapse_whitespace(&text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
