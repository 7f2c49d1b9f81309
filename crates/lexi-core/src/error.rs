#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscribeError {
    #[error("Empty word")]
    EmptyWord,

    #[error("No rule for '{grapheme}' at position {position} in '{word}'")]
    UnmappedGrapheme {
        /// The normalized word; `position` counts its characters
        word: String,
        grapheme: char,
        position: usize,
    },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}
