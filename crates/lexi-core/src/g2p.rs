use crate::error::TranscribeError;

/// Grapheme-to-phoneme interface for language implementations
pub trait Transducer: Send + Sync {
    /// Language and script identifier ("ful-Latn", ...)
    fn language_code(&self) -> &str;

    /// Normalize a word before matching
    fn normalize(&self, word: &str) -> String;

    /// Break a word into phoneme segments
    fn segments(&self, word: &str) -> Result<Vec<String>, TranscribeError>;

    /// Phonemic transcription with segments separated by single spaces
    fn transliterate(&self, word: &str) -> Result<String, TranscribeError> {
        let segments = self.segments(word)?;
        if segments.is_empty() {
            return Err(TranscribeError::EmptyWord);
        }
        Ok(segments.join(" "))
    }
}
