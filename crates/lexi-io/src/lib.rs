use std::path::{Path, PathBuf};

pub mod entries;
pub mod error;
pub mod tsv;
pub mod wordlist;

pub use entries::{read_entries, save_entries, write_entries};
pub use error::CodecError;
pub use tsv::{save_tsv, write_tsv};
pub use wordlist::WordList;

/// Column delimiter shared by every CSV the tools read and write
pub const CSV_DELIMITER: u8 = b';';

/// Word column name in collector output
pub const WORD_FIELD: &str = "source_text";

/// Transcription field added to enriched word lists
pub const IPA_FIELD: &str = "ipa";

/// `dir/name.csv` -> `dir/name_ipa.<ext>`
pub fn ipa_sibling(input: &Path, ext: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_ipa.{ext}"))
}

/// Format implied by the path's extension
pub fn format_of(path: &Path) -> Result<lexi_types::OutputFormat, CodecError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    lexi_types::OutputFormat::from_extension(&ext).ok_or(CodecError::UnsupportedFormat(ext))
}
