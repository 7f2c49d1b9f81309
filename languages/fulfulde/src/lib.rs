pub mod rules;
pub mod transducer;

pub use rules::{RuleTable, RulesError};
pub use transducer::FulfuldeTransducer;

/// Identifiers accepted for the Fulfulde Latin-script transducer
pub const LANGUAGE_CODES: &[&str] = &["ful-Latn", "ful", "ff", "fuf-Latn", "fuv-Latn"];

pub fn supports(code: &str) -> bool {
    LANGUAGE_CODES.iter().any(|c| c.eq_ignore_ascii_case(code))
}
