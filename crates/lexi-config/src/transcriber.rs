use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "ful-Latn".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranscriberConfig {
    /// Transducer identifier, language plus script
    #[serde(default = "default_language")]
    pub language: String,
    /// Extra grapheme<TAB>phoneme rules merged over the built-in table
    pub rules_path: Option<PathBuf>,
}

impl TranscriberConfig {
    pub fn new() -> Self {
        let language = env::var("G2P_LANGUAGE").unwrap_or_else(|_| default_language());
        let rules_path = env::var("G2P_RULES").ok().map(PathBuf::from);

        Self {
            language,
            rules_path,
        }
    }
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            rules_path: None,
        }
    }
}
