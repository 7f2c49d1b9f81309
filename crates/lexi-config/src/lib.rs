use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexi_core::telemetry::LogFormat;
use serde::{Deserialize, Serialize};

use self::collector::CollectorConfig;
use self::transcriber::TranscriberConfig;

pub mod collector;
pub mod transcriber;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub collector: CollectorConfig,
    pub transcriber: TranscriberConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Build the config from environment variables, falling back to defaults
    pub fn new() -> Self {
        let log_format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::from_name(&v))
            .unwrap_or_default();

        Config {
            collector: CollectorConfig::new(),
            transcriber: TranscriberConfig::new(),
            log_format,
        }
    }

    /// Load a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Read an env var and parse it, keeping the default on absence or parse failure
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_fills_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "collector": {{ "locale": "fr", "letters": ["a", "ɓ"] }}, "log_format": "json" }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.collector.locale, "fr");
        assert_eq!(config.collector.letters, vec!["a", "ɓ"]);
        assert_eq!(config.collector.max_pages_per_letter, 50);
        assert_eq!(config.transcriber.language, "ful-Latn");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(&dir.path().join("absent.json")).is_err());
    }
}
