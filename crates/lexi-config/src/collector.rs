use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

/// Fulfulde Latin alphabet in dictionary browse order
const DEFAULT_LETTERS: &str = "a,b,ɓ,c,d,ɗ,e,f,g,h,i,j,k,l,m,n,ñ,ŋ,o,p,r,s,t,u,w,y,ƴ";

fn default_base_url() -> String {
    "https://www.webonary.org/fulfulde".to_string()
}

fn default_key() -> String {
    "ff".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_letters() -> Vec<String> {
    parse_letters(DEFAULT_LETTERS)
}

fn default_max_pages() -> u32 {
    50
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("lexi-collector/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CollectorConfig {
    /// Dictionary site root, without the browse path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Vernacular language key used by the browse pages
    #[serde(default = "default_key")]
    pub key: String,
    /// Interface language, also selects gloss language
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_letters")]
    pub letters: Vec<String>,
    /// Safety cap on pagination per letter
    #[serde(default = "default_max_pages")]
    pub max_pages_per_letter: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CollectorConfig {
    pub fn new() -> Self {
        let base_url = env::var("WEBONARY_BASE_URL").unwrap_or_else(|_| default_base_url());
        let key = env::var("WEBONARY_KEY").unwrap_or_else(|_| default_key());
        let locale = env::var("WEBONARY_LOCALE").unwrap_or_else(|_| default_locale());
        let letters = env::var("WEBONARY_LETTERS")
            .map(|v| parse_letters(&v))
            .unwrap_or_else(|_| default_letters());
        let user_agent = env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            base_url,
            key,
            locale,
            letters,
            max_pages_per_letter: env_or("MAX_PAGES_PER_LETTER", default_max_pages()),
            timeout_seconds: env_or("TIMEOUT_SECONDS", default_timeout_seconds()),
            user_agent,
        }
    }

    /// Listing endpoint; query parameters are added per request
    pub fn browse_endpoint(&self) -> String {
        format!(
            "{}/browse/browse-vernacular/",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key: default_key(),
            locale: default_locale(),
            letters: default_letters(),
            max_pages_per_letter: default_max_pages(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

/// Split a comma separated letter list, dropping blanks
pub fn parse_letters(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters() {
        assert_eq!(parse_letters(" a, ɓ ,,ŋ "), vec!["a", "ɓ", "ŋ"]);
        assert!(parse_letters("").is_empty());
    }

    #[test]
    fn test_default_alphabet_has_implosives() {
        let letters = default_letters();
        assert_eq!(letters.len(), 27);
        assert!(letters.contains(&"ɗ".to_string()));
        assert!(letters.contains(&"ƴ".to_string()));
    }

    #[test]
    fn test_browse_endpoint_trims_slash() {
        let config = CollectorConfig {
            base_url: "https://example.org/dict/".to_string(),
            ..CollectorConfig::default()
        };
        assert_eq!(
            config.browse_endpoint(),
            "https://example.org/dict/browse/browse-vernacular/"
        );
    }
}
