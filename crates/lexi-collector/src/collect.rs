use lexi_config::collector::CollectorConfig;
use lexi_types::Entry;
use reqwest::Url;

use crate::error::CollectError;
use crate::extract::Extractor;
use crate::source::PageSource;

/// Outcome of one collector run
#[derive(Debug, Default)]
pub struct CollectReport {
    /// Entries in scrape order
    pub entries: Vec<Entry>,
    pub letters_visited: usize,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub entries_skipped: usize,
}

/// Walks the browse pages letter by letter
pub struct Collector<S: PageSource> {
    source: S,
    config: CollectorConfig,
    endpoint: Url,
    extractor: Extractor,
}

impl<S: PageSource> Collector<S> {
    pub fn new(
        source: S,
        config: CollectorConfig,
        include_translation: bool,
    ) -> Result<Self, CollectError> {
        let endpoint_str = config.browse_endpoint();
        let endpoint = Url::parse(&endpoint_str).map_err(|e| CollectError::InvalidUrl {
            url: endpoint_str,
            reason: e.to_string(),
        })?;

        Ok(Self {
            source,
            config,
            endpoint,
            extractor: Extractor::new(include_translation)?,
        })
    }

    /// Listing page URL for a letter, pages counted from 1
    pub fn browse_url(&self, letter: &str, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("letter", letter)
            .append_pair("key", &self.config.key)
            .append_pair("lang", &self.config.locale)
            .append_pair("pagenr", &page.to_string());
        url
    }

    pub async fn run(&self) -> CollectReport {
        let mut report = CollectReport::default();

        for letter in &self.config.letters {
            self.collect_letter(letter, &mut report).await;
            report.letters_visited += 1;
        }

        tracing::info!(
            letters = report.letters_visited,
            pages = report.pages_fetched,
            failed = report.pages_failed,
            skipped = report.entries_skipped,
            "Collected {} entries",
            report.entries.len()
        );

        report
    }

    async fn collect_letter(&self, letter: &str, report: &mut CollectReport) {
        let mut previous: Option<Vec<String>> = None;
        let before = report.entries.len();

        for page in 1..=self.config.max_pages_per_letter {
            let url = self.browse_url(letter, page);

            let html = match self.source.fetch(url.as_str()).await {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!("Failed to fetch letter '{letter}' page {page}: {e}");
                    report.pages_failed += 1;
                    break;
                }
            };
            report.pages_fetched += 1;

            let found = self.extractor.extract(&html);
            report.entries_skipped += found.skipped;

            if found.entries.is_empty() {
                tracing::debug!("Letter '{letter}' ends at page {page}");
                break;
            }

            // Some sites serve the last page again for out-of-range page numbers
            let headwords: Vec<String> = found
                .entries
                .iter()
                .map(|e| e.source_text.clone())
                .collect();
            if previous.as_ref() == Some(&headwords) {
                tracing::debug!("Letter '{letter}' page {page} repeats the previous page");
                break;
            }

            tracing::debug!("Letter '{letter}' page {page}: {} entries", found.entries.len());
            report.entries.extend(found.entries);
            previous = Some(headwords);

            if page == self.config.max_pages_per_letter {
                tracing::warn!(
                    "Letter '{letter}' reached the page cap of {}",
                    self.config.max_pages_per_letter
                );
            }
        }

        tracing::info!(
            "Letter '{letter}': {} entries",
            report.entries.len() - before
        );
    }
}
