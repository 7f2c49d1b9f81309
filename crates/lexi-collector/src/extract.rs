use lexi_core::preprocess::collapse_whitespace;
use lexi_types::Entry;
use scraper::{ElementRef, Html, Selector};

use crate::error::CollectError;

const ENTRY: &str = "div.entry";
const HEADWORD: &str = ".mainheadword, .headword, .lexemeform";
const LANG_SPAN: &str = "[lang]";
const PART_OF_SPEECH: &str = ".partofspeech";
const GLOSS: &str = ".definitionorgloss [lang], .definition [lang], .gloss [lang]";

/// Entries found on one listing page
#[derive(Debug, Default)]
pub struct PageEntries {
    pub entries: Vec<Entry>,
    /// Entry nodes without a usable headword
    pub skipped: usize,
}

/// Pulls dictionary entries out of browse page markup
pub struct Extractor {
    entry: Selector,
    headword: Selector,
    lang_span: Selector,
    part_of_speech: Selector,
    gloss: Selector,
    include_translation: bool,
}

impl Extractor {
    pub fn new(include_translation: bool) -> Result<Self, CollectError> {
        Ok(Self {
            entry: selector(ENTRY)?,
            headword: selector(HEADWORD)?,
            lang_span: selector(LANG_SPAN)?,
            part_of_speech: selector(PART_OF_SPEECH)?,
            gloss: selector(GLOSS)?,
            include_translation,
        })
    }

    pub fn extract(&self, html: &str) -> PageEntries {
        let document = Html::parse_document(html);
        let mut page = PageEntries::default();

        for node in document.select(&self.entry) {
            match self.extract_entry(node) {
                Some(entry) => page.entries.push(entry),
                None => {
                    tracing::warn!(
                        id = node.value().attr("id").unwrap_or("?"),
                        "Skipping entry without headword"
                    );
                    page.skipped += 1;
                }
            }
        }

        page
    }

    fn extract_entry(&self, node: ElementRef<'_>) -> Option<Entry> {
        let headword_node = node.select(&self.headword).next()?;
        // Prefer the vernacular span so homograph numbers stay out of the headword
        let headword = headword_node
            .select(&self.lang_span)
            .next()
            .map(text_of)
            .unwrap_or_else(|| text_of(headword_node));

        if headword.is_empty() {
            return None;
        }

        let mut entry = Entry::new(headword);

        entry.part_of_speech = node
            .select(&self.part_of_speech)
            .map(text_of)
            .find(|pos| !pos.is_empty());

        if self.include_translation {
            for gloss in node.select(&self.gloss) {
                if let Some(lang) = gloss.value().attr("lang") {
                    entry.add_translation(lang, &text_of(gloss));
                }
            }
        }

        Some(entry)
    }
}

fn selector(css: &str) -> Result<Selector, CollectError> {
    Selector::parse(css).map_err(|e| CollectError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

fn text_of(node: ElementRef<'_>) -> String {
    collapse_whitespace(&node.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body><div id="content">
  <div class="entry" id="e1">
    <span class="mainheadword"><span lang="ff"><a href="/g1">naange</a></span></span>
    <span class="homographnumber">1</span>
    <span class="senses"><span class="sense">
      <span class="morphosyntaxanalysis"><span class="partofspeech"><span lang="en">n</span></span></span>
      <span class="definitionorgloss"><span lang="en">sun</span><span lang="fr">soleil</span></span>
    </span><span class="sense">
      <span class="definitionorgloss"><span lang="en">day</span></span>
    </span></span>
  </div>
  <div class="entry" id="e2">
    <span class="mainheadword"><span lang="ff"><a href="/g2">ndiyam</a></span></span>
    <span class="partofspeech"><span lang="en">n</span></span>
    <span class="definitionorgloss"><span lang="en">water</span></span>
  </div>
  <div class="entry" id="e3">
    <span class="lexemeform"><span lang="ff">ɓeydude</span></span>
  </div>
  <div class="entry" id="e4">
    <span class="partofspeech">v</span>
  </div>
</div></body></html>"#;

    #[test]
    fn test_extract_without_translations() {
        let page = Extractor::new(false).unwrap().extract(PAGE);

        assert_eq!(page.entries.len(), 3);
        assert_eq!(page.skipped, 1);
        assert_eq!(page.entries[0].source_text, "naange");
        assert_eq!(page.entries[0].part_of_speech.as_deref(), Some("n"));
        assert_eq!(page.entries[2].source_text, "ɓeydude");
        assert_eq!(page.entries[2].part_of_speech, None);
        assert!(page.entries.iter().all(|e| e.translations.is_empty()));
    }

    #[test]
    fn test_extract_with_translations() {
        let page = Extractor::new(true).unwrap().extract(PAGE);

        let naange = &page.entries[0];
        assert_eq!(naange.translations["en"], "sun; day");
        assert_eq!(naange.translations["fr"], "soleil");
        assert_eq!(page.entries[1].translations["en"], "water");
        assert!(page.entries[2].translations.is_empty());
    }

    #[test]
    fn test_extract_empty_page() {
        let page = Extractor::new(true)
            .unwrap()
            .extract("<html><body><p>No entries found</p></body></html>");
        assert!(page.entries.is_empty());
        assert_eq!(page.skipped, 0);
    }

    #[test]
    fn test_headword_whitespace_collapsed() {
        let html = r#"<div class="entry"><span class="headword">
            jam   waali
        </span></div>"#;
        let page = Extractor::new(false).unwrap().extract(html);
        assert_eq!(page.entries[0].source_text, "jam waali");
    }

    #[test]
    fn test_combining_marks_kept() {
        // n + COMBINING TILDE must not be composed into ñ
        let html = "<div class=\"entry\"><span class=\"headword\">n\u{303}aamde</span>\
            <span class=\"definitionorgloss\"><span lang=\"fr\">mange\u{301}</span></span></div>";
        let page = Extractor::new(true).unwrap().extract(html);
        assert_eq!(page.entries[0].source_text, "n\u{303}aamde");
        assert_eq!(page.entries[0].translations["fr"], "mange\u{301}");
    }
}
