//! Paragraph-level boilerplate classification for HTML.
//!
//! `textsift` splits a page into text blocks, judges each block on its
//! length, link density and stopword density, then revises the ambiguous
//! ones from their neighbors so that navigation, footers and link lists fall
//! away and the article text remains.
//!
//! # Quick start
//!
//! ```rust
//! let html = "<html><body><p>This is the main content.</p></body></html>";
//! let text = textsift::extract(html, "English").unwrap();
//! println!("{text}");
//! ```
//!
//! # Pipeline
//!
//! 1. [`dom::html_to_blocks`] parses and cleans the HTML into [`TextBlock`]s.
//! 2. The paragraph builder keeps the non-empty blocks as [`Paragraph`]s.
//! 3. Word and stopword counts are computed against the language's stoplist.
//! 4. Each paragraph gets a context-free [`ClassType`].
//! 5. Short and near-good paragraphs are resolved from their neighbors, and
//!    headings that introduce good content are kept.
//!
//! Stoplists come from a [`StoplistProvider`]. The free functions use the
//! embedded lists; [`Extractor`] accepts any provider.

#[macro_use]
mod log;

mod builder;
mod classify;
mod config;
pub mod dom;
mod error;
mod features;
mod paragraph;
mod revise;
pub mod stoplists;

pub use config::Config;
pub use dom::{Segment, TextBlock};
pub use error::TextsiftError;
pub use paragraph::{ClassType, Paragraph};
pub use stoplists::{
    all_stoplists, get_stoplist, CustomStoplists, EmbeddedStoplists, Stoplist, StoplistProvider,
};

/// Classify pre-built blocks against an explicit stoplist.
///
/// This is the whole classification core; every other entry point resolves
/// a stoplist and produces blocks, then calls this.
pub fn classify_blocks<I>(blocks: I, stoplist: &Stoplist, config: &Config) -> Vec<Paragraph>
where
    I: IntoIterator<Item = TextBlock>,
{
    let mut paragraphs = builder::build_paragraphs(blocks);
    debug!(paragraphs = paragraphs.len(), "built paragraphs");
    features::extract_features(&mut paragraphs, stoplist);
    classify::classify_paragraphs(&mut paragraphs, config);
    revise::revise_paragraph_classification(&mut paragraphs, config);
    paragraphs
}

/// Classify the paragraphs of `html` against an explicit stoplist.
///
/// An empty stoplist with [`Config::language_independent`] classifies by
/// length and link density only.
pub fn classify_with_stoplist(html: &str, stoplist: &Stoplist, config: &Config) -> Vec<Paragraph> {
    classify_blocks(dom::html_to_blocks(html), stoplist, config)
}

/// Text of the good paragraphs of `html`, one per line.
pub fn extract_with_stoplist(html: &str, stoplist: &Stoplist, config: &Config) -> String {
    join_good(&classify_with_stoplist(html, stoplist, config))
}

/// Classify every paragraph of `html` with the default config.
///
/// # Example
///
/// ```rust
/// let paragraphs = textsift::classify("<p>Hello world</p>", "English").unwrap();
/// assert_eq!(paragraphs[0].text, "Hello world");
/// ```
pub fn classify(html: &str, language: &str) -> Result<Vec<Paragraph>, TextsiftError> {
    classify_with(html, language, &Config::default())
}

/// Classify every paragraph of `html` with a custom config.
///
/// Fails with [`TextsiftError::UnknownLanguage`] before parsing when the
/// language has no embedded stoplist.
pub fn classify_with(
    html: &str,
    language: &str,
    config: &Config,
) -> Result<Vec<Paragraph>, TextsiftError> {
    Extractor::embedded(config.clone()).classify(html, language)
}

/// Main-content text of `html` with the default config.
///
/// # Example
///
/// ```rust
/// let text = textsift::extract("<body></body>", "English").unwrap();
/// assert!(text.is_empty());
/// ```
pub fn extract(html: &str, language: &str) -> Result<String, TextsiftError> {
    extract_with(html, language, &Config::default())
}

/// Main-content text of `html` with a custom config.
pub fn extract_with(html: &str, language: &str, config: &Config) -> Result<String, TextsiftError> {
    Extractor::embedded(config.clone()).extract(html, language)
}

/// Names of the languages with an embedded stoplist.
pub fn available_languages() -> Vec<&'static str> {
    stoplists::available_languages()
}

/// A stoplist provider paired with a config.
///
/// Both are read-only during a request, so one extractor can serve many
/// requests, including from several threads when the provider is `Sync`.
#[derive(Debug, Clone)]
pub struct Extractor<P> {
    provider: P,
    config: Config,
}

impl Extractor<&'static EmbeddedStoplists> {
    /// Extractor over the embedded stoplists.
    pub fn embedded(config: Config) -> Self {
        Self::new(EmbeddedStoplists::shared(), config)
    }
}

impl<P: StoplistProvider> Extractor<P> {
    pub fn new(provider: P, config: Config) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Classify every paragraph of `html`.
    pub fn classify(&self, html: &str, language: &str) -> Result<Vec<Paragraph>, TextsiftError> {
        let stoplist = self.provider.stoplist(language)?;
        Ok(classify_with_stoplist(html, stoplist, &self.config))
    }

    /// Good paragraph text of `html`, newline-separated, in document order.
    pub fn extract(&self, html: &str, language: &str) -> Result<String, TextsiftError> {
        self.classify(html, language).map(|ps| join_good(&ps))
    }
}

fn join_good(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .filter(|p| !p.is_boilerplate())
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "This is a sentence that contains many common English stopwords and it \
        should be classified as good content by the algorithm because the text is long \
        enough that it exceeds the length_high threshold of two hundred characters.";

    #[test]
    fn test_unknown_language_fails_before_parsing() {
        let err = classify("<p>hello</p>", "Klingon").unwrap_err();
        assert_eq!(err, TextsiftError::UnknownLanguage("Klingon".to_string()));
        assert_eq!(err.to_string(), "unknown language: Klingon");
        assert!(extract("<p>hello</p>", "Klingon").is_err());
    }

    #[test]
    fn test_extractor_with_custom_provider() {
        let provider = CustomStoplists::new().with_language(
            "Mini",
            ["this", "is", "a", "that", "and", "it", "be", "by", "the", "of"],
        );
        let extractor = Extractor::new(provider, Config::default());
        let html = format!("<body><p>{GOOD}</p></body>");
        let ps = extractor.classify(&html, "mini").unwrap();
        assert_eq!(ps.len(), 1);
        assert_eq!(ps[0].class_type, ClassType::Good);
        assert!(extractor.classify(&html, "English").is_err());
    }

    #[test]
    fn test_extractor_borrowed_provider() {
        let provider = EmbeddedStoplists::new();
        let extractor = Extractor::new(&provider, Config::default().with_no_headings(true));
        assert!(extractor.config().no_headings);
        assert!(extractor.extract("<p>x</p>", "French").is_ok());
    }

    #[test]
    fn test_classify_blocks_directly() {
        let stoplist: Stoplist = ["the", "of"].iter().map(|s| s.to_string()).collect();
        let blocks = vec![
            TextBlock::new("doc.para", "/doc[1]/para[1]", "   "),
            TextBlock::new("doc.para", "/doc[1]/para[2]", "the end of the story"),
        ];
        let ps = classify_blocks(blocks, &stoplist, &Config::default());
        assert_eq!(ps.len(), 1);
        assert_eq!(ps[0].xpath, "/doc[1]/para[2]");
        assert_eq!(ps[0].cf_class, ClassType::NearGood);
        // no good or bad neighbors at all → bad
        assert_eq!(ps[0].class_type, ClassType::Bad);
    }

    #[test]
    fn test_join_good_skips_everything_else() {
        let html = format!("<body><p>{GOOD}</p><p><a>nav</a></p><p>{GOOD}</p></body>");
        let text = extract(&html, "English").unwrap();
        assert_eq!(text, format!("{GOOD}\n{GOOD}"));
    }
}
