use std::fmt;

/// Classification label for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassType {
    Good,
    NearGood,
    Short,
    Bad,
}

impl ClassType {
    /// Good and bad are the only classes neighbor lookups stop at.
    pub(crate) fn is_settled(self) -> bool {
        matches!(self, ClassType::Good | ClassType::Bad)
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClassType::Good => "good",
            ClassType::NearGood => "neargood",
            ClassType::Short => "short",
            ClassType::Bad => "bad",
        })
    }
}

/// Paragraphs per class, for pass summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) struct ClassCounts {
    pub good: usize,
    pub near_good: usize,
    pub short: usize,
    pub bad: usize,
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
impl ClassCounts {
    pub fn tally<I: IntoIterator<Item = ClassType>>(classes: I) -> Self {
        let mut counts = Self::default();
        for class in classes {
            match class {
                ClassType::Good => counts.good += 1,
                ClassType::NearGood => counts.near_good += 1,
                ClassType::Short => counts.short += 1,
                ClassType::Bad => counts.bad += 1,
            }
        }
        counts
    }
}

/// A classified block of text extracted from HTML.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Paragraph {
    /// Dot-separated DOM path without ordinals (e.g., "html.body.div.p").
    pub dom_path: String,
    /// XPath with ordinals (e.g., "/html[1]/body[1]/div[2]/p[1]").
    pub xpath: String,
    /// Trimmed, whitespace-normalized text.
    pub text: String,
    /// Whether the block sits under an `h1`..`h6` element.
    pub heading: bool,
    /// Word tokens in `text`.
    pub words_count: usize,
    /// Word tokens found in the request's stoplist.
    pub stopwords_count: usize,
    /// Chars of `text` inside `<a>` elements.
    pub chars_count_in_links: usize,
    /// Inline tags inside the block.
    pub tags_count: usize,
    /// Class assigned from the paragraph's own features.
    pub cf_class: ClassType,
    /// Final class after neighbor and heading revision.
    pub class_type: ClassType,
}

impl Paragraph {
    pub(crate) fn new(
        dom_path: String,
        xpath: String,
        text: String,
        heading: bool,
        chars_count_in_links: usize,
        tags_count: usize,
    ) -> Self {
        Self {
            dom_path,
            xpath,
            text,
            heading,
            words_count: 0,
            stopwords_count: 0,
            chars_count_in_links,
            tags_count,
            cf_class: ClassType::Short,
            class_type: ClassType::Short,
        }
    }

    /// Text length in chars (Unicode scalar values, not bytes).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Anything not finalized as good counts as boilerplate.
    pub fn is_boilerplate(&self) -> bool {
        self.class_type != ClassType::Good
    }

    /// `chars_count_in_links / max(1, len)`.
    pub fn link_density(&self) -> f64 {
        self.chars_count_in_links as f64 / self.len().max(1) as f64
    }

    /// `stopwords_count / max(1, words_count)`.
    pub fn stopword_density(&self) -> f64 {
        self.stopwords_count as f64 / self.words_count.max(1) as f64
    }
}
