/// Thresholds for paragraph classification.
///
/// Immutable once a request starts: build a new value for per-request
/// overrides instead of mutating a shared one.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Config {
    /// Paragraphs shorter than this (in chars) are short by default.
    pub length_low: usize,
    /// Paragraphs at least this long are trusted as good during revision.
    pub length_high: usize,
    /// Stopword density floor for near-good.
    pub stopwords_low: f64,
    /// Stopword density floor for good.
    pub stopwords_high: f64,
    /// Link density above which a paragraph is always bad.
    pub max_link_density: f64,
    /// Char window in which a heading looks for following good content.
    pub max_heading_distance: usize,
    /// Disables the heading-specific revision rules.
    pub no_headings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length_low: 70,
            length_high: 200,
            stopwords_low: 0.30,
            stopwords_high: 0.32,
            max_link_density: 0.2,
            max_heading_distance: 200,
            no_headings: false,
        }
    }
}

impl Config {
    pub fn with_length_low(mut self, n: usize) -> Self {
        self.length_low = n;
        self
    }
    pub fn with_length_high(mut self, n: usize) -> Self {
        self.length_high = n;
        self
    }
    pub fn with_stopwords_low(mut self, v: f64) -> Self {
        self.stopwords_low = v;
        self
    }
    pub fn with_stopwords_high(mut self, v: f64) -> Self {
        self.stopwords_high = v;
        self
    }
    pub fn with_max_link_density(mut self, v: f64) -> Self {
        self.max_link_density = v;
        self
    }
    pub fn with_max_heading_distance(mut self, n: usize) -> Self {
        self.max_heading_distance = n;
        self
    }
    pub fn with_no_headings(mut self, v: bool) -> Self {
        self.no_headings = v;
        self
    }

    /// Config for pages in an unknown language: stopword thresholds at zero,
    /// so length and link density decide alone. Pair with an empty stoplist.
    pub fn language_independent() -> Self {
        Self::default()
            .with_stopwords_low(0.0)
            .with_stopwords_high(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.length_low, 70);
        assert_eq!(c.length_high, 200);
        assert_eq!(c.stopwords_low, 0.30);
        assert_eq!(c.stopwords_high, 0.32);
        assert_eq!(c.max_link_density, 0.2);
        assert_eq!(c.max_heading_distance, 200);
        assert!(!c.no_headings);
    }

    #[test]
    fn test_setters_chain() {
        let c = Config::default()
            .with_length_low(10)
            .with_length_high(20)
            .with_max_link_density(0.5)
            .with_no_headings(true);
        assert_eq!(c.length_low, 10);
        assert_eq!(c.length_high, 20);
        assert_eq!(c.max_link_density, 0.5);
        assert!(c.no_headings);
        // untouched fields keep their defaults
        assert_eq!(c.max_heading_distance, 200);
    }

    #[test]
    fn test_language_independent() {
        let c = Config::language_independent();
        assert_eq!(c.stopwords_low, 0.0);
        assert_eq!(c.stopwords_high, 0.0);
        assert_eq!(c.length_low, 70);
    }
}
