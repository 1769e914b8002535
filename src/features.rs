// Per-paragraph word features.

use crate::paragraph::Paragraph;
use crate::stoplists::Stoplist;

/// Word tokens of `text`: whitespace-separated, with punctuation stripped
/// from both ends. Tokens made only of punctuation are skipped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation() || is_unicode_punct(c)))
        .filter(|token| !token.is_empty())
}

/// Common non-ASCII punctuation: quotes, dashes, ellipsis, guillemets.
fn is_unicode_punct(c: char) -> bool {
    matches!(
        c,
        '\u{00A1}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2039}' | '\u{203A}'
            | '\u{3001}' | '\u{3002}'
    )
}

/// Set `words_count` and `stopwords_count` on every paragraph.
pub fn extract_features(paragraphs: &mut [Paragraph], stoplist: &Stoplist) {
    for paragraph in paragraphs.iter_mut() {
        let mut total = 0;
        let mut stop = 0;
        for word in words(&paragraph.text) {
            total += 1;
            if stoplist.contains(&word.to_lowercase()) {
                stop += 1;
            }
        }
        paragraph.words_count = total;
        paragraph.stopwords_count = stop;
    }
}
