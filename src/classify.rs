// Context-free classification: each paragraph judged on its own features.

use crate::config::Config;
use crate::paragraph::{ClassType, Paragraph};

/// Class of a single paragraph from its own features. First matching rule wins.
pub fn context_free_class(paragraph: &Paragraph, config: &Config) -> ClassType {
    let stopword_density = paragraph.stopword_density();

    if paragraph.link_density() > config.max_link_density {
        return ClassType::Bad;
    }

    if paragraph.len() < config.length_low {
        return if paragraph.chars_count_in_links > 0 {
            ClassType::Bad
        } else if stopword_density >= config.stopwords_high {
            ClassType::NearGood
        } else {
            ClassType::Short
        };
    }

    if stopword_density >= config.stopwords_high {
        ClassType::Good
    } else if stopword_density >= config.stopwords_low {
        ClassType::NearGood
    } else {
        ClassType::Bad
    }
}

/// Set `cf_class` (and provisionally `class_type`) on every paragraph.
pub fn classify_paragraphs(paragraphs: &mut [Paragraph], config: &Config) {
    for paragraph in paragraphs.iter_mut() {
        let class = context_free_class(paragraph, config);
        paragraph.cf_class = class;
        paragraph.class_type = class;
        trace!(xpath = %paragraph.xpath, class = %class, "context-free class");
    }
    debug!(
        counts = ?crate::paragraph::ClassCounts::tally(paragraphs.iter().map(|p| p.cf_class)),
        "context-free classes"
    );
}
