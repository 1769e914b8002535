// Paragraph construction from text blocks.

use crate::dom::{normalize_whitespace, TextBlock};
use crate::paragraph::Paragraph;

/// Turn blocks into paragraphs, one per non-empty block, in the same order.
///
/// Text runs are concatenated, trimmed and normalized once more so that
/// whitespace at run boundaries collapses. Blocks left empty are dropped.
pub fn build_paragraphs<I>(blocks: I) -> Vec<Paragraph>
where
    I: IntoIterator<Item = TextBlock>,
{
    blocks.into_iter().filter_map(build_paragraph).collect()
}

fn build_paragraph(block: TextBlock) -> Option<Paragraph> {
    let mut raw = String::new();
    let mut link_chars = 0;
    for segment in &block.segments {
        let run = normalize_whitespace(&segment.text);
        if segment.in_link {
            link_chars += run.chars().count();
        }
        raw.push_str(&run);
    }

    let text = normalize_whitespace(raw.trim());
    if text.is_empty() {
        return None;
    }
    // Trimming may remove whitespace counted inside a link.
    let chars_count_in_links = link_chars.min(text.chars().count());

    Some(Paragraph::new(
        block.dom_path,
        block.xpath,
        text,
        block.heading,
        chars_count_in_links,
        block.tags_count,
    ))
}
