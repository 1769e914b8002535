//! HTML front end: turns a raw document into ordered [`TextBlock`]s.
//!
//! The classifier itself never looks at markup. Anything that can produce
//! blocks (another parser, a PDF layout engine) can feed
//! [`classify_blocks`](crate::classify_blocks) directly.

mod blocks;
mod clean;

pub use blocks::{Segment, TextBlock};

pub(crate) use blocks::normalize_whitespace;

/// Parse `html`, drop non-content elements and walk the result into blocks.
pub fn html_to_blocks(html: &str) -> Vec<TextBlock> {
    let doc = clean::clean_document(html);
    blocks::collect_blocks(&doc)
}
