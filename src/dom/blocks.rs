// Block segmentation of a cleaned DOM tree.

use std::collections::HashMap;

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Elements that open and close a block.
const BLOCK_TAGS: &[&str] = &[
    "body", "blockquote", "caption", "center", "col", "colgroup", "dd", "div", "dl", "dt",
    "fieldset", "form", "legend", "optgroup", "option", "p", "pre", "table", "td", "textarea",
    "tfoot", "th", "thead", "tr", "ul", "li", "h1", "h2", "h3", "h4", "h5", "h6",
];

fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// A run of text inside a block, whitespace-normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Whether the run sits inside an `<a>` element.
    pub in_link: bool,
}

/// A text-bearing block element as seen by the paragraph builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub dom_path: String,
    pub xpath: String,
    pub heading: bool,
    /// Inline descendant tags.
    pub tags_count: usize,
    pub segments: Vec<Segment>,
}

impl TextBlock {
    /// Convenience constructor for a block with a single text run.
    pub fn new(dom_path: &str, xpath: &str, text: &str) -> Self {
        Self {
            dom_path: dom_path.to_string(),
            xpath: xpath.to_string(),
            heading: dom_path.split('.').any(is_heading_tag),
            tags_count: 0,
            segments: vec![Segment {
                text: text.to_string(),
                in_link: false,
            }],
        }
    }

    /// Append a text run.
    pub fn push(&mut self, text: &str, in_link: bool) {
        self.segments.push(Segment {
            text: text.to_string(),
            in_link,
        });
    }
}

struct Frame {
    /// How many children of each tag this element has had so far.
    seen: HashMap<String, usize>,
    /// End offsets of this element's entry in the joined paths.
    dom_end: usize,
    xpath_end: usize,
    /// Whether this element or an ancestor is a heading.
    heading: bool,
}

/// The chain of open elements from the root to the current node.
///
/// Both path renderings are kept joined, so a prefix of any depth is a
/// slice rather than a rebuild.
#[derive(Default)]
pub(crate) struct ElementPath {
    frames: Vec<Frame>,
    dom: String,
    xpath: String,
    /// Direct children of the document.
    top_seen: HashMap<String, usize>,
}

impl ElementPath {
    pub fn push(&mut self, tag: &str) {
        let seen = match self.frames.last_mut() {
            Some(parent) => &mut parent.seen,
            None => &mut self.top_seen,
        };
        let ordinal = seen.entry(tag.to_string()).or_insert(0);
        *ordinal += 1;
        let ordinal = *ordinal;

        if !self.frames.is_empty() {
            self.dom.push('.');
        }
        self.dom.push_str(tag);
        self.xpath.push('/');
        self.xpath.push_str(tag);
        self.xpath.push('[');
        self.xpath.push_str(&ordinal.to_string());
        self.xpath.push(']');

        let heading = is_heading_tag(tag) || self.frames.last().is_some_and(|f| f.heading);
        self.frames.push(Frame {
            seen: HashMap::new(),
            dom_end: self.dom.len(),
            xpath_end: self.xpath.len(),
            heading,
        });
    }

    pub fn pop(&mut self) {
        self.frames.pop();
        let (dom_end, xpath_end) = self
            .frames
            .last()
            .map_or((0, 0), |f| (f.dom_end, f.xpath_end));
        self.dom.truncate(dom_end);
        self.xpath.truncate(xpath_end);
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Dotted path of the outermost `depth` elements, e.g. "html.body.div.p".
    fn dom_path_at(&self, depth: usize) -> String {
        match depth {
            0 => String::new(),
            d => self.dom[..self.frames[d - 1].dom_end].to_string(),
        }
    }

    /// e.g. "/html[1]/body[1]/div[2]/p[1]"
    fn xpath_at(&self, depth: usize) -> String {
        match depth {
            0 => "/".to_string(),
            d => self.xpath[..self.frames[d - 1].xpath_end].to_string(),
        }
    }

    fn in_heading_at(&self, depth: usize) -> bool {
        depth > 0 && self.frames[depth - 1].heading
    }
}

/// Collapse whitespace runs: a run holding a line break becomes `\n`, any
/// other run a single space. Leading and trailing runs are kept.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // None: not in a run; Some(true): run with a line break.
    let mut run: Option<bool> = None;
    for ch in text.chars() {
        if ch.is_whitespace() {
            let newline = ch == '\n' || ch == '\r';
            run = Some(run.unwrap_or(false) || newline);
        } else {
            if let Some(newline) = run.take() {
                out.push(if newline { '\n' } else { ' ' });
            }
            out.push(ch);
        }
    }
    if let Some(newline) = run {
        out.push(if newline { '\n' } else { ' ' });
    }
    out
}

struct BlockWalker {
    path: ElementPath,
    blocks: Vec<TextBlock>,
    open: TextBlock,
    /// Depth of the element the open block started in, lowered when that
    /// element (or an ancestor) closes before the block gets any text.
    anchor: usize,
    link_depth: usize,
    after_br: bool,
}

impl BlockWalker {
    fn new() -> Self {
        Self {
            path: ElementPath::default(),
            blocks: Vec::new(),
            open: TextBlock::default(),
            anchor: 0,
            link_depth: 0,
            after_br: false,
        }
    }

    /// Close the open block (kept only if it received text) and start a new
    /// one at the current path.
    fn flush(&mut self) {
        let done = std::mem::take(&mut self.open);
        if !done.segments.is_empty() {
            self.blocks.push(done);
        }
        self.anchor = self.path.depth();
        self.after_br = false;
    }

    fn push_text(&mut self, text: &str, in_link: bool) {
        if self.open.segments.is_empty() {
            // Paths are rendered only for blocks that end up holding text.
            self.open.dom_path = self.path.dom_path_at(self.anchor);
            self.open.xpath = self.path.xpath_at(self.anchor);
            self.open.heading = self.path.in_heading_at(self.anchor);
        }
        self.open.push(text, in_link);
    }

    fn pop(&mut self) {
        self.path.pop();
        self.anchor = self.anchor.min(self.path.depth());
    }

    fn open_node(&mut self, node: NodeRef<Node>) {
        match node.value() {
            Node::Element(el) => self.open_element(el.name()),
            Node::Text(text) => {
                if text.text.chars().all(char::is_whitespace) {
                    return;
                }
                let in_link = self.link_depth > 0;
                self.push_text(&normalize_whitespace(&text.text), in_link);
                self.after_br = false;
            }
            _ => {}
        }
    }

    fn open_element(&mut self, tag: &str) {
        self.path.push(tag);
        if is_block_tag(tag) {
            self.flush();
        } else if tag == "br" {
            self.pop();
            if self.after_br {
                // <br><br> ends the block; the first <br> no longer counts as a tag.
                self.open.tags_count = self.open.tags_count.saturating_sub(1);
                self.flush();
            } else {
                self.push_text(" ", false);
                self.open.tags_count += 1;
                self.after_br = true;
            }
        } else {
            if tag == "a" {
                self.link_depth += 1;
            }
            self.open.tags_count += 1;
            self.after_br = false;
        }
    }

    fn close_node(&mut self, node: NodeRef<Node>) {
        let Node::Element(el) = node.value() else {
            return;
        };
        let tag = el.name();
        if is_block_tag(tag) {
            self.pop();
            self.flush();
        } else if tag != "br" {
            self.pop();
            if tag == "a" {
                self.link_depth -= 1;
            }
        }
    }
}

/// Walk a cleaned document into blocks, in document order.
pub(crate) fn collect_blocks(doc: &Html) -> Vec<TextBlock> {
    let mut walker = BlockWalker::new();
    for edge in doc.tree.root().traverse() {
        match edge {
            Edge::Open(node) => walker.open_node(node),
            Edge::Close(node) => walker.close_node(node),
        }
    }
    walker.flush();
    walker.blocks
}
