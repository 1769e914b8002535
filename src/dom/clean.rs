// Removal of markup that never carries main content.

use ego_tree::iter::Edge;
use ego_tree::{NodeId, NodeRef};
use scraper::node::Node;
use scraper::Html;

/// What happens to an element while the document is re-serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// Element and subtree are kept.
    Keep,
    /// Element and its whole subtree disappear.
    Drop,
    /// The element's own tag disappears; its children move up a level.
    Unwrap,
}

fn disposition(tag: &str) -> Disposition {
    match tag {
        // scripts, style sheets and document metadata
        "script" | "style" | "head" | "noscript" => Disposition::Drop,
        // form controls
        "input" | "button" | "select" | "textarea" => Disposition::Drop,
        // embedded content
        "embed" | "object" | "applet" | "iframe" | "layer" | "param" => Disposition::Drop,
        // a form wrapper often encloses the whole page
        "form" => Disposition::Unwrap,
        _ => Disposition::Keep,
    }
}

/// Elements with no closing tag.
fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "hr" | "img" | "link" | "meta" | "source" | "track"
            | "wbr"
    )
}

/// Parse `html`, strip unwanted elements and comments, and parse again.
///
/// scraper's arena cannot detach nodes cheaply, so the cleaned tree is
/// serialized to a string and re-parsed instead.
pub(crate) fn clean_document(html: &str) -> Html {
    let parsed = Html::parse_document(html);
    let mut out = String::with_capacity(html.len());
    write_tree(parsed.tree.root(), &mut out);
    Html::parse_document(&out)
}

/// Serialize the kept part of the tree under `root`.
///
/// Walks open and close edges instead of recursing, so nesting depth is
/// bounded only by the parser.
fn write_tree(root: NodeRef<Node>, out: &mut String) {
    // Root of the dropped subtree currently being skipped.
    let mut skipping: Option<NodeId> = None;
    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => {
                if skipping.is_none() {
                    skipping = open_node(node, out);
                }
            }
            Edge::Close(node) => match skipping {
                Some(id) if id == node.id() => skipping = None,
                Some(_) => {}
                None => close_node(node, out),
            },
        }
    }
}

/// Write the start of `node`. Returns its id when its subtree is dropped.
fn open_node(node: NodeRef<Node>, out: &mut String) -> Option<NodeId> {
    match node.value() {
        Node::Element(el) => {
            let tag = el.name();
            match disposition(tag) {
                Disposition::Drop => return Some(node.id()),
                Disposition::Unwrap => {}
                Disposition::Keep => {
                    out.push('<');
                    out.push_str(tag);
                    for (name, value) in el.attrs() {
                        out.push(' ');
                        out.push_str(name);
                        out.push_str("=\"");
                        push_escaped(value, true, out);
                        out.push('"');
                    }
                    out.push('>');
                }
            }
        }
        // Entities were decoded by the first parse; re-encode them so the
        // second parse reads text as text.
        Node::Text(text) => push_escaped(&text.text, false, out),
        Node::Document
        | Node::Fragment
        | Node::Comment(_)
        | Node::Doctype(_)
        | Node::ProcessingInstruction(_) => {}
    }
    None
}

fn close_node(node: NodeRef<Node>, out: &mut String) {
    if let Node::Element(el) = node.value() {
        let tag = el.name();
        if disposition(tag) == Disposition::Keep && !is_void(tag) {
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn push_escaped(s: &str, in_attr: bool, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
