//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: selecting elements, reading
//! attributes and projecting an element to its visible text.

pub use dom_query::{Document, NodeRef, Selection};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// First element matching a CSS selector, if any.
#[must_use]
pub fn first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matches = doc.select(selector);
    matches.nodes().first().map(|node| Selection::from(*node))
}

/// All elements matching a CSS selector, in document order.
#[must_use]
pub fn all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Visible text of an element: its text nodes joined by single spaces.
///
/// Markup boundaries become spaces, so `Jane<br>Doe` reads as `Jane Doe`.
/// Script and style contents are skipped. The result is not trimmed or
/// collapsed; callers normalize it.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    let mut parts = Vec::new();
    for node in sel.nodes() {
        collect_text(node, &mut parts);
    }
    parts.join(" ")
}

fn collect_text(node: &NodeRef, parts: &mut Vec<String>) {
    if node.is_text() {
        parts.push(node.text().to_string());
        return;
    }

    if node.is_element()
        && matches!(node.node_name().as_deref(), Some("script" | "style" | "noscript"))
    {
        return;
    }

    for child in node.children() {
        collect_text(&child, parts);
    }
}
