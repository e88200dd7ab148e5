//! Field Rule Sets
//!
//! The ordered rule lists for the image, title and author fields. Every rule
//! pairs a selector step (a [`Source`]) with the validator of its field.
//!
//! The rule sets are built once, on first use, and shared afterwards.

use std::sync::LazyLock;

use dom_query::Document;

use crate::cascade::FieldRuleSet;
use crate::dom;

pub mod author;
pub mod image;
pub mod title;

pub use author::AuthorRule;
pub use image::{ImageRule, YoutubeThumbnailRule};
pub use title::TitleRule;

/// Image rules, in precedence order.
pub static IMAGE_RULES: LazyLock<FieldRuleSet> = LazyLock::new(image::rule_set);

/// Title rules, in precedence order.
pub static TITLE_RULES: LazyLock<FieldRuleSet> = LazyLock::new(title::rule_set);

/// Author rules, in precedence order.
pub static AUTHOR_RULES: LazyLock<FieldRuleSet> = LazyLock::new(author::rule_set);

/// Where a rule looks for its raw candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// `content` attribute of the first element matching the selector.
    Meta(&'static str),
    /// Visible text of the first element matching the selector.
    Text(&'static str),
    /// Visible text of the first matching element whose text is not blank.
    FirstText(&'static str),
    /// `src` attribute of the first element matching the selector.
    Src(&'static str),
    /// `src` attribute of the first matching element with a non-empty `src`.
    FirstSrc(&'static str),
}

impl Source {
    /// The CSS selector this source queries.
    #[must_use]
    pub fn selector(&self) -> &'static str {
        match *self {
            Self::Meta(s) | Self::Text(s) | Self::FirstText(s) | Self::Src(s) | Self::FirstSrc(s) => s,
        }
    }

    /// Pick the raw candidate from the document.
    #[must_use]
    pub fn pick(&self, doc: &Document) -> Option<String> {
        match *self {
            Self::Meta(selector) => dom::first(doc, selector)
                .and_then(|el| dom::get_attribute(&el, "content")),
            Self::Text(selector) => dom::first(doc, selector).map(|el| dom::visible_text(&el)),
            Self::FirstText(selector) => dom::all(doc, selector)
                .iter()
                .map(|el| dom::visible_text(el).trim().to_string())
                .find(|text| !text.is_empty()),
            Self::Src(selector) => dom::first(doc, selector)
                .and_then(|el| dom::get_attribute(&el, "src")),
            Self::FirstSrc(selector) => dom::all(doc, selector)
                .iter()
                .filter_map(|el| dom::get_attribute(el, "src"))
                .find(|src| !src.trim().is_empty()),
        }
    }
}
