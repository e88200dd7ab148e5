//! Inputs shared by every rule during one extraction.

use dom_query::Document;

use crate::Options;

/// Everything a rule may look at while extracting one page.
///
/// Borrowed for the duration of a single extraction and never mutated.
#[derive(Clone, Copy)]
pub struct ExtractionContext<'a> {
    /// The parsed page.
    pub document: &'a Document,

    /// URL the caller originally asked for. Video pages are recognized
    /// from this one.
    pub requested_url: &'a str,

    /// URL after following redirects. Relative image URLs resolve
    /// against it.
    pub resolved_url: &'a str,

    /// Normalization and acceptance settings.
    pub options: &'a Options,
}

impl<'a> ExtractionContext<'a> {
    #[must_use]
    pub fn new(
        document: &'a Document,
        requested_url: &'a str,
        resolved_url: &'a str,
        options: &'a Options,
    ) -> Self {
        Self {
            document,
            requested_url,
            resolved_url,
            options,
        }
    }
}
