//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Publisher metadata inferred from one page.
///
/// Every field is an empty string when no rule in its cascade matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Page title, whitespace-collapsed with typographic quotes.
    pub title: String,

    /// Absolute URL of the lead image.
    pub image: String,

    /// Author name without any "by" or "@" prefix.
    pub author: String,
}

impl ExtractionResult {
    /// True when no field could be extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.image.is_empty() && self.author.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ExtractionResult::default().is_empty());
    }

    #[test]
    fn test_serializes_all_fields() {
        let result = ExtractionResult {
            title: "Hello".to_string(),
            ..ExtractionResult::default()
        };
        let json = serde_json::to_string(&result).unwrap_or_default();
        assert_eq!(json, r#"{"title":"Hello","image":"","author":""}"#);
    }
}
