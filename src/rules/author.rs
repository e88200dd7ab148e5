//! Author rules.
//!
//! YouTube channel markup first, then meta tags and explicit author markup,
//! then class-name heuristics. The loose class matches are strict: they
//! must look like "First Last" to be accepted.

use crate::cascade::{Candidate, Field, FieldRuleSet, Rule};
use crate::context::ExtractionContext;
use crate::rules::Source;
use crate::{text, url_utils};

/// An author name picked from the document.
#[derive(Debug, Clone, Copy)]
pub struct AuthorRule {
    pub source: Source,
    /// Require at least two words.
    pub strict: bool,
}

impl AuthorRule {
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self { source, strict: false }
    }

    #[must_use]
    pub fn strict(source: Source) -> Self {
        Self { source, strict: true }
    }
}

impl Rule for AuthorRule {
    fn name(&self) -> &str {
        self.source.selector()
    }

    fn evaluate(&self, ctx: &ExtractionContext<'_>) -> Candidate {
        let raw = self.source.pick(ctx.document)?;

        // link text that is really a URL
        if url_utils::is_host_url(&raw) {
            return None;
        }

        let author = text::titleize(&raw, ctx.options.smart_quotes, true);
        if author.is_empty() {
            return None;
        }
        if self.strict && ctx.options.strict_authors && !text::has_two_tokens(&author) {
            tracing::trace!(rule = self.name(), %author, "single token rejected");
            return None;
        }

        Some(author)
    }
}

/// Build the author cascade.
#[must_use]
pub fn rule_set() -> FieldRuleSet {
    let rules: Vec<AuthorRule> = vec![
        // YouTube
        AuthorRule::new(Source::Text("#owner-name")),
        AuthorRule::new(Source::Text("#channel-title")),
        AuthorRule::new(Source::FirstText(r#"[class*="user-info"]"#)),
        // Regular
        AuthorRule::new(Source::Meta(r#"meta[property="author"]"#)),
        AuthorRule::new(Source::Meta(r#"meta[property="article:author"]"#)),
        AuthorRule::new(Source::Meta(r#"meta[name="author"]"#)),
        AuthorRule::new(Source::Meta(r#"meta[name="sailthru.author"]"#)),
        AuthorRule::new(Source::FirstText(r#"[rel="author"]"#)),
        AuthorRule::new(Source::FirstText(r#"[itemprop*="author"] [itemprop="name"]"#)),
        AuthorRule::new(Source::FirstText(r#"[itemprop*="author"]"#)),
        AuthorRule::new(Source::Meta(r#"meta[property="book:author"]"#)),
        AuthorRule::strict(Source::FirstText(r#"a[class*="author"]"#)),
        AuthorRule::strict(Source::FirstText(r#"[class*="author"] a"#)),
        AuthorRule::strict(Source::FirstText(r#"a[href*="/author/"]"#)),
        AuthorRule::new(Source::FirstText(r#"a[class*="screenname"]"#)),
        AuthorRule::strict(Source::FirstText(r#"[class*="author"]"#)),
        AuthorRule::strict(Source::FirstText(r#"[class*="byline"]"#)),
    ];

    FieldRuleSet::new(
        Field::Author,
        rules.into_iter().map(|r| Box::new(r) as Box<dyn Rule>).collect(),
    )
}
