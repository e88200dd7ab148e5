//! Title rules.
//!
//! Social card titles first, then common blog markup, then the document
//! `<title>` as last resort.

use crate::cascade::{Candidate, Field, FieldRuleSet, Rule};
use crate::context::ExtractionContext;
use crate::rules::Source;
use crate::text;

/// A title picked from the document and titleized.
#[derive(Debug, Clone, Copy)]
pub struct TitleRule(pub Source);

impl Rule for TitleRule {
    fn name(&self) -> &str {
        self.0.selector()
    }

    fn evaluate(&self, ctx: &ExtractionContext<'_>) -> Candidate {
        let raw = self.0.pick(ctx.document)?;
        let title = text::titleize(&raw, ctx.options.smart_quotes, false);
        (!title.is_empty()).then_some(title)
    }
}

/// Build the title cascade.
#[must_use]
pub fn rule_set() -> FieldRuleSet {
    let sources = [
        Source::Meta(r#"meta[property="og:title"]"#),
        Source::Meta(r#"meta[name="twitter:title"]"#),
        Source::Meta(r#"meta[name="sailthru.title"]"#),
        Source::Text(".post-title"),
        Source::Text(".entry-title"),
        Source::Text(r#"[itemtype="http://schema.org/BlogPosting"] [itemprop="name"]"#),
        Source::Text(r#"h1[class*="title"] a"#),
        Source::Text(r#"h1[class*="title"]"#),
        Source::Text("title"),
    ];

    let rules = sources
        .into_iter()
        .map(|s| Box::new(TitleRule(s)) as Box<dyn Rule>)
        .collect();

    FieldRuleSet::new(Field::Title, rules)
}
