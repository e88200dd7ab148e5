//! Rule Cascade Engine
//!
//! Each metadata field has an ordered list of rules. Rules are tried one at
//! a time, in order, and the first one to produce a non-empty value wins.
//! Order encodes precedence, so evaluation is a sequential early-exit scan:
//! once a rule matches, no later rule runs.

use std::fmt;

use crate::context::ExtractionContext;

/// A provisional field value proposed by a rule.
///
/// `None` and `Some("")` both mean "no match, try the next rule".
pub type Candidate = Option<String>;

/// One extraction strategy for one field.
///
/// Rules are stateless; they read the context, pick a value, validate and
/// normalize it, and return it.
pub trait Rule: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Propose a value for the field, already validated and normalized.
    fn evaluate(&self, ctx: &ExtractionContext<'_>) -> Candidate;
}

/// The metadata fields the extractor fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Image,
    Title,
    Author,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Title => "title",
            Self::Author => "author",
        })
    }
}

/// The ordered rules for exactly one field.
///
/// Built once and shared by every extraction.
pub struct FieldRuleSet {
    field: Field,
    rules: Vec<Box<dyn Rule>>,
}

impl FieldRuleSet {
    #[must_use]
    pub fn new(field: Field, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { field, rules }
    }

    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    /// Rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Run the cascade for this field.
    #[must_use]
    pub fn run(&self, ctx: &ExtractionContext<'_>) -> String {
        run_cascade(self.field, &self.rules, ctx)
    }
}

impl fmt::Debug for FieldRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRuleSet")
            .field("field", &self.field)
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Evaluate `rules` in order and return the first accepted value.
///
/// Returns an empty string when every rule is exhausted.
#[must_use]
pub fn run_cascade(field: Field, rules: &[Box<dyn Rule>], ctx: &ExtractionContext<'_>) -> String {
    for (index, rule) in rules.iter().enumerate() {
        match rule.evaluate(ctx) {
            Some(value) if !value.is_empty() => {
                tracing::debug!(%field, rule = rule.name(), index, %value, "rule matched");
                return value;
            }
            _ => tracing::trace!(%field, rule = rule.name(), index, "no match"),
        }
    }

    tracing::debug!(%field, rules = rules.len(), "no rule matched");
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dom, Options};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Fixed {
        value: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl Rule for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn evaluate(&self, _ctx: &ExtractionContext<'_>) -> Candidate {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value.map(str::to_string)
        }
    }

    fn fixed(value: Option<&'static str>, calls: &Arc<AtomicUsize>) -> Box<dyn Rule> {
        Box::new(Fixed {
            value,
            calls: Arc::clone(calls),
        })
    }

    fn run(rules: &FieldRuleSet) -> String {
        let doc = dom::parse("<html></html>");
        let options = Options::default();
        let ctx = ExtractionContext::new(&doc, "https://example.com/", "https://example.com/", &options);
        rules.run(&ctx)
    }

    #[test]
    fn test_first_match_wins_and_stops() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let set = FieldRuleSet::new(
            Field::Title,
            vec![
                fixed(None, &before),
                fixed(Some(""), &before),
                fixed(Some("winner"), &before),
                fixed(Some("loser"), &after),
            ],
        );

        assert_eq!(run(&set), "winner");
        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_exhausted_cascade_is_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let set = FieldRuleSet::new(Field::Author, vec![fixed(None, &calls), fixed(Some(""), &calls)]);

        assert_eq!(run(&set), "");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_rule_set() {
        let set = FieldRuleSet::new(Field::Image, Vec::new());
        assert_eq!(run(&set), "");
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let calls = Arc::new(AtomicUsize::new(0));
        let set = FieldRuleSet::new(Field::Image, vec![fixed(None, &calls)]);
        assert_eq!(format!("{set:?}"), r#"FieldRuleSet { field: Image, rules: ["fixed"] }"#);
        assert_eq!(set.field().to_string(), "image");
    }
}
