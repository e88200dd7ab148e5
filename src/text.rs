//! Text normalization for titles and author names.
//!
//! Whitespace collapsing, typographic quote conversion and byline prefix
//! stripping. The smart-quote passes run in a fixed order: each one
//! assumes the quotes handled by the previous passes are already converted.

use std::sync::LazyLock;

use regex::Regex;

// `\w`, `\W` and `\b` below are ASCII on purpose: accented letters next to
// a quote must not turn it into an apostrophe.

#[allow(clippy::expect_used)]
static TRIPLE_PRIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'''").expect("valid regex"));

#[allow(clippy::expect_used)]
static OPENING_DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|[^A-Za-z0-9_])"([A-Za-z0-9_])"#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static CLOSING_DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\x{201C}[^"]*)"([^"]*$|[^\x{201C}"]*\x{201C})"#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static TRAILING_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^0-9])""#).expect("valid regex"));

#[allow(clippy::expect_used)]
static DOUBLE_PRIME_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"''").expect("valid regex"));

#[allow(clippy::expect_used)]
static OPENING_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^A-Za-z0-9_])'(\S)").expect("valid regex")
});

#[allow(clippy::expect_used)]
static IN_WORD_APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([a-z])'([a-z])").expect("valid regex")
});

#[allow(clippy::expect_used)]
static YEAR_ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\x{2018})([0-9]{2}[^\x{2019}]*)(\x{2018}([^0-9]|$)|$|\x{2019}[a-z])")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static CLOSING_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((\x{2018}[^']*)|[a-z])'([^0-9]|$)").expect("valid regex")
});

#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

#[allow(clippy::expect_used)]
static BY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:by\b:?|@)\s*").expect("valid regex")
});

#[allow(clippy::expect_used)]
static TWO_TOKENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+\s+\S+").expect("valid regex"));

const LEFT_SINGLE: char = '\u{2018}';
const RIGHT_SINGLE: char = '\u{2019}';

/// Convert straight quotes and apostrophes to typographic ones.
///
/// ```rust
/// use publisher_info::text::smart_quotes;
///
/// assert_eq!(smart_quotes(r#"He said "hi""#), "He said \u{201C}hi\u{201D}");
/// assert_eq!(smart_quotes("Don't"), "Don\u{2019}t");
/// ```
#[must_use]
pub fn smart_quotes(input: &str) -> String {
    let s = TRIPLE_PRIME.replace_all(input, "\u{2034}");
    let s = OPENING_DOUBLE.replace_all(&s, "${1}\u{201C}${2}");
    let s = CLOSING_DOUBLE.replace_all(&s, "${1}\u{201D}${2}");
    let s = TRAILING_DOUBLE.replace_all(&s, "${1}\u{201D}");
    let s = DOUBLE_PRIME_PAIR.replace_all(&s, "\u{2033}");
    let s = OPENING_SINGLE.replace_all(&s, "${1}\u{2018}${2}");
    let s = IN_WORD_APOSTROPHE.replace_all(&s, "${1}\u{2019}${2}");
    let s = YEAR_ABBREVIATION.replace_all(&s, "\u{2019}${2}${3}");
    let s = CLOSING_SINGLE.replace_all(&s, "${1}\u{2019}${3}");
    let s = fix_backwards_apostrophes(&s);
    s.replace('"', "\u{2033}").replace('\'', "\u{2032}")
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_quote(c: char) -> bool {
    c == LEFT_SINGLE || c == RIGHT_SINGLE
}

/// Turn an opening single quote into an apostrophe when no closing quote
/// can pair with it (`‘tis`, `‘em`).
///
/// A `‘` is flipped when it does not follow a word character and the text
/// after it is a run of word-final `’` segments ending either with no more
/// quotes or with a quote that starts a new word after a non-word
/// character.
fn fix_backwards_apostrophes(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if !chars.contains(&LEFT_SINGLE) {
        return s.to_string();
    }

    chars
        .iter()
        .enumerate()
        .map(|(pos, &c)| {
            let after_word = pos > 0 && is_word(chars[pos - 1]);
            if c == LEFT_SINGLE && !after_word && pairs_as_apostrophe(&chars, pos + 1) {
                RIGHT_SINGLE
            } else {
                c
            }
        })
        .collect()
}

fn pairs_as_apostrophe(chars: &[char], start: usize) -> bool {
    let word_at = |i: usize| chars.get(i).is_some_and(|&c| is_word(c));
    let mut i = start;

    loop {
        let Some(q) = (i..chars.len()).find(|&k| is_quote(chars[k])) else {
            // no quote left before the end
            return true;
        };

        // a non-word char right before a quote that opens a word, with the
        // non-word char itself not following a word char
        let non_word_before_quote = |w: usize| {
            w >= i && !is_word(chars[w]) && (w == 0 || !word_at(w - 1))
        };
        if q > 0 && non_word_before_quote(q - 1) && word_at(q + 1) {
            return true;
        }
        if chars.get(q + 1).copied().is_some_and(is_quote)
            && non_word_before_quote(q)
            && word_at(q + 2)
        {
            return true;
        }

        if chars[q] == RIGHT_SINGLE && word_at(q + 1) {
            i = q + 1;
        } else {
            return false;
        }
    }
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Strip a leading "by" or "@" from an author candidate.
///
/// ```rust
/// use publisher_info::text::remove_by_prefix;
///
/// assert_eq!(remove_by_prefix("By Jane Doe"), "Jane Doe");
/// assert_eq!(remove_by_prefix("@janedoe"), "janedoe");
/// assert_eq!(remove_by_prefix("Byron Smith"), "Byron Smith");
/// ```
#[must_use]
pub fn remove_by_prefix(s: &str) -> String {
    BY_PREFIX.replace(s, "").trim().to_string()
}

/// Normalize a title or author candidate.
///
/// Collapses whitespace, optionally converts quotes, and for authors strips
/// the byline prefix.
#[must_use]
pub fn titleize(s: &str, smart: bool, remove_by: bool) -> String {
    let mut title = collapse_whitespace(s);
    if smart {
        title = smart_quotes(&title);
    }
    if remove_by {
        title = remove_by_prefix(&title);
    }
    title
}

/// True when the text has at least two whitespace-separated tokens.
#[must_use]
pub fn has_two_tokens(s: &str) -> bool {
    TWO_TOKENS.is_match(s)
}
