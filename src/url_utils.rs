//! URL Utility Functions
//!
//! Absolute/relative URL detection and resolution against the page URL.
//! Failures never propagate: a URL that cannot be resolved degrades to the
//! base URL.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// A scheme prefix: a letter, then letters, digits, `+`, `.` or `-`, then `:`.
#[allow(clippy::expect_used)]
static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*:").expect("valid regex")
});

/// Check whether a string starts with a URL scheme.
///
/// This is purely syntactic: `"mailto:x"` and `"foo:bar"` are absolute,
/// `"//cdn.example.com/a.png"` and `"/img/a.png"` are not.
#[must_use]
pub fn is_absolute(url_str: &str) -> bool {
    SCHEME_PREFIX.is_match(url_str)
}

/// Check whether a string parses as a complete absolute URL.
#[must_use]
pub fn is_valid_absolute(url_str: &str) -> bool {
    Url::parse(url_str).is_ok()
}

/// Check whether a string is an absolute URL pointing at a host.
///
/// `"By: Jane Doe"` parses with the scheme `by` but has no host, so it is
/// not a link.
#[must_use]
pub fn is_host_url(url_str: &str) -> bool {
    Url::parse(url_str).is_ok_and(|url| url.has_host())
}

/// Check whether a candidate is usable as a link target.
///
/// Relative references are always accepted since they can be resolved
/// later; absolute ones must parse.
#[must_use]
pub fn is_url(url_str: &str) -> bool {
    !is_absolute(url_str) || is_valid_absolute(url_str)
}

/// Resolve a possibly relative URL against a base.
///
/// # Arguments
/// * `base` - The base URL, normally the page URL after redirects
/// * `relative` - The URL to resolve
///
/// # Returns
/// * `relative` unchanged when it is already absolute
/// * the joined URL otherwise
/// * `base` unchanged when either part is malformed
#[must_use]
pub fn resolve(base: &str, relative: &str) -> String {
    if is_absolute(relative) {
        return relative.to_string();
    }

    match Url::parse(base).and_then(|b| b.join(relative)) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            tracing::trace!(base, relative, %err, "URL resolution failed, keeping base");
            base.to_string()
        }
    }
}
