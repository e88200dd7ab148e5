//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset comes from a byte order mark
//! or a `<meta>` declaration near the top of the document; anything else is
//! read as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document charset declarations are looked for.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Detect the character encoding of an HTML document.
///
/// Checks, in order: a byte order mark, `<meta charset>`, the
/// `http-equiv` Content-Type declaration. Unknown labels are ignored.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD.
///
/// ```
/// use publisher_info::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93Hi\x94</body></html>";
/// assert!(transcode_to_utf8(html).contains("\u{201C}Hi\u{201D}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // WHATWG maps ISO-8859-1 to windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn test_meta_charset_unquoted_and_self_closing() {
        assert_eq!(detect_encoding(b"<meta charset=utf-8/>"), UTF_8);
        assert_eq!(detect_encoding(b"<META CHARSET=Shift_JIS>").name(), "Shift_JIS");
    }

    #[test]
    fn test_http_equiv_charset() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=koi8-r">"#;
        assert_eq!(detect_encoding(html).name(), "KOI8-R");
    }

    #[test]
    fn test_byte_order_mark_wins() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\">";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn test_unknown_label_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<meta charset=\"no-such-charset\">"), UTF_8);
        assert_eq!(detect_encoding(b"<html></html>"), UTF_8);
    }

    #[test]
    fn test_latin1_body_decoded() {
        let html = b"<meta charset=\"ISO-8859-1\"><title>Caf\xE9</title>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let decoded = transcode_to_utf8(b"<p>ok \xFF\xFE still ok</p>");
        assert!(decoded.contains("ok"));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
