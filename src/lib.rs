//! # publisher-info
//!
//! Infers the title, lead image and author of a web page.
//!
//! Each field has an ordered cascade of heuristic rules: Open Graph and
//! Twitter card tags, common blog markup, class-name heuristics and, for
//! YouTube pages, the video thumbnail. The first rule producing a valid
//! value wins; fields nothing matched stay empty.
//!
//! ## Quick Start
//!
//! ```rust
//! use publisher_info::extract;
//!
//! let html = r#"<html><head>
//!   <meta property="og:title" content="  Hello   World  ">
//!   <meta property="og:image" content="/img/pic.jpg">
//!   <meta name="author" content="By Jane Doe">
//! </head><body></body></html>"#;
//!
//! let result = extract(html, "https://example.com/post", "https://example.com/post");
//! assert_eq!(result.title, "Hello World");
//! assert_eq!(result.image, "https://example.com/img/pic.jpg");
//! assert_eq!(result.author, "Jane Doe");
//! ```
//!
//! Extraction never fails. Unknown or broken markup just yields empty
//! fields.

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Inputs shared by the rules of one extraction.
pub mod context;

/// Ordered rule evaluation.
pub mod cascade;

/// Image, title and author rule sets.
pub mod rules;

/// Whitespace, quote and byline normalization.
pub mod text;

/// URL detection and resolution.
pub mod url_utils;

/// YouTube video identification.
pub mod video;

/// Reply payloads for publisher info requests.
pub mod publisher;

use dom_query::Document;

// Public API - re-exports
pub use context::ExtractionContext;
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractionResult;
pub use video::ThumbnailQuality;

/// Extracts publisher metadata from a parsed document using default options.
///
/// # Arguments
///
/// * `doc` - The parsed page
/// * `requested_url` - The URL the caller asked for
/// * `resolved_url` - The URL after redirects; relative URLs resolve against it
#[must_use]
pub fn extract_metadata(doc: &Document, requested_url: &str, resolved_url: &str) -> ExtractionResult {
    extract_metadata_with_options(doc, requested_url, resolved_url, &Options::default())
}

/// Extracts publisher metadata from a parsed document with custom options.
///
/// # Example
///
/// ```rust
/// use publisher_info::{dom, extract_metadata_with_options, Options, ThumbnailQuality};
///
/// let doc = dom::parse("<html></html>");
/// let options = Options {
///     thumbnail_quality: ThumbnailQuality::High,
///     ..Options::default()
/// };
/// let url = "https://youtu.be/abc123";
/// let result = extract_metadata_with_options(&doc, url, url, &options);
/// assert_eq!(result.image, "https://img.youtube.com/vi/abc123/hqdefault.jpg");
/// ```
#[must_use]
pub fn extract_metadata_with_options(
    doc: &Document,
    requested_url: &str,
    resolved_url: &str,
    options: &Options,
) -> ExtractionResult {
    let ctx = ExtractionContext::new(doc, requested_url, resolved_url, options);

    ExtractionResult {
        image: rules::IMAGE_RULES.run(&ctx),
        title: rules::TITLE_RULES.run(&ctx),
        author: rules::AUTHOR_RULES.run(&ctx),
    }
}

/// Parses an HTML string and extracts its publisher metadata.
#[must_use]
pub fn extract(html: &str, requested_url: &str, resolved_url: &str) -> ExtractionResult {
    extract_with_options(html, requested_url, resolved_url, &Options::default())
}

/// Parses an HTML string and extracts its publisher metadata with custom options.
#[must_use]
pub fn extract_with_options(
    html: &str,
    requested_url: &str,
    resolved_url: &str,
    options: &Options,
) -> ExtractionResult {
    let doc = dom::parse(html);
    extract_metadata_with_options(&doc, requested_url, resolved_url, options)
}

/// Extracts publisher metadata from HTML bytes with automatic encoding detection.
///
/// The charset is taken from `<meta charset>` or the `http-equiv`
/// Content-Type declaration, defaulting to UTF-8. Invalid sequences become
/// U+FFFD rather than errors.
///
/// # Example
///
/// ```rust
/// use publisher_info::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let result = extract_bytes(html, "https://example.com/", "https://example.com/");
/// assert_eq!(result.title, "Café");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], requested_url: &str, resolved_url: &str) -> ExtractionResult {
    extract_bytes_with_options(html, requested_url, resolved_url, &Options::default())
}

/// Extracts publisher metadata from HTML bytes with custom options and
/// automatic encoding detection.
#[must_use]
pub fn extract_bytes_with_options(
    html: &[u8],
    requested_url: &str,
    resolved_url: &str,
    options: &Options,
) -> ExtractionResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, requested_url, resolved_url, options)
}
