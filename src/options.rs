//! Configuration options for metadata extraction.
//!
//! The `Options` struct tunes how candidates are normalized and accepted.
//! The rule order itself is fixed.

use crate::video::ThumbnailQuality;

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use publisher_info::{Options, ThumbnailQuality};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     thumbnail_quality: ThumbnailQuality::High,
///     smart_quotes: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Thumbnail size used when the page is a YouTube video.
    ///
    /// Default: `ThumbnailQuality::Standard` (`sddefault.jpg`)
    pub thumbnail_quality: ThumbnailQuality,

    /// Convert straight quotes in titles and authors to typographic ones.
    ///
    /// Default: `true`
    pub smart_quotes: bool,

    /// Require the loose class-based author rules to match at least two
    /// words ("First Last").
    ///
    /// Turning this off lets single-word matches such as navigation labels
    /// through, so it is mostly useful for sites known to use handles.
    ///
    /// Default: `true`
    pub strict_authors: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            thumbnail_quality: ThumbnailQuality::default(),
            smart_quotes: true,
            strict_authors: true,
        }
    }
}
