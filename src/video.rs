//! YouTube video identification.
//!
//! Recognizes the many historical YouTube URL shapes and pulls out the
//! video id, so a video page can use its canonical thumbnail as lead image.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static YOUTUBE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtube|youtu\.be|i\.ytimg\.").expect("valid regex")
});

#[allow(clippy::expect_used)]
static SHORT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtube://|https?://youtu\.be/").expect("valid regex")
});

#[allow(clippy::expect_used)]
static INLINE_V: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/v/|/vi/").expect("valid regex")
});

#[allow(clippy::expect_used)]
static PARAMETER_V: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v=|vi=").expect("valid regex")
});

#[allow(clippy::expect_used)]
static AN_WEBP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/an_webp/").expect("valid regex")
});

#[allow(clippy::expect_used)]
static EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/embed/").expect("valid regex")
});

#[allow(clippy::expect_used)]
static USER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/user/").expect("valid regex")
});

#[allow(clippy::expect_used)]
static ATTRIBUTION_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/attribution_link\?.*v%3D([^%&]*)(?:%26|&|$)").expect("valid regex")
});

/// Video hosting service a URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoService {
    YouTube,
}

impl fmt::Display for VideoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YouTube => f.write_str("youtube"),
        }
    }
}

/// A recognized video and its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId {
    pub id: String,
    pub service: VideoService,
}

/// Size of the YouTube thumbnail used as lead image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThumbnailQuality {
    /// 120x90, `default.jpg`
    Default,
    /// 320x180, `mqdefault.jpg`
    Medium,
    /// 480x360, `hqdefault.jpg`
    High,
    /// 640x480, `sddefault.jpg`
    #[default]
    Standard,
    /// Full resolution, `maxresdefault.jpg`. Not every video has one.
    MaxRes,
}

impl ThumbnailQuality {
    /// File name of the thumbnail on the image host.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Default => "default.jpg",
            Self::Medium => "mqdefault.jpg",
            Self::High => "hqdefault.jpg",
            Self::Standard => "sddefault.jpg",
            Self::MaxRes => "maxresdefault.jpg",
        }
    }
}

/// Identify the YouTube video a URL points to.
///
/// Only URLs mentioning a YouTube host are considered. The id patterns are
/// tried in order: short link, `/v/` or `/vi/` path, `v=` or `vi=`
/// parameter, `/an_webp/` path, `/embed/` path, `/user/` page with a
/// trailing video segment, and finally `attribution_link` redirects.
///
/// # Returns
/// * `None` when the URL is not a YouTube URL or no id could be found
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<VideoId> {
    if !YOUTUBE_HOST.is_match(url) {
        return None;
    }

    let id = youtube_id(url).filter(|id| !id.is_empty())?;

    Some(VideoId {
        id,
        service: VideoService::YouTube,
    })
}

fn youtube_id(url: &str) -> Option<String> {
    for pattern in [&*SHORT_LINK, &*INLINE_V] {
        if pattern.is_match(url) {
            return segment_after(pattern, url).map(strip_parameters);
        }
    }

    if PARAMETER_V.is_match(url) {
        return segment_after(&PARAMETER_V, url)
            .and_then(|rest| rest.split('&').next())
            .map(str::to_string);
    }

    for pattern in [&*AN_WEBP, &*EMBED] {
        if pattern.is_match(url) {
            return segment_after(pattern, url).map(strip_parameters);
        }
    }

    if USER.is_match(url) {
        return url.rsplit('/').next().map(strip_parameters);
    }

    ATTRIBUTION_LINK
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text between the first and second occurrence of `pattern`.
fn segment_after<'a>(pattern: &Regex, url: &'a str) -> Option<&'a str> {
    pattern.splitn(url, 3).nth(1)
}

/// Cut a raw id at the first query or path remainder.
fn strip_parameters(raw: &str) -> String {
    raw.split(['?', '/']).next().unwrap_or(raw).to_string()
}

/// Canonical thumbnail URL for a YouTube video id.
#[must_use]
pub fn thumbnail_url(id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{id}/{}", quality.file_name())
}
