//! Publisher info replies.
//!
//! Whatever fetches pages hands the outcome to [`respond`], which runs the
//! extractor on success and builds the reply sent back to the requester.
//! Fetch failures are reported with the best-known URL and never reach the
//! extractor.
//!
//! ```rust
//! use publisher_info::publisher::{respond, FetchedPage};
//!
//! let page = FetchedPage {
//!     resolved_url: "https://example.com/post".to_string(),
//!     body: br#"<meta property="og:title" content="Hello">"#.to_vec(),
//! };
//! let info = respond("https://example.com/p", Ok(page));
//! assert!(info.error.is_none());
//! assert_eq!(info.body.url, "https://example.com/post");
//! assert_eq!(info.body.title.as_deref(), Some("Hello"));
//! ```

use serde::{Deserialize, Serialize};

use crate::{extract_bytes_with_options, Error, ExtractionResult, Options, Result};

/// Prefix of the name a reply is delivered under.
pub const REPLY_PREFIX: &str = "got-publisher-info-";

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL after following redirects.
    pub resolved_url: String,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Reply to a publisher info request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherInfo {
    /// Failure message, `None` on success.
    pub error: Option<String>,
    pub body: PublisherBody,
}

/// Payload of a [`PublisherInfo`] reply.
///
/// On failure only `url` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherBody {
    /// Best-known URL of the page (after redirects when available).
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl PublisherInfo {
    /// Successful reply. Fields nothing matched are sent as empty strings.
    #[must_use]
    pub fn success(url: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            error: None,
            body: PublisherBody {
                url: url.into(),
                title: Some(result.title),
                image: Some(result.image),
                author: Some(result.author),
            },
        }
    }

    /// Failure reply carrying only the message and URL.
    #[must_use]
    pub fn failure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            body: PublisherBody {
                url: url.into(),
                ..PublisherBody::default()
            },
        }
    }

    /// Name the reply for `requested_url` is delivered under.
    #[must_use]
    pub fn reply_key(requested_url: &str) -> String {
        format!("{REPLY_PREFIX}{requested_url}")
    }

    /// Serialize the reply as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build the reply for a fetch outcome using default options.
#[must_use]
pub fn respond(requested_url: &str, outcome: Result<FetchedPage>) -> PublisherInfo {
    respond_with_options(requested_url, outcome, &Options::default())
}

/// Build the reply for a fetch outcome.
///
/// `requested_url` is what the fetch was asked for. It drives video
/// detection on success and is the reply URL for errors that carry none.
#[must_use]
pub fn respond_with_options(
    requested_url: &str,
    outcome: Result<FetchedPage>,
    options: &Options,
) -> PublisherInfo {
    match outcome {
        Ok(page) => {
            let result = extract_bytes_with_options(
                &page.body,
                requested_url,
                &page.resolved_url,
                options,
            );
            tracing::debug!(
                url = %page.resolved_url,
                title = %result.title,
                image = %result.image,
                author = %result.author,
                "extracted publisher info"
            );
            PublisherInfo::success(page.resolved_url, result)
        }
        Err(Error::Fetch { message, url }) => {
            tracing::warn!(%url, error = %message, "fetch error");
            PublisherInfo::failure(message, url)
        }
        Err(err) => {
            tracing::warn!(url = requested_url, error = %err, "fetch error");
            PublisherInfo::failure(err.to_string(), requested_url)
        }
    }
}
