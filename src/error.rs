//! Error types for publisher-info.
//!
//! Metadata extraction itself never fails: missing or malformed markup
//! simply yields empty fields. These errors belong to the layer around it,
//! where pages are fetched and replies are serialized.

/// Error type for fetch and reply operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page could not be fetched.
    ///
    /// `url` is the best-known address of the page: the final URL after
    /// redirects when the fetcher got that far, the requested URL otherwise.
    #[error("Fetch failed for {url}: {message}")]
    Fetch {
        /// Failure message reported by the fetcher.
        message: String,
        /// Best-known URL of the page.
        url: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a reply failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a fetch failure.
    pub fn fetch(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            url: url.into(),
        }
    }
}

/// Result type alias for fetch and reply operations.
pub type Result<T> = std::result::Result<T, Error>;
