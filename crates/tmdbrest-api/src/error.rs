//! Client fault taxonomy.

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every fault a TMDB call can surface.
///
/// Faults are never recovered locally; each one propagates to the
/// immediate caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required builder field was not set.
    #[error("{0} is required")]
    Builder(&'static str),

    /// The session factory was given a media name it cannot classify.
    #[error("media {0:?} unknown")]
    UnknownMedia(String),

    /// No endpoint is defined for the requested action.
    #[error("no endpoint for action {0:?}")]
    NoRoute(String),

    /// TMDB reported an operation failure, either through a non-success
    /// HTTP status or a `success: false` marker in the body.
    #[error("TMDB API error (HTTP {http_status}): code={status_code}, message={status_message}")]
    Api {
        /// HTTP status of the response carrying the failure.
        http_status: u16,
        /// TMDB status code (e.g. 7 for an invalid API key).
        status_code: u32,
        /// TMDB status message.
        status_message: String,
    },

    /// Transport-level failure (connect, TLS, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded as JSON.
    #[error("failed to decode JSON response from {endpoint}")]
    Json {
        /// Endpoint path the undecodable body came from.
        endpoint: String,
        /// Decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// Response decoded but is missing a key the operation requires.
    #[error("unexpected response shape from {endpoint}: missing {key:?}")]
    Shape {
        /// Endpoint path the malformed body came from.
        endpoint: String,
        /// The absent key.
        key: &'static str,
    },

    /// Image download answered with a non-success status; nothing was
    /// written to disk.
    #[error("image unavailable (HTTP {http_status}): {url}")]
    ImageUnavailable {
        /// The image URL that was requested.
        url: String,
        /// HTTP status of the response.
        http_status: u16,
    },

    /// A URL could not be built from the base and route path.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Local file write failed while saving an image.
    #[error("file write failed: {0}")]
    Io(#[from] std::io::Error),
}
