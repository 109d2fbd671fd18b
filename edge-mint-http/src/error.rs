//! Error types for the HTTP transport layer.

/// Errors that can occur while building an [`HttpApiClient`](crate::HttpApiClient).
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// A header value contains characters not allowed in HTTP headers.
    #[error("invalid header value for {name}: {source}")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
        /// The underlying header error.
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// The underlying `reqwest` client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
