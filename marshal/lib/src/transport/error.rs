use thiserror::Error;

/// Errors raised by [`ReqwestTransport`](super::ReqwestTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or its response read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The base URL and request target do not form a valid URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header name or value cannot be sent.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },
}

impl TransportError {
    /// Returns `true` for timeouts and connection failures.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(err) => err.is_timeout() || err.is_connect(),
            Self::InvalidUrl { .. } | Self::InvalidHeader { .. } => false,
        }
    }
}
