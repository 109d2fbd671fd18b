//! Error types for the monetization controllers.

use edge_mint_proto::PayloadError;
use http::StatusCode;

/// Errors raised while talking to the management API.
#[derive(Debug, thiserror::Error)]
pub enum ApiRequestError {
    /// The request could not be sent or no response was received.
    #[error("HTTP error: {context}: {source}")]
    Transport {
        /// Human-readable context.
        context: &'static str,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The server answered with a non-2xx status.
    #[error("Unexpected HTTP status {status}: {context}: {message}")]
    Status {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// Error code reported by the server, if any.
        code: Option<String>,
        /// Error message reported by the server, or the raw body.
        message: String,
    },
}

impl ApiRequestError {
    /// Wraps a transport failure.
    pub fn transport(
        context: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            context,
            source: source.into(),
        }
    }

    /// Returns the HTTP status for [`ApiRequestError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

/// Errors returned by [`AcceptedRatePlanController`](crate::AcceptedRatePlanController).
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Transport failure or non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiRequestError),

    /// A request body could not be encoded or a response body decoded.
    #[error("Failed to process JSON: {context}: {source}")]
    Serialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying payload error.
        #[source]
        source: PayloadError,
    },

    /// An update was attempted on an accepted rate plan that has never been
    /// saved, so there is no identifier to address it by.
    #[error("accepted rate plan has no identifier; accept it before updating")]
    UnsavedEntity,
}

impl ControllerError {
    pub(crate) fn serialization(context: &'static str, source: impl Into<PayloadError>) -> Self {
        Self::Serialization {
            context,
            source: source.into(),
        }
    }

    /// Returns the HTTP status if the server rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(err) => err.status(),
            _ => None,
        }
    }
}
