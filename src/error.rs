//! Errors raised while talking to the finance service.

/// Failure of a single request/response round-trip.
///
/// A service that answers `{"ok": false}` is not an error at this level; that
/// is a normal response and is reported through the handlers' return values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or never reached the service.
    #[error("request to {endpoint} failed: {reason}")]
    Transport {
        /// Path of the endpoint involved
        endpoint: String,
        /// Underlying transport message
        reason: String,
    },

    /// The service answered, but the body was not the JSON we expected.
    #[error("malformed response from {endpoint}: {reason}")]
    Decode {
        /// Path of the endpoint involved
        endpoint: String,
        /// Decoder message
        reason: String,
    },
}

impl ApiError {
    pub fn transport(endpoint: &str, reason: impl ToString) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(endpoint: &str, reason: impl ToString) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. } | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
