//! Error taxonomy for backend calls.
//!
//! Every failure is handled at the call site by writing a message into the
//! page region that issued the request. Nothing here is fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a status the caller does not accept.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
