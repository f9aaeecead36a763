//! Error types for route construction and link-listing transport

use thiserror::Error;

/// A route rejected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Fewer than two titles: there is no step to check.
    #[error("route needs at least 2 titles, got {len}")]
    TooShort { len: usize },

    /// A title at the given 0-based position is empty.
    #[error("title {index} of the route is empty")]
    EmptyTitle { index: usize },
}

/// Failure talking to the link-listing service.
///
/// Callers treat every variant the same way (the verification could not
/// complete); the variants exist for logs and messages only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS or TLS failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status} from link service")]
    Status { status: u16 },

    /// Body did not match the expected response shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// No response within the configured time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Continuation chain exceeded the per-step page cap.
    #[error("more than {max_pages} pages of links for '{title}'")]
    PageLimit { title: String, max_pages: usize },
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            TransportError::Status {
                status: status.as_u16(),
            }
        } else {
            TransportError::Network(e.to_string())
        }
    }
}
