//! Gateway error type.

/// Errors surfaced by [`ApiClient`](crate::ApiClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network failure, timeout, or a body that failed to decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status the gateway does not
    /// translate into a domain result.
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },
}
