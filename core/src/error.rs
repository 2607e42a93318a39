//! Error types for the imgflip client.
//!
//! # Design
//! Three failure kinds, matched on by variant rather than by message text.
//! `Service` displays the service's own message verbatim so it can be shown
//! to a user as-is.

/// Errors returned by `ImgflipClient` parse methods and `MemeServiceClient`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The transport failed (network, timeout, cancellation). The inner error
    /// is the transport's own value and can be downcast.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body was not JSON, or not the shape the operation expects.
    #[error("malformed response: {0}")]
    Parse(String),

    /// The service answered `success: false`.
    #[error("{0}")]
    Service(String),
}

impl ApiError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ApiError::Transport(Box::new(err))
    }
}
