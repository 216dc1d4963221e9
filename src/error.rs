use thiserror::Error;

/// Failure of a single data-access operation.
///
/// `RequestFailed` carries the fixed, operation-specific message surfaced to
/// callers; response bodies never leak into it.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }
}

#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[allow(dead_code)]
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),
    #[error("session communication error: {0}")]
    SessionClosed(String),
}
