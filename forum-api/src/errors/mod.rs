//! Error types for the forum API bindings.
//! Defines the errors a client call can surface, from transport failures to
//! backend rejections.
use thiserror::Error;

/// Represents errors that can occur while talking to the forum backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend rejected the bearer token (or none was attached).
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}
