//! Error types for session persistence.
use thiserror::Error;

/// Represents errors that can occur while loading or saving the on-disk
/// session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store format error: {0}")]
    Format(#[from] serde_json::Error),
}
