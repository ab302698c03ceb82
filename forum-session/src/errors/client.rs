//! Error type of the [`crate::ForumClient`] facade.
use forum_api::ApiError;
use forum_shared::types::Role;
use thiserror::Error;

use crate::errors::{ComposeError, SessionError};

/// Represents a failed client operation.
///
/// Vote clicks never surface here - their outcomes (including silent
/// failure) are modeled by [`crate::VoteOutcome`]. Everything else that can
/// go wrong in the facade lands in this enum and is rendered as an inline
/// message; no variant is fatal.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please sign in to continue")]
    AuthRequired,

    #[error("{role:?} access required")]
    RoleRequired { role: Role },

    #[error(transparent)]
    Validation(#[from] ComposeError),

    #[error("Request failed: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
