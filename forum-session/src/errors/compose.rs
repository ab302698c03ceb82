//! Validation errors raised before anything is sent to the backend.
use thiserror::Error;

/// Represents a local validation failure. Surfaced inline to the user;
/// nothing reaches the network when one of these is raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Please enter a comment")]
    EmptyComment,

    #[error("Comment is too long ({len} of {max} characters)")]
    CommentTooLong { len: usize, max: usize },

    #[error("Title is required")]
    EmptyTitle,

    #[error("Content is required")]
    EmptyContent,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Full name is required")]
    EmptyFullName,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("University is required")]
    EmptyUniversity,
}
