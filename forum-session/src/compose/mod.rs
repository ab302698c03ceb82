//! Local content validation.
//!
//! Everything here runs before a request is built; a validation failure
//! means nothing was sent. The rules mirror what the backend enforces so a
//! well-formed submission is not bounced twice.

use forum_shared::types::Registration;

use crate::errors::ComposeError;

/// Maximum accepted comment length, matching the composer's input limit.
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate a comment body. Returns the trimmed text to submit.
pub fn validate_comment(content: &str) -> Result<String, ComposeError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ComposeError::EmptyComment);
    }
    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(ComposeError::CommentTooLong {
            len: trimmed.chars().count(),
            max: MAX_COMMENT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a post submission.
pub fn validate_post(title: &str, content: &str) -> Result<(), ComposeError> {
    if title.trim().is_empty() {
        return Err(ComposeError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(ComposeError::EmptyContent);
    }
    Ok(())
}

/// Validate a registration form.
pub fn validate_registration(registration: &Registration) -> Result<(), ComposeError> {
    if registration.email.trim().is_empty() {
        return Err(ComposeError::EmptyEmail);
    }
    if !registration.email.contains('@') {
        return Err(ComposeError::InvalidEmail);
    }
    if registration.full_name.trim().is_empty() {
        return Err(ComposeError::EmptyFullName);
    }
    if registration.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ComposeError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if registration.password != registration.confirm_password {
        return Err(ComposeError::PasswordMismatch);
    }
    if registration.university.trim().is_empty() {
        return Err(ComposeError::EmptyUniversity);
    }
    Ok(())
}
