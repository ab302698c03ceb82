//! Interface for the voting endpoints.
//!
//! Vote mutations answer with a free-text message ("Voted UPVOTE",
//! "Vote changed to DOWNVOTE", "Vote Withdrawn") rather than a structured
//! status; interpreting that message is the session layer's job. The count
//! endpoints return the authoritative aggregate the client displays.
use forum_shared::types::VotesCount;
use uuid::Uuid;

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait VotesApi: Send + Sync {
    /// Cast (or toggle) an upvote on a post. Returns the backend's message.
    async fn upvote_post(&self, post_id: u64) -> Result<String, ApiError>;

    /// Cast (or toggle) a downvote on a post. Returns the backend's message.
    async fn downvote_post(&self, post_id: u64) -> Result<String, ApiError>;

    /// Cast (or toggle) an upvote on a comment. Returns the backend's message.
    async fn upvote_comment(&self, comment_id: Uuid) -> Result<String, ApiError>;

    /// Cast (or toggle) a downvote on a comment. Returns the backend's message.
    async fn downvote_comment(&self, comment_id: Uuid) -> Result<String, ApiError>;

    /// The authoritative vote aggregate for a post.
    async fn post_vote_counts(&self, post_id: u64) -> Result<VotesCount, ApiError>;

    /// The authoritative vote aggregate for a comment.
    async fn comment_vote_counts(&self, comment_id: Uuid) -> Result<VotesCount, ApiError>;
}
