//! Interface for the comment endpoints.
use forum_shared::types::{Comment, NewComment};
use uuid::Uuid;

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait CommentsApi: Send + Sync {
    /// All comments on a post, in backend order.
    async fn comments_for_post(&self, post_id: u64) -> Result<Vec<Comment>, ApiError>;

    /// Add a comment to a post. Requires authentication.
    async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError>;

    /// Update a comment. Requires authentication and ownership.
    async fn update_comment(
        &self,
        comment_id: Uuid,
        comment: &NewComment,
    ) -> Result<Comment, ApiError>;

    /// Delete a comment. Requires authentication and ownership.
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError>;
}
