//! Interface for the post endpoints.
use forum_shared::types::{NewPost, Post};

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait PostsApi: Send + Sync {
    /// All posts, in backend order.
    async fn all_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// A single post by id.
    async fn post(&self, id: u64) -> Result<Post, ApiError>;

    /// Create a post. Requires authentication.
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError>;

    /// Update a post. Requires authentication and ownership.
    async fn update_post(&self, id: u64, post: &NewPost) -> Result<Post, ApiError>;

    /// Delete a post. Requires authentication and ownership.
    async fn delete_post(&self, id: u64) -> Result<(), ApiError>;

    /// Posts scoped to one university.
    async fn posts_by_university(&self, university: &str) -> Result<Vec<Post>, ApiError>;

    /// Full-text search over posts.
    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, ApiError>;
}
