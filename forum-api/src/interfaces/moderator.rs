//! Interface for the moderator endpoints. All calls require a moderator
//! token; the backend enforces the role, the session layer gates before
//! calling.
use forum_shared::types::ModeratorDashboard;
use uuid::Uuid;

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait ModeratorApi: Send + Sync {
    /// Moderation queue and counters for the assigned university.
    async fn moderator_dashboard(&self) -> Result<ModeratorDashboard, ApiError>;

    async fn moderator_delete_post(&self, post_id: u64) -> Result<(), ApiError>;

    async fn moderator_delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError>;

    async fn ban_user(&self, user_id: u64) -> Result<String, ApiError>;

    async fn unban_user(&self, user_id: u64) -> Result<String, ApiError>;
}
