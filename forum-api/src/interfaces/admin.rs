//! Interface for the admin endpoints. All calls require an admin token;
//! the backend enforces the role, the session layer gates before calling.
use forum_shared::types::AdminDashboard;
use uuid::Uuid;

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// Site-wide statistics and top content.
    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError>;

    /// Enable or disable post management site-wide.
    async fn set_post_management(&self, enabled: bool) -> Result<String, ApiError>;

    /// Promote a user to moderator for a university.
    async fn promote_user(&self, user_id: u64, university: &str) -> Result<String, ApiError>;

    async fn admin_delete_user(&self, user_id: u64) -> Result<(), ApiError>;

    async fn admin_delete_post(&self, post_id: u64) -> Result<(), ApiError>;

    async fn admin_delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError>;
}
