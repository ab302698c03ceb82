//! Interface for the authentication endpoints.
use forum_shared::types::{Credentials, LoginResponse, Registration, User};

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token and profile.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Create an account. Returns the backend's confirmation message.
    async fn register(&self, registration: &Registration) -> Result<String, ApiError>;

    /// The profile behind the current bearer token.
    async fn current_user(&self) -> Result<User, ApiError>;
}
