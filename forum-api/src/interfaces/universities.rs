//! Interface for the university endpoints.
use forum_shared::types::University;

use crate::errors::ApiError;

#[async_trait::async_trait]
pub trait UniversitiesApi: Send + Sync {
    /// All registered universities.
    async fn all_universities(&self) -> Result<Vec<University>, ApiError>;

    /// A single university by id.
    async fn university(&self, id: u64) -> Result<University, ApiError>;
}
