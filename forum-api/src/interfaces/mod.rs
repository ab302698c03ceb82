//! Per-resource interfaces over the forum backend.
//!
//! Each trait covers one resource group so consumers can depend on exactly
//! the slice they use; [`ForumApi`] bundles the full surface for wiring.

mod admin;
mod auth;
mod comments;
mod moderator;
mod posts;
mod universities;
mod votes;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use comments::CommentsApi;
pub use moderator::ModeratorApi;
pub use posts::PostsApi;
pub use universities::UniversitiesApi;
pub use votes::VotesApi;

/// The complete backend surface, for components that need all of it.
///
/// Blanket-implemented for any type implementing every resource trait, so
/// both [`crate::HttpForumClient`] and [`crate::MockForumApi`] qualify.
pub trait ForumApi:
    AuthApi + PostsApi + CommentsApi + VotesApi + UniversitiesApi + AdminApi + ModeratorApi
{
}

impl<T> ForumApi for T where
    T: AuthApi + PostsApi + CommentsApi + VotesApi + UniversitiesApi + AdminApi + ModeratorApi
{
}
