//! REST bindings for the Gurugolpo forum backend.
//!
//! This crate provides:
//! - per-resource interfaces ([`AuthApi`], [`PostsApi`], [`CommentsApi`],
//!   [`VotesApi`], [`UniversitiesApi`], [`AdminApi`], [`ModeratorApi`]) plus
//!   the [`ForumApi`] supertrait covering the whole surface
//! - [`HttpForumClient`], the production client backed by `reqwest`
//! - [`MockForumApi`], an in-memory implementation with call counters for
//!   testing without network access
//! - [`TokenStore`], the shared bearer-token slot the client reads on every
//!   request
//!
//! The backend owns all persistence and enforcement; these bindings only
//! shape requests and decode responses.

pub mod errors;
pub mod http;
pub mod interfaces;
pub mod mock;
pub mod token;

pub use errors::ApiError;
pub use http::HttpForumClient;
pub use interfaces::{
    AdminApi, AuthApi, CommentsApi, ForumApi, ModeratorApi, PostsApi, UniversitiesApi, VotesApi,
};
pub use mock::MockForumApi;
pub use token::TokenStore;
