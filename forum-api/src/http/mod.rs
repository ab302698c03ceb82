//! Production HTTP client for the forum backend.
mod client;

pub use client::HttpForumClient;
