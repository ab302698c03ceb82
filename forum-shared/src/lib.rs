//! # Forum Shared
//! This crate defines shared data structures and types used across the forum
//! client ecosystem.
//! It includes common definitions for posts, comments, users, votes, vote
//! counts, and dashboard payloads.
pub mod types;
