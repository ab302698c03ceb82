use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Post;

/// Payload of the admin dashboard endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    #[serde(default)]
    pub top_voted_posts: Vec<Post>,
    #[serde(default)]
    pub post_counts_by_university: HashMap<String, u64>,
    #[serde(default)]
    pub post_management_enabled: bool,
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_comments: u64,
    #[serde(default)]
    pub total_moderators: u64,
}

/// Payload of the moderator dashboard endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModeratorDashboard {
    #[serde(default)]
    pub assigned_university: Option<String>,
    #[serde(default)]
    pub pending_posts: Vec<Post>,
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default)]
    pub approved_count: u64,
    #[serde(default)]
    pub rejected_count: u64,
}
