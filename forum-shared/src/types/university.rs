use serde::{Deserialize, Serialize};

/// A university a post or user can belong to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: u64,
    pub name: String,
}
