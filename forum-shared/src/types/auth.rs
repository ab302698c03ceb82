use serde::{Deserialize, Serialize};

use crate::types::User;

/// Login payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload. Validated client-side before submission; the
/// backend applies the same rules again.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
    pub university: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<bool>,
}

/// Response to a successful login: a bearer token plus the user profile.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}
