//! Profile management payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Body of `PATCH /users/profile`. Only the set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordData {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Account age in days.
    pub account_age: i64,
    pub last_login: Option<DateTime<Utc>>,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadResponse {
    pub avatar_url: String,
    pub message: String,
}

/// `{ user, message }` envelope of the profile mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
    pub message: String,
}
