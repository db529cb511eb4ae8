//! Authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated account, as returned by `GET /users/profile`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of login, OTP verification, and refresh: the token fields stay
/// snake_case on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpData {
    pub otp: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordData {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordData {
    pub reset_token: String,
    pub new_password: String,
}
