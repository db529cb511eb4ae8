//! Authentication endpoints and session lifecycle.

use serde_json::json;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{
    ApiMessage, AuthResponse, ForgotPasswordData, LoginCredentials, RegisterCredentials,
    ResetPasswordData, User, VerifyOtpData,
};

use super::ApiClient;

impl ApiClient {
    /// `POST /auth/login`. The returned `access_token` is stored by the
    /// pipeline's rotation step before this resolves.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", credentials).await
    }

    /// `POST /auth/register`. Registration does not authenticate; the
    /// account must verify an OTP first.
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<ApiMessage, ApiError> {
        self.post("/auth/register", credentials).await
    }

    /// `POST /auth/verify-otp`. A successful verification carries an
    /// `access_token` and therefore starts a session.
    pub async fn verify_otp(&self, data: &VerifyOtpData) -> Result<AuthResponse, ApiError> {
        self.post("/auth/verify-otp", data).await
    }

    /// `POST /auth/resend-otp`.
    pub async fn resend_otp(&self, email: &str) -> Result<ApiMessage, ApiError> {
        self.post("/auth/resend-otp", &json!({ "email": email })).await
    }

    /// `POST /auth/forgot-password`.
    pub async fn forgot_password(&self, data: &ForgotPasswordData) -> Result<ApiMessage, ApiError> {
        self.post("/auth/forgot-password", data).await
    }

    /// `POST /auth/reset-password`.
    pub async fn reset_password(&self, data: &ResetPasswordData) -> Result<ApiMessage, ApiError> {
        self.post("/auth/reset-password", data).await
    }

    /// `GET /users/profile`.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_path("/users/profile").await
    }

    /// Whether the session is currently usable.
    ///
    /// Derived, never cached: a token must be present and the identity
    /// fetch must succeed. The token presence check is the cheap gate; a
    /// missing token skips the network round trip entirely.
    pub async fn is_authenticated(&self) -> bool {
        if !self.tokens().has() {
            return false;
        }
        self.current_user().await.is_ok()
    }

    /// End the session.
    ///
    /// The server call is best-effort: a transport or server failure is
    /// logged and swallowed. Local cleanup always runs, and the logout
    /// broadcast fires exactly once per call. The request is sent outside
    /// the refresh pipeline so a dying session cannot trigger a second
    /// broadcast on the way out.
    pub async fn logout(&self) {
        if let Err(err) = self.send_logout().await {
            warn!(error = %err, "logout request failed, clearing session anyway");
        } else {
            debug!("server acknowledged logout");
        }

        self.tokens().clear();
        self.events().emit_logout();
    }

    async fn send_logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout")?;
        let mut request = self.http.post(url);
        if let Some(token) = self.tokens().get() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status,
                message: None,
            });
        }
        Ok(())
    }
}
