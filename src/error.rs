//! Error types for the TaskDeck client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the request pipeline and the typed API wrappers.
///
/// Every error reaches the original caller; the only out-of-band effect is
/// the logout broadcast that accompanies [`ApiError::AuthUnrecoverable`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credentials and the single refresh retry for
    /// this request has already been spent.
    #[error("authentication expired: {}", .message.as_deref().unwrap_or("401 Unauthorized"))]
    AuthExpired { message: Option<String> },

    /// The refresh call itself failed. The token store has been cleared and
    /// the logout broadcast sent before this error is returned.
    #[error("session unrecoverable: {reason}")]
    AuthUnrecoverable { reason: String },

    /// Non-auth HTTP failure (validation 4xx, 5xx), passed through with the
    /// server's `message` field when it sent one.
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// Transport-level failure, including the per-request timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Base URL or endpoint path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status associated with this error, when one exists.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::AuthExpired { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Api { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            Self::AuthUnrecoverable { .. } | Self::Decode(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// True for both flavors of authentication failure.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::AuthExpired { .. } | Self::AuthUnrecoverable { .. }
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
