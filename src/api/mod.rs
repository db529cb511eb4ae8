//! HTTP pipeline for the TaskDeck API.
//!
//! This module owns the request/response protocol shared by every endpoint
//! wrapper:
//!
//! - outbound: the current access token is attached as a bearer credential
//!   when present (absence is not an error at this stage),
//! - inbound: a 2xx body carrying a new `access_token` silently rotates the
//!   token store,
//! - on 401: exactly one refresh call followed by exactly one replay of the
//!   original request; a failing refresh tears the session down and emits
//!   the logout broadcast,
//! - every other failure passes through unchanged.

mod auth;
mod categories;
mod tasks;
mod users;

use reqwest::multipart;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::{SessionEvent, SessionEvents, TokenStore};

/// Outbound request body that can be rebuilt for the single replay.
#[derive(Debug, Clone)]
pub(crate) enum Body {
    Empty,
    Json(Value),
    Multipart {
        field: &'static str,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// Asynchronous client for the TaskDeck API.
///
/// Owns the shared HTTP transport (with the cookie jar that carries the
/// server-managed refresh credential), the in-memory [`TokenStore`], and
/// the [`SessionEvents`] bus. Cheap to clone via the endpoint wrappers'
/// `&self` methods; one instance per process is the intended shape.
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: TokenStore,
    events: SessionEvents,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            // The refresh credential is a server-set httpOnly-style cookie;
            // it rides in this jar and is never parsed by the client.
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            config,
            tokens: TokenStore::new(),
            events: SessionEvents::new(),
        })
    }

    /// Handle to the in-memory token store.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Handle to the session event bus.
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Register a listener for session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.config.base_url.join(path)?)
    }

    // =========================================================================
    // Typed verb helpers used by the endpoint wrappers
    // =========================================================================

    pub(crate) async fn get_path<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.request(Method::GET, url, Body::Empty).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.request(Method::POST, url, Body::Json(serde_json::to_value(body)?))
            .await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.request(Method::PATCH, url, Body::Json(serde_json::to_value(body)?))
            .await
    }

    pub(crate) async fn delete_path<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.request(Method::DELETE, url, Body::Empty).await
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Body,
    ) -> Result<T, ApiError> {
        let value = self.execute(method, url, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    // =========================================================================
    // Core pipeline
    // =========================================================================

    /// Run one request through the retry state machine.
    ///
    /// The retry budget lives in this stack frame, so it is per originating
    /// request: concurrent failures each get their own single refresh, and
    /// the last refresh response to land wins the token store.
    async fn execute(&self, method: Method, url: Url, body: Body) -> Result<Value, ApiError> {
        let response = self.send_once(&method, &url, &body).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return self.finish(response).await;
        }

        debug!(%method, %url, "request rejected with 401, attempting token refresh");
        match self.refresh().await {
            Ok(token) => {
                self.tokens.set(token);
                info!("token refresh succeeded, replaying original request");
                let retried = self.send_once(&method, &url, &body).await?;
                if retried.status() == StatusCode::UNAUTHORIZED {
                    // Retry budget is exactly one; surface the failure as-is.
                    let message = read_error_message(retried).await;
                    warn!(%method, %url, "replayed request rejected again");
                    return Err(ApiError::AuthExpired { message });
                }
                self.finish(retried).await
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, tearing down session");
                self.tokens.clear();
                self.events.emit_logout();
                Err(ApiError::AuthUnrecoverable {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Build and send the request once, attaching the bearer token when one
    /// is present. Transport errors (including the timeout) bubble up as
    /// [`ApiError::Network`] and never enter the refresh path.
    async fn send_once(
        &self,
        method: &Method,
        url: &Url,
        body: &Body,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.request(method.clone(), url.clone());

        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(value),
            Body::Multipart {
                field,
                file_name,
                mime,
                bytes,
            } => {
                let part = multipart::Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(mime)?;
                request.multipart(multipart::Form::new().part(*field, part))
            }
        };

        Ok(request.send().await?)
    }

    /// Terminal handling of a non-401 response: decode the JSON body and
    /// apply silent token rotation when the server sent a fresh one.
    async fn finish(&self, response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = read_error_message(response).await;
            if status == StatusCode::UNAUTHORIZED {
                return Err(ApiError::AuthExpired { message });
            }
            return Err(ApiError::Api { status, message });
        }

        let text = response.text().await?;
        let value: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        // The server may proactively rotate the token on any successful call.
        if let Some(token) = value.get("access_token").and_then(Value::as_str) {
            debug!("response carried a rotated access token");
            self.tokens.set(token);
        }

        Ok(value)
    }

    /// One-shot `POST /auth/refresh`. No bearer is attached; the durable
    /// refresh credential is the cookie the transport sends automatically.
    async fn refresh(&self) -> Result<String, ApiError> {
        let url = self.endpoint("/auth/refresh")?;
        let response = self.http.post(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            return Err(ApiError::Api { status, message });
        }

        let body: Value = response.json().await?;
        body.get("access_token")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Decode("refresh response missing access_token".to_string()))
    }
}

/// Best-effort extraction of the server's `message` field from an error body.
async fn read_error_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned))
}
