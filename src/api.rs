//! Outbound request gateway for every backend call.
//!
//! ARCHITECTURE
//! ============
//! Request phase attaches `Authorization: Bearer <token>` whenever the shared
//! session holds a token. Response phase unwraps the `{code, message, data}`
//! envelope. Failure phase treats 401 specially: the session is cleared, the
//! unauthorized hook fires (the app wires it to "go to login"), and only then
//! is the error returned to the caller.
//!
//! ERROR HANDLING
//! ==============
//! Single attempt, no retries. Every failure surfaces once as an [`ApiError`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::SessionContext;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::types::{Envelope, LoginRequest, LoginResponse, RegisterRequest, User};

const TOKEN_PATH: &str = "/auth/token";
const LOGOUT_PATH: &str = "/auth/logout";
const REGISTER_PATH: &str = "/auth/register";
const PROFILE_PATH: &str = "/user/profile";

/// Callback fired after a 401 has cleared the session.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

pub struct ApiClient<T> {
    transport: Arc<T>,
    config: ApiConfig,
    session: SessionContext,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
            session: self.session.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig, session: SessionContext) -> Self {
        Self { transport: Arc::new(transport), config, session, on_unauthorized: None }
    }

    /// Install the hook fired on every 401, after the session is cleared.
    #[must_use]
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Exchange credentials for a bearer token via `POST /auth/token`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for rejected credentials, `Application` for other
    /// non-success statuses, `Transport` on timeout or network failure.
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = encode(&LoginRequest { username, password })?;
        self.fetch_data(Method::Post, TOKEN_PATH, Some(body)).await
    }

    /// Revoke the server-side session via `POST /auth/logout`.
    ///
    /// Does not touch local state; the session store decides that.
    ///
    /// # Errors
    ///
    /// Any transport or non-success status.
    pub async fn revoke_session(&self) -> Result<(), ApiError> {
        self.execute(Method::Post, LOGOUT_PATH, None).await.map(drop)
    }

    /// Fetch the authenticated user's profile via `GET /user/profile`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the token is missing, invalid or expired.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.fetch_data(Method::Get, PROFILE_PATH, None).await
    }

    /// Create an account via `POST /auth/register`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// `Application` for validation failures (duplicate username, bad email, ...).
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = encode(request)?;
        self.execute(Method::Post, REGISTER_PATH, Some(body)).await.map(drop)
    }

    async fn fetch_data<D: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<D, ApiError> {
        let response = self.execute(method, path, body).await?;
        let envelope: Envelope<D> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn execute(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body);
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(method = method.as_str(), path, %error, "api request failed");
                return Err(error.into());
            }
        };
        tracing::debug!(method = method.as_str(), path, status = response.status, "api response");

        if response.is_success() {
            return Ok(response);
        }

        let message = error_message(&response);
        if response.status == 401 {
            self.handle_unauthorized(path);
            return Err(ApiError::Unauthorized { message });
        }
        Err(ApiError::Application { status: response.status, message })
    }

    fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        HttpRequest { method, url: self.config.url(path), headers, body, timeout: self.config.timeout }
    }

    fn handle_unauthorized(&self, path: &str) {
        tracing::warn!(path, "unauthorized response, clearing session");
        self.session.clear();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

fn encode(body: &impl Serialize) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Best human-readable message for a failed response.
///
/// Order: envelope `message`, FastAPI `detail` (string or validation list),
/// raw body, then the bare status.
fn error_message(response: &HttpResponse) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response.body) {
        if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(serde_json::Value::Array(items)) => {
                let joined = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .collect::<Vec<_>>()
                    .join("; ");
                if !joined.is_empty() {
                    return joined;
                }
            }
            _ => {}
        }
    }

    let raw = response.body.trim();
    if raw.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        raw.to_owned()
    }
}
