//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Every JSON response from the gateway is wrapped in [`Envelope`]; the API
//! client unwraps `data` so callers only ever see the payload types below.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope `{code, message, data}` used by every backend service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Service-level status code. Informational; HTTP status is authoritative.
    #[serde(default)]
    pub code: i64,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Payload.
    pub data: T,
}

/// A user profile as returned by `GET /user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Avatar image URL, if the user uploaded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Creation timestamp as sent by the backend (ISO 8601).
    pub created_at: String,
    /// Last update timestamp as sent by the backend (ISO 8601).
    pub updated_at: String,
}

/// Token issued by `POST /auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Token scheme, `"bearer"` in practice.
    pub token_type: String,
}

/// Body of `POST /auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}
