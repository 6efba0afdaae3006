//! Error taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Transport failures (no HTTP response at all) are kept apart from HTTP
//! failures so callers can tell "backend unreachable" from "backend said no".
//! Authorization failures get their own variant because the API client
//! handles them globally before propagating.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

/// Failure to complete an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response arrived within the configured bound.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection, DNS or browser fetch failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors produced by [`crate::ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered 401. The session has already been cleared.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success status (validation, conflict, server error).
    #[error("request failed with status {status}: {message}")]
    Application { status: u16, message: String },

    /// A success response whose body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status carried by the error, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Application { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}
