//! HTTP transport seam.
//!
//! The core never names an HTTP library. Front ends plug in an implementation
//! (`gloo-net` in the browser, `reqwest` natively) and tests plug in a
//! scripted fake.

use std::time::Duration;

use crate::error::TransportError;

/// HTTP methods the gateway uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One outbound request, fully resolved by the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute or origin-relative URL.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body, already serialized.
    pub body: Option<String>,
    /// Bound after which the transport must give up with [`TransportError::Timeout`].
    pub timeout: Duration,
}

impl HttpRequest {
    /// First header value matching `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and wait for the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Timeout`] when `request.timeout` elapses and
    /// [`TransportError::Network`] when no response could be obtained.
    /// Non-success statuses are NOT errors at this layer.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
