//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::types::User;

pub(crate) fn sample_user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        full_name: "Alice Liddell".to_owned(),
        avatar: None,
        created_at: "2024-03-01T10:00:00".to_owned(),
        updated_at: "2024-03-01T10:00:00".to_owned(),
    }
}

/// Wrap `data` in the gateway envelope.
pub(crate) fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "code": 200, "message": "success", "data": data })
}

pub(crate) fn token_body(token: &str) -> serde_json::Value {
    envelope(serde_json::json!({ "access_token": token, "token_type": "bearer" }))
}

pub(crate) fn profile_body(user: &User) -> serde_json::Value {
    envelope(serde_json::to_value(user).unwrap())
}

// =========================================================================
// MockTransport
// =========================================================================

/// Replays scripted responses in order and records every request.
/// Clones share the script and the log.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push_raw(status, &body.to_string())
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn push_error(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}
