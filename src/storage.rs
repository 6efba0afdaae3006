//! Durable token storage.
//!
//! A single string slot that survives reloads: `localStorage` in the browser,
//! a file for the CLI. Writes are best-effort; implementations log failures
//! instead of surfacing them so a broken disk never blocks a logout.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Well-known key the bearer token is persisted under.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStorage: Send + Sync {
    /// Stored token, or `None` when absent or empty.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local storage. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `token`, as if persisted by an earlier run.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.into()))) }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
