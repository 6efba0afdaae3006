//! Client-side session record and the shared handle that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionContext` exists per app. The session store writes through it,
//! the API client reads the bearer token from it and clears it on a 401, and
//! front ends subscribe to it to mirror the state into their own reactivity
//! (Leptos signals in the browser).
//!
//! INVARIANTS
//! ==========
//! - The profile is only ever populated while the token is non-empty.
//! - Every token change is written to durable storage in the same call, so a
//!   reload restores exactly what memory held.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::TokenStorage;
use crate::types::User;

/// Authentication token plus cached profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
    profile: Option<User>,
}

impl Session {
    /// Bearer token; empty when unauthenticated.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Cloneable handle to the app's single [`Session`].
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<Mutex<Session>>,
    storage: Arc<dyn TokenStorage>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .field("has_profile", &self.profile().is_some())
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Build the context, restoring any token left in `storage` by a previous run.
    ///
    /// The profile is never persisted; it is re-fetched after a restore.
    pub fn restore(storage: impl TokenStorage + 'static) -> Self {
        let token = storage.load().unwrap_or_default();
        if !token.is_empty() {
            tracing::debug!("restored session token from storage");
        }
        Self {
            state: Arc::new(Mutex::new(Session { token, profile: None })),
            storage: Arc::new(storage),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// Current bearer token, `None` when unauthenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let state = self.lock();
        state.is_authenticated().then(|| state.token.clone())
    }

    #[must_use]
    pub fn profile(&self) -> Option<User> {
        self.lock().profile.clone()
    }

    /// True iff the token is non-empty. Always reflects the latest write.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }

    /// Store a new token in memory and durable storage.
    ///
    /// An empty token is a clear. A token different from the current one
    /// drops the cached profile, since it may belong to another identity.
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            self.clear();
            return;
        }
        {
            let mut state = self.lock();
            if state.token != token {
                state.profile = None;
            }
            state.token = token.to_owned();
            self.storage.save(token);
        }
        self.notify();
    }

    /// Cache `user` as the current profile.
    ///
    /// Returns `false` (and stores nothing) when there is no token.
    pub fn set_profile(&self, user: User) -> bool {
        {
            let mut state = self.lock();
            if !state.is_authenticated() {
                return false;
            }
            state.profile = Some(user);
        }
        self.notify();
        true
    }

    /// Drop token and profile together, in memory and in durable storage.
    pub fn clear(&self) {
        {
            let mut state = self.lock();
            state.token.clear();
            state.profile = None;
            self.storage.clear();
        }
        self.notify();
    }

    /// Register a callback invoked with the new session after every change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Listeners run without any lock held so they may read the context back.
    fn notify(&self) {
        let session = self.snapshot();
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(&session);
        }
    }
}
