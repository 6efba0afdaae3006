//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reactive mirror of the core `SessionContext`. The app subscribes to the
//! context and copies each change into an `RwSignal<AuthState>`, which route
//! guards and user-aware pages read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use agentdesk::{Session, User};

/// Authentication flag and cached profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self { authenticated: session.is_authenticated(), user: session.profile().cloned() }
    }

    /// Full name when set, falling back to the username.
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|user| {
            let full_name = user.full_name.trim();
            if full_name.is_empty() { user.username.clone() } else { full_name.to_owned() }
        })
    }
}
