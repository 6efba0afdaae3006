//! Session store: the single writer of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login/register pages, the profile view and the logout button all go
//! through this store. Route guards only read `is_authenticated`.
//!
//! TRADE-OFFS
//! ==========
//! Logout clears local state even when the server-side revoke fails; the
//! caller learns which happened from [`LogoutOutcome`]. A server session
//! left behind expires on its own.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::session::SessionContext;
use crate::transport::Transport;
use crate::types::{RegisterRequest, User};

/// Result of [`SessionStore::logout`]. Local state is cleared in both cases.
#[derive(Debug)]
pub enum LogoutOutcome {
    /// The backend acknowledged the logout.
    Confirmed,
    /// The backend call failed; only the local session was cleared.
    RemoteFailed(ApiError),
}

impl LogoutOutcome {
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

pub struct SessionStore<T> {
    api: ApiClient<T>,
}

impl<T> Clone for SessionStore<T> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone() }
    }
}

impl<T: Transport> SessionStore<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &SessionContext {
        self.api.session()
    }

    /// True iff a non-empty token is held. Recomputed on every call.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.session().token()
    }

    pub fn profile(&self) -> Option<User> {
        self.session().profile()
    }

    /// Obtain a token, persist it, then fetch and cache the profile.
    ///
    /// The profile fetch starts only after the token is stored. If it fails,
    /// the token is rolled back so a failed login never leaves the store
    /// half-authenticated.
    ///
    /// Front ends call this only for a guest: a 401 here clears whatever
    /// session is held, like any other 401.
    ///
    /// # Errors
    ///
    /// Rejected credentials, validation failures, or transport errors from
    /// either call. The store is unauthenticated afterwards.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let issued = self.api.issue_token(username, password).await?;
        if issued.access_token.is_empty() {
            return Err(ApiError::Decode("empty access token".to_owned()));
        }
        self.session().set_token(&issued.access_token);

        match self.api.fetch_profile().await {
            Ok(user) => {
                if !self.session().set_profile(user.clone()) {
                    tracing::debug!("session ended while login was in flight");
                }
                tracing::info!(user_id = user.id, username = %user.username, "logged in");
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(%error, "profile fetch after login failed, rolling back token");
                self.session().clear();
                Err(error)
            }
        }
    }

    /// Revoke the session remotely, then clear local state unconditionally.
    pub async fn logout(&self) -> LogoutOutcome {
        let outcome = match self.api.revoke_session().await {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(error) => {
                tracing::warn!(%error, "remote logout failed, clearing local session anyway");
                LogoutOutcome::RemoteFailed(error)
            }
        };
        self.session().clear();
        tracing::info!("logged out");
        outcome
    }

    /// Re-read the profile from the backend into the store.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the token is invalid or expired (the session is
    /// cleared by the API client), or any other request failure.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        let user = self.api.fetch_profile().await?;
        if !self.session().set_profile(user.clone()) {
            tracing::debug!("session ended while profile fetch was in flight");
        }
        Ok(user)
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Validation failures from the backend or transport errors.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.api.register(request).await?;
        tracing::info!(username = %request.username, "registered account");
        Ok(())
    }
}
