//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view applies the same guard rules, and every 401 sends the
//! browser to the login view no matter which page made the call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use agentdesk::guard::{self, Access, Decision};
use agentdesk::{ApiError, TransportError};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Path the guard sends a visitor to, or `None` when they may stay.
pub fn redirect_for(access: Access, state: &AuthState) -> Option<&'static str> {
    match guard::evaluate(access, state.authenticated) {
        Decision::Proceed => None,
        Decision::Redirect(view) => Some(view.path()),
    }
}

/// User-facing text for a failed auth call.
pub fn describe_error(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized { .. } => "Incorrect username or password.".to_owned(),
        ApiError::Transport(TransportError::Timeout(_)) => {
            "The server did not respond in time. Try again.".to_owned()
        }
        ApiError::Transport(TransportError::Network(_)) => "Could not reach the server.".to_owned(),
        ApiError::Application { message, .. } => message.clone(),
        ApiError::Decode(_) | ApiError::Encode(_) => "Unexpected response from the server.".to_owned(),
    }
}

/// Console warning for a failed background profile load, or `None` for a
/// 401, which already redirected to the login view.
pub fn profile_load_warning(error: &ApiError) -> Option<String> {
    if error.is_unauthorized() {
        return None;
    }
    Some(format!("failed to load profile for restored session: {error}"))
}

/// Re-run the guard for `access` whenever auth state changes, replacing the
/// current history entry on redirect.
pub fn install_route_guard<F>(access: Access, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = redirect_for(access, &auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Unauthorized hook for the API client: hard-navigate to the login view.
///
/// Skipped when already there so a rejected sign-in keeps its error message.
pub fn redirect_to_login() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let login = agentdesk::View::Login.path();
            if location.pathname().ok().as_deref() != Some(login) {
                let _ = location.set_href(login);
            }
        }
    }
}
