//! Root application component with routing and context providers.

use agentdesk::{ApiClient, ApiConfig, SessionContext, SessionStore, View};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    chat::ChatPage, home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    settings::SettingsPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::{profile_load_warning, redirect_to_login};
use crate::util::storage::BrowserStorage;

/// Session store as wired for the browser.
pub type Store = SessionStore<BrowserTransport>;

/// Root application component.
///
/// Restores the session from `localStorage`, mirrors it into a reactive
/// `AuthState`, and wraps every route in its access guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::restore(BrowserStorage);
    let auth = RwSignal::new(AuthState::from_session(&session.snapshot()));
    session.subscribe(move |current| auth.set(AuthState::from_session(current)));

    let api = ApiClient::new(BrowserTransport, ApiConfig::default(), session).on_unauthorized(redirect_to_login);
    let store: Store = SessionStore::new(api);

    // A restored token has no cached profile yet.
    if store.is_authenticated() && store.profile().is_none() {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(error) = store.fetch_profile().await {
                warn_profile_load(&error);
            }
        });
    }

    provide_context(auth);
    provide_context(store);

    view! {
        <Title text="agentdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard target=View::Home><HomePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard target=View::Login><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <RouteGuard target=View::Register><RegisterPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("chat")
                    view=|| view! { <RouteGuard target=View::Chat><ChatPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RouteGuard target=View::Profile><ProfilePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <RouteGuard target=View::Settings><SettingsPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}

fn warn_profile_load(error: &agentdesk::ApiError) {
    let Some(message) = profile_load_warning(error) else {
        return;
    };
    #[cfg(feature = "csr")]
    log::warn!("{message}");
    #[cfg(not(feature = "csr"))]
    let _ = message;
}
