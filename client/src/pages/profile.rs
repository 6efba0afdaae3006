//! Profile view for the signed-in user.

use agentdesk::User;
use leptos::prelude::*;

use crate::app::Store;
use crate::state::auth::AuthState;
use crate::util::auth::describe_error;

fn profile_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="profile__row">
            <span class="profile__label">{label}</span>
            <span class="profile__value">{value}</span>
        </div>
    }
}

fn profile_details(user: User) -> impl IntoView {
    view! {
        <div class="profile">
            {user.avatar.map(|src| view! { <img class="profile__avatar" src=src alt="Avatar"/> })}
            {profile_row("Username", user.username)}
            {profile_row("Full name", user.full_name)}
            {profile_row("Email", user.email)}
            {profile_row("Member since", user.created_at)}
            {profile_row("Last updated", user.updated_at)}
        </div>
    }
}

/// Refreshes the cached profile on mount, then renders it from auth state.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let info = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        if let Err(e) = store.fetch_profile().await {
            info.set(describe_error(&e));
        }
    });

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| view! { <p class="profile__loading">"Loading profile…"</p> }
            >
                {move || auth.get().user.map(profile_details)}
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
            <a href="/chat">"Back to chat"</a>
        </div>
    }
}
