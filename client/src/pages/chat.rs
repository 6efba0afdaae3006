//! Authenticated landing view.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || match auth.get().display_name() {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome back.".to_owned(),
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Chat"</h1>
                <nav>
                    <a href="/profile">"Profile"</a>
                    " · "
                    <a href="/settings">"Settings"</a>
                </nav>
            </header>
            <p class="chat-page__greeting">{greeting}</p>
        </div>
    }
}
