//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"agentdesk"</h1>
            <p>"Chat with your AI assistant and knowledge base."</p>
            <Show
                when=move || auth.get().authenticated
                fallback=|| {
                    view! {
                        <nav class="home-actions">
                            <a href="/login" class="login-button">"Sign in"</a>
                            <a href="/register" class="login-button">"Create account"</a>
                        </nav>
                    }
                }
            >
                <nav class="home-actions">
                    <a href="/chat" class="login-button">"Open chat"</a>
                </nav>
            </Show>
        </div>
    }
}
