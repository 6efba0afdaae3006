//! Account settings: currently just sign-out.

use leptos::prelude::*;

use crate::app::Store;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let busy = RwSignal::new(false);

    // Local state is cleared either way; the guard then moves us to /login.
    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let store = store.clone();
        leptos::task::spawn_local(async move {
            // A failed server-side revoke is already logged by the store.
            let _ = store.logout().await;
            // The page may already be unmounted by the redirect.
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <button class="btn btn--primary" on:click=on_logout disabled=move || busy.get()>
                "Sign out"
            </button>
            <a href="/chat">"Back to chat"</a>
        </div>
    }
}
