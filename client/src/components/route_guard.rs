//! Pre-navigation access check wrapped around every routed view.

use agentdesk::View;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_route_guard, redirect_for};

/// Renders `children` only while the guard lets the visitor stay on `target`;
/// otherwise navigates to the guard's redirect.
#[component]
pub fn RouteGuard(target: View, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let access = target.access();
    install_route_guard(access, auth, use_navigate());

    let allowed = move || redirect_for(access, &auth.get()).is_none();

    view! { <Show when=allowed>{children()}</Show> }
}
