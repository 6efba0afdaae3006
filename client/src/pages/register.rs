//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use agentdesk::RegisterRequest;
use leptos::prelude::*;

use crate::app::Store;
use crate::util::auth::describe_error;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm: String,
}

pub(crate) fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    let full_name = form.full_name.trim();
    if username.is_empty() || email.is_empty() || full_name.is_empty() || form.password.is_empty() {
        return Err("All fields are required.");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err("Enter a valid email address.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        password: form.password.clone(),
        email: email.to_owned(),
        full_name: full_name.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let store = store.clone();
        leptos::task::spawn_local(async move {
            match store.register(&request).await {
                Ok(()) => {
                    form.set(RegisterForm::default());
                    info.set(String::new());
                    registered.set(true);
                }
                Err(e) => info.set(describe_error(&e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"agentdesk"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <Show
                    when=move || registered.get()
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_submit.clone()>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Username"
                                    prop:value=move || form.get().username
                                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || form.get().email
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Full name"
                                    prop:value=move || form.get().full_name
                                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    autocomplete="new-password"
                                    placeholder="Password"
                                    prop:value=move || form.get().password
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    autocomplete="new-password"
                                    placeholder="Confirm password"
                                    prop:value=move || form.get().confirm
                                    on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Register"
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="login-message">"Account created. " <a href="/login">"Sign in"</a></p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
