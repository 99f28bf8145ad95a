//! Username + password sign-in.
//!
//! On success the session is stored for the tab and the user lands on their
//! role's home page.

use booking::session::home_path;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Trimmed username and the password, or the message to show.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: go home.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loaded && state.is_signed_in() {
            navigate_home(home_path(state.role()), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(session) => {
                        let role = session.effective_role();
                        auth.update(|a| a.sign_in(session, &crate::util::storage::BrowserStore::session()));
                        navigate(home_path(role), NavigateOptions::default());
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, pass, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your bookings"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    <a href="/register">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
