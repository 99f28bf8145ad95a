//! Customer self-registration.

use booking::session::RegisterRequest;
use booking::validate::{FieldErrors, RegistrationForm, validate_registration};
use booking::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field::Field;
use crate::state::ui::{Notice, UiState, notify};

/// Self-service accounts are always customers.
pub fn registration_request(form: &RegistrationForm) -> RegisterRequest {
    RegisterRequest {
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        role: Role::Customer.as_str().to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        let found = validate_registration(&form);
        let invalid = !found.is_empty();
        errors.set(found);
        error.set(String::new());
        if invalid {
            return;
        }
        let request = registration_request(&form);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(_) => {
                        notify(ui, Notice::success("Registered", "Registration successful! Please login."));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, ui, &navigate);
    };

    let errors_signal = Signal::from(errors);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <Field label="Username" name="username" value=username errors=errors_signal required=true/>
                    <Field label="Email" name="email" kind="email" value=email errors=errors_signal required=true/>
                    <Field label="Password" name="password" kind="password" value=password errors=errors_signal required=true/>
                    <Field
                        label="Confirm password"
                        name="confirmPassword"
                        kind="password"
                        value=confirm
                        errors=errors_signal
                        required=true
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href="/login">"Already registered? Sign in"</a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;
