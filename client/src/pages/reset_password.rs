//! Set a new password from an emailed `?token=` link.

use booking::validate::{FieldErrors, validate_password_reset};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::field::{ErrorList, Field};
use crate::state::ui::{Notice, UiState, notify};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let token = Memo::new(move |_| query.get().get("token").unwrap_or_default());

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token_value = token.get();
        let found = validate_password_reset(&token_value, &password.get(), &confirm.get());
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        let new_password = password.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&token_value, &new_password).await {
                    Ok(_) => {
                        notify(
                            ui,
                            Notice::success(
                                "Password reset successfully!",
                                "Please login with your new password.",
                            ),
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => notify(ui, Notice::danger("Reset failed", e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (new_password, ui, &navigate);
    };

    let errors_signal = Signal::from(errors);
    let token_errors = Signal::derive(move || {
        let mut only_token = FieldErrors::default();
        if let Some(message) = errors.get().get("token") {
            only_token.insert("token", message);
        }
        only_token
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <Show when=move || token.get().is_empty()>
                    <p class="auth-message auth-message--error">"Invalid or missing reset token."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <Field label="New password" name="password" kind="password" value=password errors=errors_signal required=true/>
                    <Field
                        label="Confirm password"
                        name="confirmPassword"
                        kind="password"
                        value=confirm
                        errors=errors_signal
                        required=true
                    />
                    <ErrorList errors=token_errors/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get() || token.get().is_empty()>
                        "Reset password"
                    </button>
                </form>
            </div>
        </div>
    }
}
