//! Request a password-reset email.

use booking::validate::is_valid_email;
use leptos::prelude::*;

/// Shown whether or not the address exists, so the form never reveals accounts.
pub const RESET_SENT_MESSAGE: &str = "If an account exists with this email, you will receive a reset link shortly.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    // (is_error, text)
    let status = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = email.get().trim().to_owned();
        if !is_valid_email(&address) {
            status.set(Some((true, "Please enter a valid email address.".to_owned())));
            return;
        }
        status.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&address).await {
                Ok(_) => status.set(Some((false, RESET_SENT_MESSAGE.to_owned()))),
                Err(e) => {
                    log::warn!("forgot-password failed: {e}");
                    status.set(Some((true, "Failed to process request. Please try again.".to_owned())));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = address;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <p class="auth-card__subtitle">"Enter your email to receive a reset link"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.in"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                {move || {
                    status.get().map(|(is_error, text)| {
                        let class = if is_error { "auth-message auth-message--error" } else { "auth-message" };
                        view! { <p class=class>{text}</p> }
                    })
                }}
                <div class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
