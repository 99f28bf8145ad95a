//! Contact form that files a support ticket.

use booking::SupportTicket;
use booking::validate::{FieldErrors, validate_support_ticket};
use leptos::prelude::*;

use crate::components::field::Field;
use crate::state::auth::AuthState;
use crate::state::ui::{Notice, UiState, notify};

pub fn ticket_from_inputs(name: &str, email: &str, subject: &str, message: &str) -> SupportTicket {
    SupportTicket {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        subject: subject.trim().to_owned(),
        message: message.trim().to_owned(),
    }
}

#[component]
pub fn CustomerCarePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Prefill the signed-in user's email once.
    Effect::new(move || {
        if let Some(session) = auth.get().session {
            if email.get_untracked().is_empty() {
                email.set(session.email.unwrap_or_default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let ticket = ticket_from_inputs(&name.get(), &email.get(), &subject.get(), &message.get());
        let found = validate_support_ticket(&ticket);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_support_ticket(&ticket).await {
                Ok(reply) => {
                    notify(ui, Notice::success("Message sent", reply));
                    subject.set(String::new());
                    message.set(String::new());
                    submitted.set(true);
                }
                Err(e) => notify(ui, Notice::danger("Could not send message", e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, ui);
    };

    let errors_signal = Signal::from(errors);

    view! {
        <div class="page care-page">
            <header class="page__header">
                <h1>"Customer Care"</h1>
                <p>"Questions about a booking? Our team answers around the clock."</p>
            </header>
            <div class="care-page__grid">
                <aside class="care-page__contacts">
                    <h2>"Reach us"</h2>
                    <p>"Phone: 1800-123-4567"</p>
                    <p>"Email: support@indiadrive.in"</p>
                    <p>"Hours: 24/7"</p>
                </aside>
                <Show
                    when=move || !submitted.get()
                    fallback=move || {
                        view! {
                            <div class="care-page__thanks">
                                <h2>"Thank you!"</h2>
                                <p>"We have received your message and will get back to you soon."</p>
                                <button class="btn" on:click=move |_| submitted.set(false)>
                                    "Send another message"
                                </button>
                            </div>
                        }
                    }
                >
                    <form class="care-page__form" on:submit=on_submit>
                        <Field label="Name" name="name" value=name errors=errors_signal required=true/>
                        <Field label="Email" name="email" kind="email" value=email errors=errors_signal required=true/>
                        <Field label="Subject" name="subject" value=subject errors=errors_signal required=true/>
                        <label class="field" class:field--invalid=move || errors.get().get("message").is_some()>
                            <span class="field__label">"Message"</span>
                            <textarea
                                class="field__input field__input--area"
                                rows="5"
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                            <span class="field__error">
                                {move || errors.get().get("message").map(str::to_owned).unwrap_or_default()}
                            </span>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Send message"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "customer_care_test.rs"]
mod customer_care_test;
