//! Labelled form inputs with inline validation messages.

use booking::validate::FieldErrors;
use leptos::prelude::*;

/// Text-like input bound to `value`, showing `errors[name]` beneath it.
#[component]
pub fn Field(
    #[prop(into)] label: String,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] errors: Option<Signal<FieldErrors>>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let error = move || errors.and_then(|e| e.get().get(name).map(str::to_owned));
    view! {
        <label class="field" class:field--invalid=move || error().is_some()>
            <span class="field__label">
                {label}
                <Show when=move || required>
                    <span class="field__required">" *"</span>
                </Show>
            </span>
            <input
                class="field__input"
                type=kind
                name=name
                placeholder=placeholder
                disabled=move || disabled.is_some_and(|d| d.get())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error().is_some()>
                <span class="field__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Inline error list for errors not tied to one input.
#[component]
pub fn ErrorList(#[prop(into)] errors: Signal<FieldErrors>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <ul class="error-list">
                {move || {
                    errors
                        .get()
                        .iter()
                        .map(|(_, message)| view! { <li>{message.to_owned()}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
