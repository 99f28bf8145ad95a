//! Banner for the current notice.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || {
            ui.get().notice.map(|notice| {
                view! {
                    <div class=format!("notice notice--{}", notice.tone.as_class()) role="status">
                        <strong class="notice__title">{notice.title}</strong>
                        <span class="notice__text">{notice.text}</span>
                        <button
                            class="notice__close"
                            aria-label="Dismiss"
                            on:click=move |_| ui.update(UiState::dismiss)
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
        }}
    }
}
