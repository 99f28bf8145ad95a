//! Pickup hub choice for the current search.

use booking::wizard::{Location, Step};
use booking::Hub;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::step_indicator::StepIndicator;
use crate::state::booking::{BookingFlow, step_path, wizard_notice};
use crate::state::ui::{UiState, notify};
use crate::util::clock::today;

/// Where the hub list comes from for a search location.
#[derive(Clone, Debug, PartialEq)]
pub enum HubSource {
    /// Airport searches already carry their hubs.
    Listed(Vec<Hub>),
    /// Fetch by city, or every hub narrowed to the state.
    Fetch { city_id: Option<i64>, state_id: i64 },
}

pub fn hub_source(location: &Location) -> HubSource {
    match location {
        Location::Airport { hubs, .. } => HubSource::Listed(hubs.clone()),
        Location::City { state_id, city_id, .. } => HubSource::Fetch { city_id: *city_id, state_id: *state_id },
    }
}

/// Hubs located in `state_id`. Hubs that do not say where they are stay listed.
pub fn hubs_in_state(hubs: Vec<Hub>, state_id: i64) -> Vec<Hub> {
    hubs.into_iter().filter(|h| h.state_id.is_none_or(|id| id == state_id)).collect()
}

#[component]
pub fn HubSelectPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let hubs = RwSignal::new(Vec::<Hub>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Without a valid search there is nothing to choose from.
    let guard = flow.with_untracked(|f| f.wizard.entry_guard(Step::Hub, today()));
    let source = flow.with_untracked(|f| f.wizard.search().map(|s| hub_source(&s.location)));
    match (guard, source) {
        (Ok(()), Some(HubSource::Listed(list))) => {
            hubs.set(list);
            loading.set(false);
        }
        (Ok(()), Some(HubSource::Fetch { city_id, state_id })) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::get_hubs(city_id).await {
                    Ok(list) => hubs.set(if city_id.is_some() { list } else { hubs_in_state(list, state_id) }),
                    Err(e) => {
                        log::error!("failed to load hubs: {e}");
                        error.set(Some("Failed to load hubs. Please try again.".to_owned()));
                    }
                }
                loading.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (city_id, state_id);
        }
        (Err(err), _) => {
            let navigate = navigate.clone();
            Effect::new(move || {
                notify(ui, wizard_notice(&err));
                navigate("/booking", NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        (Ok(()), None) => loading.set(false),
    }

    let select = Callback::new(move |hub: Hub| match flow.try_update(|f| f.wizard.select_hub(hub, today())) {
        Some(Ok(())) => navigate(step_path(Step::Car), NavigateOptions::default()),
        Some(Err(err)) => notify(ui, wizard_notice(&err)),
        None => {}
    });

    let heading = move || flow.with(|f| f.wizard.search().map(|s| s.location.describe()).unwrap_or_default());
    let chosen = move || flow.with(|f| f.wizard.hub().map(|h| h.hub_id));
    let step = Signal::derive(move || flow.with(|f| f.wizard.step()));

    view! {
        <div class="page hub-page">
            <StepIndicator step=step/>
            <header class="page__header">
                <h1>"Choose a pickup hub"</h1>
                <p>{heading}</p>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading hubs..."</p> }>
                {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
                <Show when=move || error.get().is_none() && hubs.with(Vec::is_empty)>
                    <div class="page__empty">
                        <p>"No hubs serve this location yet."</p>
                        <a class="btn" href="/booking">
                            "Change search"
                        </a>
                    </div>
                </Show>
                <div class="hub-grid">
                    {move || {
                        hubs.get()
                            .into_iter()
                            .map(|hub| {
                                let id = hub.hub_id;
                                view! {
                                    <article class="hub-card" class:hub-card--selected=move || chosen() == Some(id)>
                                        <h3 class="hub-card__name">{hub.hub_name.clone()}</h3>
                                        <p class="hub-card__address">{hub.hub_address_and_details.clone().unwrap_or_default()}</p>
                                        <p class="hub-card__phone">{hub.contact_number.clone().unwrap_or_default()}</p>
                                        <button class="btn btn--primary" on:click=move |_| select.run(hub.clone())>
                                            "Select"
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            <div class="booking-step__actions">
                <a
                    class="btn"
                    href="/booking"
                    on:click=move |_| {
                        if let Some(notice) = flow.try_update(|f| f.rewind(Step::Search, today())).flatten() {
                            notify(ui, notice);
                        }
                    }
                >
                    "Back to search"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "hub_select_test.rs"]
mod hub_select_test;
