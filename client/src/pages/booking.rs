//! Booking page: search, driver details, review, and confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/booking` renders whichever wizard step is current, except hub and car
//! selection which live on their own routes. Every transition goes through
//! the wizard in `BookingFlow`, so a refused move leaves the page where it is
//! and explains why in a notice.
//!
//! A "Book now" link from the fleet page arrives as `?hubId=&carId=`. The
//! search step then asks only for dates and, when the car is still free,
//! jumps straight to driver details.

use booking::dates::format_display;
use booking::pricing::{MAX_CHILD_SEATS, format_inr, is_child_seat};
use booking::validate::{FieldErrors, validate_customer, validate_search_dates};
use booking::wizard::{Location, SearchCriteria, Step};
use booking::{City, StateRecord};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::customer_form::CustomerForm;
use crate::components::price_summary::PriceSummary;
use crate::components::step_indicator::StepIndicator;
use crate::state::auth::AuthState;
use crate::state::booking::{BookingFlow, DeepLink, prefill_draft, step_path, wizard_notice};
use crate::state::ui::{Notice, UiState, notify};
use crate::util::clock::today;

/// How the customer names the pickup area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    City,
    Airport,
}

/// Which panel `/booking` shows for a wizard step.
pub fn panel_for(step: Step) -> Step {
    match step {
        Step::Search | Step::Hub | Step::Car => Step::Search,
        other => other,
    }
}

/// `(state, city)` records picked in the dropdowns.
pub fn picked<'a>(
    states: &'a [StateRecord],
    cities: &'a [City],
    state_id: Option<i64>,
    city_id: Option<i64>,
) -> (Option<&'a StateRecord>, Option<&'a City>) {
    let state = state_id.and_then(|id| states.iter().find(|s| s.state_id == id));
    let city = city_id.and_then(|id| cities.iter().find(|c| c.city_id == id));
    (state, city)
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // A details or review step left open past its dates drops back to search.
    Effect::new(move || {
        let step = flow.with_untracked(|f| f.wizard.step());
        if !matches!(step, Step::Details | Step::Review) {
            return;
        }
        if let Err(err) = flow.with_untracked(|f| f.wizard.entry_guard(step, today())) {
            notify(ui, wizard_notice(&err));
            if let Some(notice) = flow.try_update(|f| f.rewind(Step::Search, today())).flatten() {
                notify(ui, notice);
            }
        }
    });

    let step = Signal::derive(move || flow.with(|f| f.wizard.step()));
    let panel = Memo::new(move |_| panel_for(step.get()));

    view! {
        <div class="page booking-page">
            <StepIndicator step=step/>
            {move || match panel.get() {
                Step::Details => view! { <DetailsStep/> }.into_any(),
                Step::Review => view! { <ReviewStep/> }.into_any(),
                Step::Confirmed => view! { <ConfirmedStep/> }.into_any(),
                _ => view! { <SearchStep/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// SEARCH
// =============================================================================

#[component]
fn SearchStep() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let deep_link = Memo::new(move |_| {
        query.with(|q| DeepLink::parse(q.get("hubId").as_deref(), q.get("carId").as_deref()))
    });

    let previous = flow.with_untracked(|f| f.wizard.search().cloned());
    let mode = RwSignal::new(match previous.as_ref().map(|s| &s.location) {
        Some(Location::Airport { .. }) => SearchMode::Airport,
        _ => SearchMode::City,
    });
    let pickup = RwSignal::new(previous.as_ref().map(|s| s.pickup.clone()).unwrap_or_default());
    let return_at = RwSignal::new(previous.as_ref().map(|s| s.return_at.clone()).unwrap_or_default());
    let different_return = RwSignal::new(previous.as_ref().is_some_and(|s| s.different_return));
    let airport_code = RwSignal::new(match previous.as_ref().map(|s| &s.location) {
        Some(Location::Airport { code, .. }) => code.clone(),
        _ => String::new(),
    });
    let states = RwSignal::new(Vec::<StateRecord>::new());
    let cities = RwSignal::new(Vec::<City>::new());
    let state_id = RwSignal::new(None::<i64>);
    let city_id = RwSignal::new(None::<i64>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_states().await {
            Ok(list) => states.set(list),
            Err(e) => log::error!("failed to load states: {e}"),
        }
    });

    let on_state_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev).parse::<i64>().ok();
        state_id.set(id);
        city_id.set(None);
        cities.set(Vec::new());
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                match crate::net::api::get_cities(id).await {
                    Ok(list) => cities.set(list),
                    Err(e) => log::error!("failed to load cities: {e}"),
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let today = today();
        let (pickup_value, return_value) = (pickup.get(), return_at.get());
        if let Err(err) = validate_search_dates(&pickup_value, &return_value, today) {
            notify(ui, Notice::warning(err.title(), err.to_string()));
            return;
        }

        if let Some(link) = deep_link.get() {
            busy.set(true);
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    follow_deep_link(link, pickup_value, return_value, flow, ui, navigate).await;
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = link;
            return;
        }

        let criteria = move |location: Location| SearchCriteria {
            pickup: pickup_value.clone(),
            return_at: return_value.clone(),
            different_return: different_return.get(),
            location,
        };
        match mode.get() {
            SearchMode::City => {
                let location = states.with(|s| {
                    cities.with(|c| {
                        let (state, city) = picked(s, c, state_id.get(), city_id.get());
                        Location::from_city(state, city, c)
                    })
                });
                let outcome = location
                    .map_err(Into::into)
                    .and_then(|location| flow.try_update(|f| f.wizard.submit_search(criteria(location), today)).unwrap_or(Ok(())));
                match outcome {
                    Ok(()) => navigate(step_path(Step::Hub), NavigateOptions::default()),
                    Err(err) => notify(ui, wizard_notice(&err)),
                }
            }
            SearchMode::Airport => {
                let code = airport_code.get();
                if code.trim().is_empty() {
                    let err = booking::validate::SearchError::MissingAirportCode;
                    notify(ui, Notice::warning(err.title(), err.to_string()));
                    return;
                }
                busy.set(true);
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        let hubs = match crate::net::api::search_locations(code.trim()).await {
                            Ok(hubs) => hubs,
                            Err(e) => {
                                notify(ui, Notice::danger("Search failed", e.to_string()));
                                busy.set(false);
                                return;
                            }
                        };
                        let outcome = Location::from_airport(&code, hubs)
                            .map_err(Into::into)
                            .and_then(|location| {
                                flow.try_update(|f| f.wizard.submit_search(criteria(location), today())).unwrap_or(Ok(()))
                            });
                        match outcome {
                            Ok(()) => navigate(step_path(Step::Hub), NavigateOptions::default()),
                            Err(err) => notify(ui, wizard_notice(&err)),
                        }
                        busy.set(false);
                    });
                }
            }
        }
    };

    view! {
        <section class="booking-step booking-step--search">
            <h1>"Find your car"</h1>
            {move || {
                deep_link
                    .get()
                    .map(|_| {
                        view! {
                            <p class="booking-step__hint">
                                "Choose your pickup and return times to reserve the vehicle you picked."
                            </p>
                        }
                    })
            }}
            <form class="search-form" on:submit=on_submit>
                <Show when=move || deep_link.get().is_none()>
                    <div class="search-form__modes">
                        <button
                            type="button"
                            class="tab"
                            class:tab--active=move || mode.get() == SearchMode::City
                            on:click=move |_| mode.set(SearchMode::City)
                        >
                            "City"
                        </button>
                        <button
                            type="button"
                            class="tab"
                            class:tab--active=move || mode.get() == SearchMode::Airport
                            on:click=move |_| mode.set(SearchMode::Airport)
                        >
                            "Airport"
                        </button>
                    </div>
                    <Show
                        when=move || mode.get() == SearchMode::City
                        fallback=move || {
                            view! {
                                <label class="field">
                                    <span class="field__label">"Airport code"</span>
                                    <input
                                        class="field__input"
                                        type="text"
                                        maxlength="4"
                                        placeholder="BOM"
                                        prop:value=move || airport_code.get()
                                        on:input=move |ev| airport_code.set(event_target_value(&ev).to_ascii_uppercase())
                                    />
                                </label>
                            }
                        }
                    >
                        <label class="field">
                            <span class="field__label">"State"</span>
                            <select class="field__input" on:change=on_state_change>
                                <option value="">"Select state"</option>
                                {move || {
                                    states
                                        .get()
                                        .into_iter()
                                        .map(|s| view! { <option value=s.state_id.to_string()>{s.state_name}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field__label">"City"</span>
                            <select
                                class="field__input"
                                disabled=move || cities.with(Vec::is_empty)
                                on:change=move |ev| city_id.set(event_target_value(&ev).parse().ok())
                            >
                                <option value="">"Select city"</option>
                                {move || {
                                    cities
                                        .get()
                                        .into_iter()
                                        .map(|c| view! { <option value=c.city_id.to_string()>{c.city_name}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                    </Show>
                </Show>
                <label class="field">
                    <span class="field__label">"Pickup"</span>
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || pickup.get()
                        on:input=move |ev| pickup.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Return"</span>
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || return_at.get()
                        on:input=move |ev| return_at.set(event_target_value(&ev))
                    />
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || different_return.get()
                        on:change=move |ev| different_return.set(event_target_checked(&ev))
                    />
                    "Return to a different location"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
            </form>
        </section>
    }
}

/// Resolve a fleet-page link into a booking at details, or at car selection
/// for the same hub when the linked car is taken for these dates.
#[cfg(feature = "hydrate")]
async fn follow_deep_link<F>(
    link: DeepLink,
    pickup: String,
    return_at: String,
    flow: RwSignal<BookingFlow>,
    ui: RwSignal<UiState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions),
{
    use crate::net::api;

    let hub: Option<booking::Hub> = match api::get_hubs(None).await {
        Ok(hubs) => hubs.into_iter().find(|h| h.hub_id == link.hub_id),
        Err(e) => {
            notify(ui, Notice::danger("Could not load hubs", e.to_string()));
            return;
        }
    };
    let Some((hub, criteria)) = hub.and_then(|h| DeepLink::criteria(&h, &pickup, &return_at).map(|c| (h, c))) else {
        notify(ui, Notice::warning("Hub unavailable", "That pickup hub is no longer listed. Please search again."));
        navigate("/booking", NavigateOptions { replace: true, ..NavigateOptions::default() });
        return;
    };

    let car = match (
        api::get_car_types().await,
        api::get_available_cars(hub.hub_id, &pickup, &return_at, None).await,
    ) {
        (Ok(types), Ok(cars)) => link.find_car(&cars, &types),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("availability lookup failed: {e}");
            None
        }
    };

    let today = today();
    let outcome = match car {
        Some(car) => flow.try_update(|f| f.wizard.resume(criteria, hub, car, today)).map(|r| r.map(|()| Step::Details)),
        None => flow
            .try_update(|f| f.wizard.submit_search(criteria, today).and_then(|()| f.wizard.select_hub(hub, today)))
            .map(|r| r.map(|()| Step::Car)),
    };
    match outcome {
        Some(Ok(Step::Details)) => navigate(step_path(Step::Details), NavigateOptions::default()),
        Some(Ok(step)) => {
            notify(
                ui,
                Notice::warning("Vehicle unavailable", "That car is booked for your dates. Choose another at the same hub."),
            );
            navigate(step_path(step), NavigateOptions::default());
        }
        Some(Err(err)) => notify(ui, wizard_notice(&err)),
        None => {}
    }
}

// =============================================================================
// DETAILS
// =============================================================================

#[component]
fn AddOnPicker() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();

    view! {
        <fieldset class="add-ons">
            <legend>"Add-ons"</legend>
            <Show when=move || flow.with(|f| f.add_ons.is_empty())>
                <p class="add-ons__empty">"No add-ons available."</p>
            </Show>
            {move || {
                flow.with(|f| f.add_ons.clone())
                    .into_iter()
                    .map(|add_on| {
                        let id = add_on.add_on_id;
                        let child_seat = is_child_seat(&add_on.add_on_name);
                        let selected = move || flow.with(|f| f.wizard.add_ons().contains(id));
                        view! {
                            <div class="add-ons__item" class:add-ons__item--selected=selected>
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=selected
                                        on:change=move |_| {
                                            flow.update(|f| {
                                                f.wizard.add_ons_mut().toggle(id);
                                            });
                                        }
                                    />
                                    {add_on.add_on_name.clone()}
                                </label>
                                <span class="add-ons__rate">{format!("{} / day", format_inr(add_on.addon_daily_rate))}</span>
                                <Show when=move || child_seat && selected()>
                                    <select
                                        class="add-ons__qty"
                                        prop:value=move || flow.with(|f| f.wizard.add_ons().child_seat_qty().to_string())
                                        on:change=move |ev| {
                                            let qty = event_target_value(&ev).parse().unwrap_or(1);
                                            flow.update(|f| f.wizard.add_ons_mut().set_child_seat_qty(qty));
                                        }
                                    >
                                        {(1..=MAX_CHILD_SEATS)
                                            .map(|n| view! { <option value=n.to_string()>{n}</option> })
                                            .collect_view()}
                                    </select>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </fieldset>
    }
}

#[component]
fn DetailsStep() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let draft = RwSignal::new(flow.with_untracked(|f| f.draft.clone()));
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let current = draft.get();
        flow.update(|f| f.draft = current);
    });

    let lookup = move |email: String| {
        if email.trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::find_customer(email.trim()).await {
                Ok(found) => {
                    let member = found.is_some();
                    draft.update(|d| *d = prefill_draft(d, found, email.trim()));
                    if member {
                        notify(ui, Notice::info("Welcome back", "We filled in your saved details."));
                    }
                }
                Err(e) => log::warn!("customer lookup failed: {e}"),
            }
        });
    };

    // Catalogue and profile prefill, once per visit.
    let session_email = auth.with_untracked(|a| a.session.as_ref().and_then(|s| s.email.clone()));
    if draft.with_untracked(|d| d.email.is_empty()) {
        if let Some(email) = session_email {
            lookup(email);
        }
    }
    #[cfg(feature = "hydrate")]
    if flow.with_untracked(|f| f.add_ons.is_empty()) {
        leptos::task::spawn_local(async move {
            match crate::net::api::get_add_ons().await {
                Ok(list) => flow.update(|f| f.add_ons = list),
                Err(e) => log::error!("failed to load add-ons: {e}"),
            }
        });
    }

    let on_back = move |_| {
        if let Some(Err(err)) = flow.try_update(|f| f.wizard.back(today()).map(|_| ())) {
            notify(ui, wizard_notice(&err));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let customer = draft.get().cleaned();
        let found = validate_customer(&customer, today());
        let count = found.len();
        flow.update(|f| f.errors = found);
        if count > 0 {
            notify(ui, Notice::warning("Check your details", format!("{count} field(s) need attention.")));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_customer(&customer).await {
                Ok(saved) => {
                    let saved = saved.normalized_for_form();
                    draft.set(saved.clone());
                    let outcome = flow.try_update(|f| {
                        f.errors = FieldErrors::default();
                        f.wizard.customer_saved(saved, today())
                    });
                    if let Some(Err(err)) = outcome {
                        notify(ui, wizard_notice(&err));
                    }
                }
                Err(e) => notify(ui, Notice::danger("Save failed", format!("Error saving customer info: {e}"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = customer;
    };

    let errors = Signal::derive(move || flow.with(|f| f.errors.clone()));
    let quote = Signal::derive(move || flow.with(BookingFlow::quote));
    let summary = move || {
        flow.with(|f| {
            let car = f.wizard.car().map(|c| c.model.clone()).unwrap_or_default();
            let hub = f.wizard.hub().map(|h| h.hub_name.clone()).unwrap_or_default();
            format!("{car} from {hub}")
        })
    };

    view! {
        <section class="booking-step booking-step--details">
            <h1>"Driver details"</h1>
            <p class="booking-step__summary">{summary}</p>
            <div class="booking-step__grid">
                <form class="booking-step__form" on:submit=on_submit>
                    <div class="booking-step__lookup">
                        <button
                            type="button"
                            class="btn"
                            on:click=move |_| lookup(draft.with_untracked(|d| d.email.clone()))
                        >
                            "Find my saved details"
                        </button>
                    </div>
                    <CustomerForm customer=draft errors=errors/>
                    <div class="booking-step__actions">
                        <button type="button" class="btn" on:click=on_back>
                            "Back"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Continue to review" }}
                        </button>
                    </div>
                </form>
                <aside class="booking-step__aside">
                    <AddOnPicker/>
                    <PriceSummary quote=quote/>
                </aside>
            </div>
        </section>
    }
}

// =============================================================================
// REVIEW
// =============================================================================

#[component]
fn ReviewStep() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let busy = RwSignal::new(false);

    let on_back = move |_| {
        if let Some(Err(err)) = flow.try_update(|f| f.wizard.back(today()).map(|_| ())) {
            notify(ui, wizard_notice(&err));
        }
    };

    let on_confirm = move |_| {
        if busy.get() {
            return;
        }
        let request = match flow.with(|f| f.wizard.booking_request(&f.add_ons, today())) {
            Ok(request) => request,
            Err(err) => {
                notify(ui, wizard_notice(&err));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&request).await {
                Ok(response) => {
                    let car_name = flow.with_untracked(|f| f.wizard.car().map(|c| c.model.clone()));
                    let owner = auth.with_untracked(AuthState::identity).or_else(|| request.email.clone());
                    crate::util::storage::booking_cache().record(
                        &response,
                        car_name.as_deref(),
                        owner.as_deref(),
                        crate::util::clock::now_ms(),
                    );
                    let reference = response
                        .confirmation_number
                        .clone()
                        .unwrap_or_else(|| format!("#{}", response.booking_id));
                    if let Some(Err(err)) = flow.try_update(|f| f.wizard.confirm(response)) {
                        notify(ui, wizard_notice(&err));
                    } else {
                        notify(ui, Notice::success("Booking Confirmed!", format!("Your booking reference is {reference}.")));
                    }
                }
                Err(e) => notify(ui, Notice::danger("Booking Failed", e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, auth);
    };

    let quote = Signal::derive(move || flow.with(BookingFlow::quote));
    let details = move || {
        flow.with(|f| {
            let w = &f.wizard;
            let search = w.search();
            let chosen: Vec<String> = f
                .add_ons
                .iter()
                .filter_map(|a| match w.add_ons().quantity_of(a) {
                    0 => None,
                    1 => Some(a.add_on_name.clone()),
                    n => Some(format!("{} × {n}", a.add_on_name)),
                })
                .collect();
            view! {
                <dl class="review">
                    <dt>"Location"</dt>
                    <dd>{search.map(|s| s.location.describe()).unwrap_or_default()}</dd>
                    <dt>"Pickup hub"</dt>
                    <dd>{w.hub().map(|h| h.hub_name.clone()).unwrap_or_default()}</dd>
                    <dt>"Vehicle"</dt>
                    <dd>{w.car().map(|c| format!("{} ({})", c.model, c.car_type.car_type_name)).unwrap_or_default()}</dd>
                    <dt>"Pickup"</dt>
                    <dd>{search.map(|s| format_display(&s.pickup)).unwrap_or_default()}</dd>
                    <dt>"Return"</dt>
                    <dd>{search.map(|s| format_display(&s.return_at)).unwrap_or_default()}</dd>
                    <dt>"Driver"</dt>
                    <dd>{w.customer().map(|c| format!("{} · {}", c.full_name(), c.email)).unwrap_or_default()}</dd>
                    <dt>"Add-ons"</dt>
                    <dd>{if chosen.is_empty() { "None".to_owned() } else { chosen.join(", ") }}</dd>
                </dl>
            }
        })
    };

    view! {
        <section class="booking-step booking-step--review">
            <h1>"Review your booking"</h1>
            <div class="booking-step__grid">
                {details}
                <aside class="booking-step__aside">
                    <PriceSummary quote=quote/>
                </aside>
            </div>
            <div class="booking-step__actions">
                <button class="btn" on:click=on_back>
                    "Back"
                </button>
                <button class="btn btn--primary" on:click=on_confirm disabled=move || busy.get()>
                    {move || if busy.get() { "Confirming..." } else { "Confirm booking" }}
                </button>
            </div>
        </section>
    }
}

// =============================================================================
// CONFIRMED
// =============================================================================

#[component]
fn ConfirmedStep() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let navigate = use_navigate();
    let confirmation = move || flow.with(|f| f.wizard.confirmation().cloned());

    let on_new = move |_| {
        flow.update(BookingFlow::restart);
        navigate("/booking", NavigateOptions::default());
    };

    view! {
        <section class="booking-step booking-step--confirmed">
            <h1>"Booking confirmed"</h1>
            {move || {
                confirmation()
                    .map(|b| {
                        let reference = b.confirmation_number.clone().unwrap_or_else(|| format!("#{}", b.booking_id));
                        let manage = format!("/manage-booking?id={}", b.booking_id);
                        let total = flow.with(BookingFlow::quote).map(|q| format_inr(q.total));
                        view! {
                            <p class="booking-step__reference">"Confirmation number: " <strong>{reference}</strong></p>
                            {total.map(|t| view! { <p class="booking-step__total">"Total: " {t}</p> })}
                            <div class="booking-step__actions">
                                <a class="btn" href=manage>
                                    "Manage this booking"
                                </a>
                                <a class="btn" href="/my-bookings">
                                    "My bookings"
                                </a>
                            </div>
                        }
                    })
            }}
            <button class="btn btn--primary" on:click=on_new>
                "Start a new booking"
            </button>
        </section>
    }
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;
