//! Vehicle category choice at the selected hub.
//!
//! Booking is by category: the backend allots a unit at handover. Live
//! availability for the searched dates is shown when the backend answers,
//! and sold-out categories cannot be picked.

use std::collections::BTreeMap;

use booking::pricing::{AddOnSelection, format_inr, quote};
use booking::wizard::{SelectedCar, Step};
use booking::{Car, CarType};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::step_indicator::StepIndicator;
use crate::state::booking::{BookingFlow, step_path, wizard_notice};
use crate::state::ui::{UiState, notify};
use crate::util::clock::today;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    /// Availability could not be checked.
    Unknown,
    Available(usize),
    SoldOut,
}

impl Availability {
    pub fn label(self) -> String {
        match self {
            Self::Unknown => String::new(),
            Self::Available(1) => "1 available".to_owned(),
            Self::Available(n) => format!("{n} available"),
            Self::SoldOut => "Sold out".to_owned(),
        }
    }
}

/// Free units per car type id.
pub fn availability_by_type(cars: &[Car]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for type_id in cars.iter().filter_map(|c| c.car_type_id.or_else(|| c.car_type.as_ref().map(|t| t.car_type_id))) {
        *counts.entry(type_id).or_insert(0) += 1;
    }
    counts
}

pub fn availability_of(counts: Option<&BTreeMap<i64, usize>>, car_type_id: i64) -> Availability {
    match counts {
        None => Availability::Unknown,
        Some(counts) => match counts.get(&car_type_id) {
            Some(&n) if n > 0 => Availability::Available(n),
            _ => Availability::SoldOut,
        },
    }
}

#[component]
pub fn CarSelectPage() -> impl IntoView {
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let car_types = RwSignal::new(Vec::<CarType>::new());
    let counts = RwSignal::new(None::<BTreeMap<i64, usize>>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    match flow.with_untracked(|f| f.wizard.entry_guard(Step::Car, today())) {
        Ok(()) => {
            let (hub_id, pickup, return_at) = flow.with_untracked(|f| {
                let search = f.wizard.search();
                (
                    f.wizard.hub().map(|h| h.hub_id).unwrap_or_default(),
                    search.map(|s| s.pickup.clone()).unwrap_or_default(),
                    search.map(|s| s.return_at.clone()).unwrap_or_default(),
                )
            });
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::get_car_types().await {
                    Ok(list) => car_types.set(list),
                    Err(e) => {
                        log::error!("failed to load car types: {e}");
                        error.set(Some("Failed to load fleet catalog. Please try again.".to_owned()));
                    }
                }
                loading.set(false);
                match crate::net::api::get_available_cars(hub_id, &pickup, &return_at, None).await {
                    Ok(cars) => counts.set(Some(availability_by_type(&cars))),
                    Err(e) => log::warn!("availability unavailable: {e}"),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (hub_id, pickup, return_at);
        }
        Err(err) => {
            let navigate = navigate.clone();
            Effect::new(move || {
                notify(ui, wizard_notice(&err));
                navigate("/booking", NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
    }

    let select = Callback::new(move |car_type: CarType| {
        let car = SelectedCar::from_car_type(&car_type);
        match flow.try_update(|f| f.wizard.select_car(car, today())) {
            Some(Ok(())) => navigate(step_path(Step::Details), NavigateOptions::default()),
            Some(Err(err)) => notify(ui, wizard_notice(&err)),
            None => {}
        }
    });

    let on_back = move |_| {
        if let Some(notice) = flow.try_update(|f| f.rewind(Step::Hub, today())).flatten() {
            notify(ui, notice);
        }
    };

    let hub_name = move || flow.with(|f| f.wizard.hub().map(|h| h.hub_name.clone()).unwrap_or_default());
    let days = move || flow.with(|f| f.wizard.search().map(|s| s.rental_days()).unwrap_or(1));
    let step = Signal::derive(move || flow.with(|f| f.wizard.step()));

    view! {
        <div class="page car-page">
            <StepIndicator step=step/>
            <header class="page__header">
                <h1>"Choose your vehicle"</h1>
                <p>{move || format!("Pickup at {} for {} day(s)", hub_name(), days())}</p>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading vehicles..."</p> }>
                {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
                <div class="vehicle-grid">
                    {move || {
                        car_types
                            .get()
                            .into_iter()
                            .map(|car_type| {
                                let id = car_type.car_type_id;
                                let availability = move || counts.with(|c| availability_of(c.as_ref(), id));
                                let estimate = format_inr(quote(car_type.daily_rate, days(), &[], &AddOnSelection::default()).total);
                                view! {
                                    <article class="vehicle-card" class:vehicle-card--sold-out=move || availability() == Availability::SoldOut>
                                        {car_type
                                            .image_path
                                            .clone()
                                            .map(|src| view! { <img class="vehicle-card__image" src=src alt=car_type.car_type_name.clone()/> })}
                                        <h3>{car_type.car_type_name.clone()}</h3>
                                        <p class="vehicle-card__rate">{format!("{} / day", format_inr(car_type.daily_rate))}</p>
                                        <p class="vehicle-card__meta">
                                            {format!("Weekly {} · Monthly {}", format_inr(car_type.weekly_rate), format_inr(car_type.monthly_rate))}
                                        </p>
                                        <p class="vehicle-card__estimate">"Estimated " {estimate}</p>
                                        <p class="vehicle-card__availability">{move || availability().label()}</p>
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || availability() == Availability::SoldOut
                                            on:click=move |_| select.run(car_type.clone())
                                        >
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
                <a class="btn" href=step_path(Step::Hub) on:click=on_back>
                    "Back to hubs"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "car_select_test.rs"]
mod car_select_test;
