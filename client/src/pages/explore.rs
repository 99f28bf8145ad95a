//! Public fleet browser with a "Book now" deep link into the booking flow.

use booking::filter::{FleetStatus, filter_fleet_cars};
use booking::pricing::format_inr;
use booking::{FleetCar, FleetOverview, HubFleet};
use leptos::prelude::*;

use crate::components::status_badge::FleetBadge;

/// Every car matching the filters, paired with its hub.
pub fn explore_listing<'a>(
    hubs: &'a [HubFleet],
    hub_id: Option<i64>,
    search: &str,
    status: FleetStatus,
) -> Vec<(&'a HubFleet, &'a FleetCar)> {
    hubs.iter()
        .filter(|hub| hub_id.is_none_or(|id| hub.hub_id == id))
        .flat_map(|hub| filter_fleet_cars(&hub.cars, search, status).into_iter().map(move |car| (hub, car)))
        .collect()
}

pub fn book_now_href(hub_id: i64, car_id: i64) -> String {
    format!("/booking?hubId={hub_id}&carId={car_id}")
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let fleet = RwSignal::new(None::<FleetOverview>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let hub_filter = RwSignal::new(None::<i64>);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(FleetStatus::Available);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_fleet_overview().await {
            Ok(data) => fleet.set(Some(data)),
            Err(e) => {
                log::error!("fleet overview failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let hub_options = move || {
        fleet.with(|f| {
            f.as_ref()
                .map(|f| {
                    f.hubs
                        .iter()
                        .map(|h| {
                            let label = match &h.city_name {
                                Some(city) => format!("{} - {city}", h.hub_name),
                                None => h.hub_name.clone(),
                            };
                            view! { <option value=h.hub_id.to_string()>{label}</option> }
                        })
                        .collect_view()
                })
        })
    };

    let cards = move || {
        fleet.with(|f| {
            let Some(f) = f else {
                return Vec::new();
            };
            explore_listing(&f.hubs, hub_filter.get(), &search.get(), status.get())
                .into_iter()
                .map(|(hub, car)| {
                    let bookable = car.status == FleetStatus::Available.label();
                    let href = book_now_href(hub.hub_id, car.car_id);
                    let rate = car.daily_rate.map(|r| format!("{} / day", format_inr(r))).unwrap_or_default();
                    view! {
                        <article class="vehicle-card">
                            {car
                                .image_path
                                .clone()
                                .map(|src| view! { <img class="vehicle-card__image" src=src alt=car.model.clone()/> })}
                            <header class="vehicle-card__header">
                                <h3>{car.model.clone()}</h3>
                                <FleetBadge status=car.status.clone()/>
                            </header>
                            <p class="vehicle-card__meta">
                                {car.car_type.clone().unwrap_or_default()} " · " {car.registration_number.clone()}
                            </p>
                            <p class="vehicle-card__hub">{hub.hub_name.clone()}</p>
                            <p class="vehicle-card__rate">{rate}</p>
                            <Show when=move || bookable>
                                <a class="btn btn--primary" href=href.clone()>
                                    "Book now"
                                </a>
                            </Show>
                        </article>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let is_empty = move || {
        fleet.with(|f| {
            f.as_ref().is_none_or(|f| explore_listing(&f.hubs, hub_filter.get(), &search.get(), status.get()).is_empty())
        })
    };

    view! {
        <div class="page explore-page">
            <header class="page__header">
                <h1>"Explore our fleet"</h1>
                <p>"Browse vehicles across all our locations"</p>
            </header>
            <div class="filters">
                <select
                    class="filters__select"
                    on:change=move |ev| hub_filter.set(event_target_value(&ev).parse().ok())
                >
                    <option value="all">"All locations"</option>
                    {hub_options}
                </select>
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Search model or registration"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="filters__tabs">
                    {FleetStatus::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <button
                                    class="tab"
                                    class:tab--active=move || status.get() == s
                                    on:click=move |_| status.set(s)
                                >
                                    {s.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading vehicles..."</p> }>
                {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
                <div class="vehicle-grid">{cards}</div>
                <Show when=move || error.get().is_none() && is_empty()>
                    <p class="page__empty">"No vehicles match your filters."</p>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;
