//! Fleet status by hub with current rentals.

use std::collections::BTreeSet;

use booking::dates::format_display;
use booking::filter::{FleetStatus, fleet_sections};
use booking::pricing::format_inr;
use booking::{FleetOverview, FleetStatistics, RentalInfo};
use leptos::prelude::*;

use crate::components::status_badge::FleetBadge;

/// Headline tiles in display order.
pub fn statistic_tiles(stats: &FleetStatistics) -> [(&'static str, String); 5] {
    [
        ("Total cars", stats.total_cars.to_string()),
        ("Available", stats.total_available.to_string()),
        ("Rented", stats.total_rented.to_string()),
        ("Maintenance", stats.total_maintenance.to_string()),
        ("Utilization", format!("{:.1}%", stats.utilization_rate)),
    ]
}

/// Flip one hub between expanded and collapsed.
pub fn toggle_hub(expanded: &mut BTreeSet<i64>, hub_id: i64) {
    if !expanded.remove(&hub_id) {
        expanded.insert(hub_id);
    }
}

/// Who has the car and until when.
pub fn rental_line(rental: &RentalInfo) -> String {
    let until = rental.end_date.as_deref().map(format_display).unwrap_or_default();
    if until.is_empty() {
        format!("{} (#{})", rental.customer_name, rental.booking_id)
    } else {
        format!("{} (#{}) until {until}", rental.customer_name, rental.booking_id)
    }
}

#[component]
pub fn AdminFleetPage() -> impl IntoView {
    let fleet = RwSignal::new(None::<FleetOverview>);
    let expanded = RwSignal::new(BTreeSet::<i64>::new());
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(FleetStatus::All);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_fleet_overview().await {
            Ok(data) => {
                expanded.set(booking::filter::default_expanded(&data.hubs));
                fleet.set(Some(data));
            }
            Err(e) => {
                log::error!("fleet overview failed: {e}");
                error.set(Some(format!("Failed to load fleet data. {e}")));
            }
        }
        loading.set(false);
    });

    let sections = move || {
        fleet.with(|f| {
            let Some(f) = f else { return Vec::new() };
            search.with(|needle| {
                fleet_sections(&f.hubs, needle, status.get())
                    .into_iter()
                    .map(|section| {
                        let hub_id = section.hub.hub_id;
                        let title = match &section.hub.city_name {
                            Some(city) => format!("{} - {city}", section.hub.hub_name),
                            None => section.hub.hub_name.clone(),
                        };
                        let counts = format!(
                            "{} cars · {} available · {} rented · {} maintenance",
                            section.hub.total_cars,
                            section.hub.available_cars,
                            section.hub.rented_cars,
                            section.hub.maintenance_cars,
                        );
                        let rows = section
                            .cars
                            .into_iter()
                            .map(|car| {
                                view! {
                                    <tr>
                                        <td>{car.model.clone()}</td>
                                        <td>{car.car_type.clone().unwrap_or_default()}</td>
                                        <td>{car.registration_number.clone()}</td>
                                        <td>
                                            <FleetBadge status=car.status.clone()/>
                                        </td>
                                        <td>{car.daily_rate.map(format_inr).unwrap_or_default()}</td>
                                        <td>{car.current_rental.as_ref().map(rental_line).unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect_view();
                        view! {
                            <section class="fleet-hub">
                                <button class="fleet-hub__header" on:click=move |_| expanded.update(|e| toggle_hub(e, hub_id))>
                                    <h2>{title}</h2>
                                    <span class="fleet-hub__counts">{counts}</span>
                                </button>
                                <table class="table" class:table--hidden=move || !expanded.with(|e| e.contains(&hub_id))>
                                    <thead>
                                        <tr>
                                            <th>"Model"</th>
                                            <th>"Type"</th>
                                            <th>"Registration"</th>
                                            <th>"Status"</th>
                                            <th>"Daily rate"</th>
                                            <th>"Current rental"</th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="page admin-page">
            <header class="page__header">
                <h1>"Fleet overview"</h1>
            </header>
            <div class="stat-grid">
                {move || {
                    fleet
                        .with(|f| f.as_ref().map(|f| statistic_tiles(&f.statistics)))
                        .map(|tiles| {
                            tiles
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="stat">
                                            <span class="stat__value">{value}</span>
                                            <span class="stat__label">{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
            <div class="toolbar">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Search model or registration"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="tabs tabs--pills">
                    {FleetStatus::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <button
                                    class="tabs__item"
                                    class:tabs__item--active=move || status.get() == s
                                    on:click=move |_| status.set(s)
                                >
                                    {s.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading fleet..."</p> }>
                {sections}
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "admin_fleet_test.rs"]
mod admin_fleet_test;
