//! Every booking across all hubs, filterable by status and date window.

use booking::BookingResponse;
use booking::dates::format_display;
use booking::filter::{AdminStatusFilter, BookingCounts, DateRange, count_bookings, filter_admin_bookings};
use booking::pricing::format_inr;
use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;

/// Headline tiles in display order.
pub fn count_tiles(counts: BookingCounts) -> [(&'static str, usize); 4] {
    [
        ("Total", counts.total),
        ("Active", counts.active),
        ("Completed", counts.completed),
        ("Cancelled", counts.cancelled),
    ]
}

/// `2 records` / `1 record`.
pub fn records_label(n: usize) -> String {
    if n == 1 { "1 record".to_owned() } else { format!("{n} records") }
}

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<BookingResponse>::new());
    let status = RwSignal::new(AdminStatusFilter::All);
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_all_bookings().await {
                Ok(list) => {
                    bookings.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("all bookings failed: {e}");
                    error.set(Some(format!("Failed to synchronize booking data. {e}")));
                }
            }
            loading.set(false);
        });
    };
    load();

    let range = Memo::new(move |_| DateRange::from_inputs(&from.get(), &to.get()));
    let shown = Memo::new(move |_| {
        bookings.with(|all| filter_admin_bookings(all, status.get(), range.get()).into_iter().cloned().collect::<Vec<_>>())
    });

    let date_input = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="field field--inline">
                <span class="field__label">{label}</span>
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="page admin-page">
            <header class="page__header">
                <h1>"All bookings"</h1>
                <button class="btn" on:click=move |_| load()>
                    "Refresh"
                </button>
            </header>
            <div class="stat-grid">
                {move || {
                    count_tiles(bookings.with(|all| count_bookings(all)))
                        .into_iter()
                        .map(|(label, n)| {
                            view! {
                                <div class="stat">
                                    <span class="stat__value">{n}</span>
                                    <span class="stat__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="toolbar">
                <div class="tabs tabs--pills">
                    {AdminStatusFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    class=move || if status.get() == f { "tabs__item tabs__item--active" } else { "tabs__item" }
                                    on:click=move |_| status.set(f)
                                >
                                    {f.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {date_input("From", from)}
                {date_input("To", to)}
                <Show when=move || !range.get().is_empty()>
                    <button
                        class="btn"
                        on:click=move |_| {
                            from.set(String::new());
                            to.set(String::new());
                        }
                    >
                        "Clear dates"
                    </button>
                </Show>
                <span class="toolbar__count">{move || records_label(shown.with(Vec::len))}</span>
            </div>
            {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading bookings..."</p> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Confirmation"</th>
                            <th>"Schedule"</th>
                            <th>"Customer"</th>
                            <th>"Vehicle"</th>
                            <th>"Hubs"</th>
                            <th>"Status"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            shown
                                .get()
                                .into_iter()
                                .map(|b| {
                                    let date = |d: &Option<String>| d.as_deref().map_or_else(|| "N/A".to_owned(), format_display);
                                    view! {
                                        <tr>
                                            <td>{b.confirmation_number.clone().unwrap_or_else(|| format!("#{}", b.booking_id))}</td>
                                            <td>{format!("{} to {}", date(&b.start_date), date(&b.end_date))}</td>
                                            <td>
                                                {b.customer_name.clone().unwrap_or_default()}
                                                <br/>
                                                <small>{b.email.clone().unwrap_or_default()}</small>
                                            </td>
                                            <td>
                                                {b.car_name.clone().unwrap_or_default()}
                                                <br/>
                                                <small>{b.number_plate.clone().unwrap_or_else(|| "Not allotted".to_owned())}</small>
                                            </td>
                                            <td>
                                                {format!(
                                                    "{} → {}",
                                                    b.pickup_hub.clone().unwrap_or_default(),
                                                    b.return_hub.clone().unwrap_or_default(),
                                                )}
                                            </td>
                                            <td>
                                                <StatusBadge status=b.booking_status.clone()/>
                                            </td>
                                            <td>{format_inr(b.total_amount.unwrap_or_default())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || shown.with(Vec::is_empty)>
                    <p class="page__empty">"No bookings match this filter."</p>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "admin_bookings_test.rs"]
mod admin_bookings_test;
