//! Look up one booking by id to view, cancel, or download its invoice.

use booking::{ApiError, BookingResponse, BookingStatus};
use booking::cache::Freshness;
use booking::dates::format_display;
use booking::pricing::{display_total, format_inr};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::status_badge::StatusBadge;
use crate::state::staff::parse_booking_id;
use crate::state::ui::{Notice, UiState, notify};
use crate::util::download::fetch_invoice;

pub const LOOKUP_FAILED: &str = "Failed to retrieve booking details. It might not exist or the server is down.";

/// Message shown when a booking could not be loaded from server or cache.
pub fn lookup_error(booking_id: i64, error: &ApiError) -> String {
    match error {
        ApiError::NotFound(_) => format!("Booking #{booking_id} was not found."),
        ApiError::Unauthorized(message) => message.clone(),
        _ => LOOKUP_FAILED.to_owned(),
    }
}

/// Cancel and invoice are offered only while the booking is still open.
pub fn actions_enabled(status: &BookingStatus) -> bool {
    !matches!(status, BookingStatus::Cancelled | BookingStatus::Completed)
}

#[component]
pub fn ManageBookingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let booking_id = Memo::new(move |_| query.with(|q| q.get("id").as_deref().and_then(parse_booking_id)));

    let booking = RwSignal::new(None::<BookingResponse>);
    let freshness = RwSignal::new(Freshness::Live);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let confirming = RwSignal::new(false);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = booking_id.get() else {
            booking.set(None);
            return;
        };
        loading.set(true);
        error.set(None);
        confirming.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::clock::now_ms;

            let result = crate::net::api::get_booking(id).await;
            match crate::util::storage::booking_cache().resolve_one(result, id, now_ms()) {
                Ok(resolved) => {
                    freshness.set(resolved.freshness);
                    booking.set(Some(resolved.value));
                }
                Err(e) => {
                    booking.set(None);
                    log::warn!("booking {id} lookup failed: {e}");
                    error.set(Some(lookup_error(id, &e)));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, freshness);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_booking_id(&search.get()) {
            Some(id) => navigate(&format!("/manage-booking?id={id}"), NavigateOptions::default()),
            None => notify(ui, Notice::warning("Invalid booking id", "Enter the numeric booking id.")),
        }
    };

    let on_cancel = move |_| {
        let Some(id) = booking.with(|b| b.as_ref().map(|b| b.booking_id)) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_booking(id).await {
                Ok(updated) => {
                    crate::util::storage::booking_cache().record(&updated, None, None, crate::util::clock::now_ms());
                    booking.set(Some(updated));
                    freshness.set(Freshness::Live);
                    notify(ui, Notice::success("Cancelled!", "Your reservation has been successfully cancelled."));
                }
                Err(e) => {
                    log::error!("cancel {id} failed: {e}");
                    notify(ui, Notice::danger("Cancellation failed", "Failed to cancel the booking. Please contact support."));
                }
            }
            confirming.set(false);
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let details = move || {
        booking.get().map(|b| {
            let id = b.booking_id;
            let open = actions_enabled(&b.booking_status);
            let cancellable = open && b.booking_status.is_cancellable();
            let add_ons = if b.selected_add_ons.is_empty() { "None".to_owned() } else { b.selected_add_ons.join(", ") };
            let fmt = |d: &Option<String>| d.as_deref().map(format_display).unwrap_or_default();
            view! {
                <article class="manage-card">
                    <header class="manage-card__header">
                        <h2>{b.confirmation_number.clone().unwrap_or_else(|| format!("Booking #{id}"))}</h2>
                        <StatusBadge status=b.booking_status.clone()/>
                    </header>
                    <dl class="review">
                        <dt>"Vehicle"</dt>
                        <dd>{b.car_name.clone().unwrap_or_else(|| "To be allotted".to_owned())}</dd>
                        <dt>"Pickup hub"</dt>
                        <dd>{b.pickup_hub.clone().unwrap_or_default()}</dd>
                        <dt>"Return hub"</dt>
                        <dd>{b.return_hub.clone().or_else(|| b.pickup_hub.clone()).unwrap_or_default()}</dd>
                        <dt>"Pickup"</dt>
                        <dd>{fmt(&b.start_date)}</dd>
                        <dt>"Return"</dt>
                        <dd>{fmt(&b.end_date)}</dd>
                        <dt>"Add-ons"</dt>
                        <dd>{add_ons}</dd>
                        <dt>"Total"</dt>
                        <dd>{format_inr(display_total(&b))}</dd>
                    </dl>
                    <footer class="manage-card__actions">
                        <button class="btn" disabled=!open on:click=move |_| fetch_invoice(id, ui)>
                            "Download invoice"
                        </button>
                        <Show when=move || cancellable && !confirming.get()>
                            <button class="btn btn--danger" on:click=move |_| confirming.set(true)>
                                "Cancel booking"
                            </button>
                        </Show>
                        <Show when=move || confirming.get()>
                            <p class="manage-card__confirm">"Cancel this reservation? This cannot be undone."</p>
                            <button class="btn btn--danger" disabled=move || busy.get() on:click=on_cancel>
                                "Yes, cancel it"
                            </button>
                            <button class="btn" on:click=move |_| confirming.set(false)>
                                "Keep booking"
                            </button>
                        </Show>
                    </footer>
                </article>
            }
        })
    };

    view! {
        <div class="page manage-page">
            <header class="page__header">
                <h1>"Manage booking"</h1>
            </header>
            <form class="lookup-form" on:submit=on_search>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Booking id"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Find"
                </button>
            </form>
            <Show when=move || freshness.get().is_stale()>
                <p class="notice notice--warning">"Showing a saved copy. The server could not be reached."</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading booking..."</p> }>
                {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
                {details}
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "manage_booking_test.rs"]
mod manage_booking_test;
