//! The signed-in customer's bookings, with cached copies when the backend
//! cannot be reached.

use booking::BookingResponse;
use booking::cache::{CachedBooking, Freshness};
use leptos::prelude::*;

use crate::components::booking_card::BookingCard;
use crate::state::auth::AuthState;
use crate::state::ui::{Notice, UiState, notify};
use crate::util::clock::age_label;
use crate::util::download::fetch_invoice;

/// Banner text when the list came from the cache.
pub fn stale_banner(freshness: Freshness, now_ms: i64) -> Option<String> {
    match freshness {
        Freshness::Live => None,
        Freshness::Cached { cached_at_ms } => Some(format!(
            "Could not load your reservations from the server. Showing copies saved {}.",
            age_label(cached_at_ms, now_ms)
        )),
    }
}

/// Newest booking first.
pub fn newest_first(mut bookings: Vec<BookingResponse>) -> Vec<BookingResponse> {
    bookings.sort_by(|a, b| b.booking_id.cmp(&a.booking_id));
    bookings
}

/// Car name remembered for `booking_id`, if any.
pub fn remembered_car(cached: &[CachedBooking], booking_id: i64) -> Option<String> {
    cached.iter().find(|c| c.booking.booking_id == booking_id).and_then(|c| c.car_name.clone())
}

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let bookings = RwSignal::new(Vec::<BookingResponse>::new());
    let cached = RwSignal::new(Vec::<CachedBooking>::new());
    let banner = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        let Some(identity) = auth.with_untracked(AuthState::identity) else {
            error.set(Some("Please log in to view your reservations.".to_owned()));
            loading.set(false);
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::clock::now_ms;
            use crate::util::storage::booking_cache;

            let result = crate::net::api::get_bookings_by_user(&identity).await;
            let cache = booking_cache();
            match cache.resolve_for_user(result, &identity, now_ms()) {
                Ok(resolved) => {
                    banner.set(stale_banner(resolved.freshness, now_ms()));
                    bookings.set(newest_first(resolved.value));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("bookings for {identity} failed: {e}");
                    error.set(Some(format!("Could not load your reservations from the server. {e}")));
                }
            }
            cached.set(cache.for_user(&identity));
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (identity, banner, cached);
    };
    load();

    let cancel = Callback::new(move |booking_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_booking(booking_id).await {
                Ok(updated) => {
                    crate::util::storage::booking_cache().record(&updated, None, None, crate::util::clock::now_ms());
                    bookings.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|b| b.booking_id == booking_id) {
                            *slot = updated;
                        }
                    });
                    notify(ui, Notice::success("Cancelled!", "Your reservation has been successfully cancelled."));
                }
                Err(e) => notify(ui, Notice::danger("Cancellation failed", e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (booking_id, ui);
    });

    view! {
        <div class="page bookings-page">
            <header class="page__header">
                <h1>"My bookings"</h1>
                <button class="btn" on:click=move |_| load()>
                    "Refresh"
                </button>
            </header>
            {move || banner.get().map(|text| view! { <p class="notice notice--warning">{text}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading your reservations..."</p> }>
                {move || error.get().map(|e| view! { <p class="page__error">{e}</p> })}
                <Show when=move || error.get().is_none() && bookings.with(Vec::is_empty)>
                    <div class="page__empty">
                        <p>"You have no bookings yet."</p>
                        <a class="btn btn--primary" href="/booking">
                            "Book a car"
                        </a>
                    </div>
                </Show>
                <div class="booking-list">
                    {move || {
                        bookings
                            .get()
                            .into_iter()
                            .map(|b| {
                                let id = b.booking_id;
                                let cancellable = b.booking_status.is_cancellable();
                                let car_name = cached.with(|c| remembered_car(c, id));
                                view! {
                                    <BookingCard booking=b car_name=car_name>
                                        <a class="btn" href=format!("/manage-booking?id={id}")>
                                            "Manage"
                                        </a>
                                        <button class="btn" on:click=move |_| fetch_invoice(id, ui)>
                                            "Invoice"
                                        </button>
                                        <Show when=move || cancellable>
                                            <button class="btn btn--danger" on:click=move |_| cancel.run(id)>
                                                "Cancel"
                                            </button>
                                        </Show>
                                    </BookingCard>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "my_bookings_test.rs"]
mod my_bookings_test;
