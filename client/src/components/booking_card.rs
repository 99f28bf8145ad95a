//! Summary card for one booking, shared by customer, staff, and admin lists.

use booking::BookingResponse;
use booking::dates::format_display;
use booking::pricing::{display_total, format_inr};
use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;

/// `children` renders the card's action buttons.
#[component]
pub fn BookingCard(
    booking: BookingResponse,
    /// Car name remembered from the booking flow when the server omits it.
    #[prop(default = None)]
    car_name: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title = booking
        .car_name
        .clone()
        .or(car_name)
        .unwrap_or_else(|| "Vehicle to be allotted".to_owned());
    let dates = format!(
        "{} → {}",
        booking.start_date.as_deref().map(format_display).unwrap_or_default(),
        booking.end_date.as_deref().map(format_display).unwrap_or_default(),
    );
    let reference = booking
        .confirmation_number
        .clone()
        .unwrap_or_else(|| format!("#{}", booking.booking_id));
    let hub = booking.pickup_hub.clone().unwrap_or_default();
    let customer = booking.customer_name.clone();
    let total = format_inr(display_total(&booking));

    view! {
        <article class="booking-card">
            <header class="booking-card__header">
                <h3 class="booking-card__title">{title}</h3>
                <StatusBadge status=booking.booking_status.clone()/>
            </header>
            <p class="booking-card__ref">{reference}</p>
            <p class="booking-card__dates">{dates}</p>
            <p class="booking-card__hub">{hub}</p>
            {customer.map(|name| view! { <p class="booking-card__customer">{name}</p> })}
            <p class="booking-card__total">{total}</p>
            <footer class="booking-card__actions">{children.map(|c| c())}</footer>
        </article>
    }
}
