//! Colored status pill.

use booking::BookingStatus;
use booking::filter::{Tone, fleet_tone, status_tone};
use leptos::prelude::*;

#[component]
pub fn Badge(tone: Tone, #[prop(into)] text: String) -> impl IntoView {
    view! { <span class=format!("badge badge--{}", tone.as_class())>{text}</span> }
}

#[component]
pub fn StatusBadge(status: BookingStatus) -> impl IntoView {
    view! { <Badge tone=status_tone(&status) text=status.to_string()/> }
}

#[component]
pub fn FleetBadge(#[prop(into)] status: String) -> impl IntoView {
    view! { <Badge tone=fleet_tone(&status) text=status/> }
}
