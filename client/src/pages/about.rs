//! Static company page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <header class="page__header">
                <h1>"About IndiaDrive"</h1>
                <p>"Making every journey across India comfortable and safe."</p>
            </header>
            <section class="about-page__story">
                <h2>"Our story"</h2>
                <p>
                    "IndiaDrive began with a handful of cars at a single airport hub. Today travellers pick up a car at airports and city centres nationwide and return it wherever suits their trip."
                </p>
                <h2>"Our mission"</h2>
                <p>"Reliable self-drive rentals with clear prices and people who pick up the phone."</p>
            </section>
            <section class="stats">
                <div class="stats__item">
                    <strong>"500+"</strong>
                    <span>"Premium vehicles"</span>
                </div>
                <div class="stats__item">
                    <strong>"20+"</strong>
                    <span>"Major hubs"</span>
                </div>
                <div class="stats__item">
                    <strong>"24/7"</strong>
                    <span>"Customer care"</span>
                </div>
            </section>
            <p class="about-page__tagline">"IndiaDrive is more than a rental company; it's your partner on the road."</p>
        </div>
    }
}
