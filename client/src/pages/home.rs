//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Drive India your way"</h1>
                <p class="hero__subtitle">
                    "Self-drive cars at airports and city hubs across the country. Transparent daily rates, no hidden charges."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/booking">
                        "Book a car"
                    </a>
                    <a class="btn" href="/explore-vehicles">
                        "Explore the fleet"
                    </a>
                </div>
            </section>
            <section class="features">
                <article class="feature">
                    <h2>"Safety first"</h2>
                    <p>"Every car is inspected and sanitised before each rental."</p>
                </article>
                <article class="feature">
                    <h2>"Honest pricing"</h2>
                    <p>"Pay the daily rate and the add-ons you choose. Nothing else."</p>
                </article>
                <article class="feature">
                    <h2>"24/7 support"</h2>
                    <p>"Roadside help and booking changes any time of day."</p>
                </article>
                <article class="feature">
                    <h2>"Book in minutes"</h2>
                    <p>"Pick a hub, choose a car, and you are ready to go."</p>
                </article>
            </section>
        </div>
    }
}
