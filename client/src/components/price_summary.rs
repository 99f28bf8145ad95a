//! Price breakdown for the current booking selection.

use booking::pricing::{Quote, format_inr};
use leptos::prelude::*;

#[component]
pub fn PriceSummary(#[prop(into)] quote: Signal<Option<Quote>>) -> impl IntoView {
    view! {
        {move || {
            quote.get().map(|q| {
                view! {
                    <dl class="price-summary">
                        <dt>"Rental days"</dt>
                        <dd>{q.days}</dd>
                        <dt>"Car rental"</dt>
                        <dd>{format_inr(q.car_total)}</dd>
                        <dt>"Add-ons"</dt>
                        <dd>{format_inr(q.add_on_total)}</dd>
                        <dt class="price-summary__total">"Total"</dt>
                        <dd class="price-summary__total">{format_inr(q.total)}</dd>
                    </dl>
                }
            })
        }}
    }
}
