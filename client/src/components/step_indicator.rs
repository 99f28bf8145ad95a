//! Booking progress indicator.

use booking::wizard::Step;
use leptos::prelude::*;

use crate::state::booking::indicator_steps;

#[component]
pub fn StepIndicator(#[prop(into)] step: Signal<Step>) -> impl IntoView {
    view! {
        <ol class="steps">
            {indicator_steps()
                .into_iter()
                .map(|(number, label)| {
                    let state = move || {
                        let current = step.get().number();
                        if number < current || step.get() == Step::Confirmed {
                            "steps__item steps__item--done"
                        } else if number == current {
                            "steps__item steps__item--current"
                        } else {
                            "steps__item"
                        }
                    };
                    view! {
                        <li class=state>
                            <span class="steps__number">{number}</span>
                            <span class="steps__label">{label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
