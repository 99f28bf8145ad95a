//! Top navigation bar: role-dependent links, theme toggle, and sign-out.

use booking::session::nav_links;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::booking::BookingFlow;
use crate::util::storage::{BrowserStore, booking_cache};
use crate::util::theme::use_theme;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let flow = expect_context::<RwSignal<BookingFlow>>();
    let theme = use_theme();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(|a| a.sign_out(&BrowserStore::session()));
        booking_cache().clear();
        flow.update(BookingFlow::restart);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "IndiaDrive"
            </a>
            <ul class="nav-bar__links">
                {move || {
                    nav_links(auth.get().role())
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a class="nav-bar__link" href=link.path>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <span class="nav-bar__spacer"></span>
            <button
                class="btn nav-bar__theme"
                title="Toggle theme"
                on:click=move |_| theme.toggle()
            >
                {move || theme.get().toggle_icon()}
            </button>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| {
                    view! {
                        <a class="btn nav-bar__login" href="/login">
                            "Login"
                        </a>
                    }
                }
            >
                <span class="nav-bar__user">{move || auth.get().identity().unwrap_or_default()}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
