//! Route wrapper enforcing sign-in and role requirements.

use booking::session::RouteAccess;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::clock::now_secs;
use crate::util::guard::{install_access_redirect, redirect_for};

/// Renders `children` only once the stored session grants `access`.
#[component]
pub fn Protected(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_access_redirect(auth, access, move |path, options| navigate(path, options));

    let granted = move || {
        let state = auth.get();
        state.loaded && redirect_for(&state, access, now_secs()).is_none()
    };

    view! {
        <Show
            when=granted
            fallback=move || {
                view! {
                    <div class="page page--pending">
                        <p>{move || if auth.get().loaded { "Redirecting..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
