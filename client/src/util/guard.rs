//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same redirect policy: no usable session
//! goes to `/login` (dropping an expired or malformed one), a signed-in user
//! without the right role goes to their own home page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use booking::session::{Access, RouteAccess, check_access, home_path};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::clock::now_secs;
use crate::util::storage::BrowserStore;

/// Where a guard sends the user, and whether the stored session must go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub clear_session: bool,
}

/// `None` while auth is still loading or access is granted.
pub fn redirect_for(auth: &AuthState, access: RouteAccess, now_secs: i64) -> Option<Redirect> {
    if !auth.loaded {
        return None;
    }
    match check_access(auth.session.as_ref(), access, now_secs) {
        Access::Granted => None,
        Access::Login { clear_session } => Some(Redirect { path: "/login", clear_session }),
        Access::Home => Some(Redirect { path: home_path(auth.role()), clear_session: false }),
    }
}

/// Redirect whenever auth has loaded and `access` is not granted.
pub fn install_access_redirect<F>(auth: RwSignal<AuthState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let Some(redirect) = redirect_for(&auth.get(), access, now_secs()) else {
            return;
        };
        if redirect.clear_session {
            auth.update(|a| a.sign_out(&BrowserStore::session()));
        }
        navigate(redirect.path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
