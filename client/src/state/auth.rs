//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the nav bar, and identity-dependent pages. The
//! session is the backend's login response, mirrored into
//! `sessionStorage["user"]` so the REST transport can attach the bearer token
//! without reaching into reactive state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use booking::cache::KeyValueStore;
use booking::session::SESSION_KEY;
use booking::{Role, Session};

use crate::util::storage::{BrowserStore, load_json, save_json};

/// Authentication state tracking the current session and whether it has been
/// loaded from storage yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// False until the first client-side read of storage. Guards wait for it.
    pub loaded: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(Session::effective_role)
    }

    pub fn identity(&self) -> Option<String> {
        self.session.as_ref().and_then(Session::identity).map(str::to_owned)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.token.is_empty())
    }

    /// Adopt a fresh login response and persist it.
    pub fn sign_in(&mut self, session: Session, store: &impl KeyValueStore) {
        save_json(store, SESSION_KEY, &session);
        self.session = Some(session);
        self.loaded = true;
    }

    /// Forget the session everywhere.
    pub fn sign_out(&mut self, store: &impl KeyValueStore) {
        store.remove(SESSION_KEY);
        self.session = None;
        self.loaded = true;
    }

    /// Read the persisted session, if any.
    pub fn restore(&mut self, store: &impl KeyValueStore) {
        self.session = load_json::<Session>(store, SESSION_KEY).filter(|s| !s.token.is_empty());
        self.loaded = true;
    }
}

/// Session as currently persisted in the tab, for the REST transport.
pub fn stored_session() -> Option<Session> {
    load_json::<Session>(&BrowserStore::session(), SESSION_KEY).filter(|s| !s.token.is_empty())
}
