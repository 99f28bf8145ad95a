use base64::Engine as _;

use super::*;
use booking::Session;

const NOW: i64 = 1_700_000_000;

fn token(exp: i64) -> String {
    let enc = |s: &str| base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s);
    format!("{}.{}.sig", enc(r#"{"alg":"none"}"#), enc(&format!(r#"{{"exp":{exp}}}"#)))
}

fn signed_in(role: &str, exp: i64) -> AuthState {
    AuthState {
        session: Some(Session { token: token(exp), role: Some(role.into()), ..Session::default() }),
        loaded: true,
    }
}

#[test]
fn waits_for_auth_to_load() {
    assert_eq!(redirect_for(&AuthState::default(), RouteAccess::AdminOnly, NOW), None);
}

#[test]
fn signed_out_goes_to_login() {
    let auth = AuthState { session: None, loaded: true };
    assert_eq!(
        redirect_for(&auth, RouteAccess::SignedIn, NOW),
        Some(Redirect { path: "/login", clear_session: false })
    );
}

#[test]
fn expired_session_is_cleared() {
    let auth = signed_in("CUSTOMER", NOW - 10);
    assert_eq!(
        redirect_for(&auth, RouteAccess::SignedIn, NOW),
        Some(Redirect { path: "/login", clear_session: true })
    );
}

#[test]
fn wrong_role_goes_to_own_home() {
    let auth = signed_in("STAFF", NOW + 600);
    assert_eq!(
        redirect_for(&auth, RouteAccess::AdminOnly, NOW),
        Some(Redirect { path: "/staff/dashboard", clear_session: false })
    );
    assert_eq!(redirect_for(&auth, RouteAccess::StaffOrAdmin, NOW), None);
}
