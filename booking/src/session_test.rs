use super::*;
use serde_json::json;

fn token(payload: &Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

fn session(payload: &Value, role: Option<&str>) -> Session {
    Session {
        token: token(payload),
        role: role.map(str::to_owned),
        email: Some("asha@example.in".into()),
        ..Session::default()
    }
}

const NOW: i64 = 1_700_000_000;

#[test]
fn decodes_exp_and_plain_role() {
    let claims = decode_claims(&token(&json!({ "exp": NOW + 60, "role": "STAFF" }))).unwrap();
    assert_eq!(claims, Claims { exp: Some(NOW + 60), role: Some("STAFF".into()) });
}

#[test]
fn decodes_microsoft_role_claim() {
    let claims = decode_claims(&token(&json!({ (MS_ROLE_CLAIM): ["Admin"] }))).unwrap();
    assert_eq!(claims.role.as_deref(), Some("Admin"));
    assert_eq!(claims.exp, None);
}

#[test]
fn rejects_non_jwt() {
    assert_eq!(decode_claims("abc"), Err(SessionError::NotJwt));
    assert!(matches!(decode_claims("a.!!!.c"), Err(SessionError::Base64(_))));
}

#[test]
fn missing_session_goes_to_login() {
    assert_eq!(check_access(None, RouteAccess::SignedIn, NOW), Access::Login { clear_session: false });
    assert_eq!(check_access(None, RouteAccess::Public, NOW), Access::Granted);
}

#[test]
fn expired_token_clears_session() {
    let s = session(&json!({ "exp": NOW - 1 }), Some("CUSTOMER"));
    assert_eq!(check_access(Some(&s), RouteAccess::SignedIn, NOW), Access::Login { clear_session: true });
}

#[test]
fn garbage_token_clears_session() {
    let s = Session { token: "not-a-token".into(), role: Some("ADMIN".into()), ..Session::default() };
    assert_eq!(check_access(Some(&s), RouteAccess::AdminOnly, NOW), Access::Login { clear_session: true });
}

#[test]
fn wrong_role_goes_home() {
    let s = session(&json!({ "exp": NOW + 600 }), Some("customer"));
    assert_eq!(check_access(Some(&s), RouteAccess::StaffOrAdmin, NOW), Access::Home);
    assert_eq!(check_access(Some(&s), RouteAccess::SignedIn, NOW), Access::Granted);
}

#[test]
fn role_falls_back_to_token_claim() {
    let s = session(&json!({ "exp": NOW + 600, "role": "Admin" }), None);
    assert_eq!(s.effective_role(), Some(Role::Admin));
    assert_eq!(check_access(Some(&s), RouteAccess::AdminOnly, NOW), Access::Granted);
}

#[test]
fn identity_prefers_email() {
    let mut s = Session { username: Some("asha".into()), ..Session::default() };
    assert_eq!(s.identity(), Some("asha"));
    s.email = Some("asha@example.in".into());
    assert_eq!(s.identity(), Some("asha@example.in"));
}

#[test]
fn bearer_header() {
    let s = Session { token: "t0k".into(), ..Session::default() };
    assert_eq!(s.bearer(), "Bearer t0k");
}

#[test]
fn login_response_parses() {
    let s: Session = serde_json::from_value(json!({
        "token": "x.y.z", "role": "STAFF", "userId": 4, "email": "s@x.in", "username": "s", "hubId": 2, "customerId": null
    }))
    .unwrap();
    assert_eq!(s.hub_id, Some(2));
    assert_eq!(s.customer_id, None);
}

#[test]
fn home_and_nav_depend_on_role() {
    assert_eq!(home_path(Some(Role::Staff)), "/staff/dashboard");
    assert_eq!(home_path(None), "/");
    assert!(nav_links(Some(Role::Customer)).iter().any(|l| l.path == "/my-bookings"));
    assert!(!nav_links(None).iter().any(|l| l.path == "/my-bookings"));
    assert!(nav_links(Some(Role::Admin)).iter().all(|l| l.path.starts_with("/admin")));
    assert!(nav_links(Some(Role::Staff)).iter().any(|l| l.path == "/staff/on-spot"));
}
