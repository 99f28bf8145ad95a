//! Login session, role policy, and route access.
//!
//! DESIGN
//! ======
//! The backend issues a JWT at login and returns it with the user's role and
//! ids. The client keeps that response in `sessionStorage["user"]` and decides
//! locally whether a route may render: no session or an expired/malformed
//! token sends the user to login, a role mismatch sends them home. The token
//! is never verified here; the backend rejects forged tokens on every call.

use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SESSION_KEY: &str = "user";

const MS_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "STAFF" => Some(Self::Staff),
            "CUSTOMER" => Some(Self::Customer),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
            Self::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("token is not a JWT")]
    NotJwt,
    #[error("token payload is not valid base64: {0}")]
    Base64(String),
    #[error("token payload is not JSON: {0}")]
    Json(String),
}

// =============================================================================
// SESSION
// =============================================================================

/// Login response as stored in `sessionStorage`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub token: String,
    pub role: Option<String>,
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub hub_id: Option<i64>,
    pub customer_id: Option<i64>,
}

/// The claims the client reads from the token payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    pub exp: Option<i64>,
    pub role: Option<String>,
}

/// Decode the (unverified) payload segment of a JWT.
///
/// # Errors
///
/// Returns an error if the token is not three dot-separated segments or the
/// payload is not base64url JSON.
pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let mut parts = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(SessionError::NotJwt);
    };
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| SessionError::Base64(e.to_string()))?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| SessionError::Json(e.to_string()))?;

    #[allow(clippy::cast_possible_truncation)]
    let exp = value.get("exp").and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)));
    let role = [value.get("role"), value.get(MS_ROLE_CLAIM)].into_iter().flatten().find_map(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|i| i.as_str().map(str::to_owned)),
        _ => None,
    });
    Ok(Claims { exp, role })
}

impl Session {
    /// Email, falling back to the username, used to look up "my bookings".
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .or_else(|| self.username.as_deref().filter(|u| !u.trim().is_empty()))
    }

    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Role from the login response, falling back to the token's role claim.
    #[must_use]
    pub fn effective_role(&self) -> Option<Role> {
        self.role
            .as_deref()
            .and_then(Role::parse)
            .or_else(|| decode_claims(&self.token).ok()?.role.as_deref().and_then(Role::parse))
    }

    /// Whether the token's `exp` lies before `now_secs`. Tokens without an
    /// expiry never expire.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be decoded.
    pub fn is_expired(&self, now_secs: i64) -> Result<bool, SessionError> {
        Ok(decode_claims(&self.token)?.exp.is_some_and(|exp| exp < now_secs))
    }
}

// =============================================================================
// ROUTE ACCESS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Any signed-in role.
    SignedIn,
    StaffOrAdmin,
    AdminOnly,
}

impl RouteAccess {
    #[must_use]
    pub fn allows(self, role: Option<Role>) -> bool {
        match self {
            Self::Public => true,
            Self::SignedIn => role.is_some(),
            Self::StaffOrAdmin => matches!(role, Some(Role::Staff | Role::Admin)),
            Self::AdminOnly => role == Some(Role::Admin),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Send to login. `clear_session` when the stored token is unusable.
    Login { clear_session: bool },
    /// Signed in but not allowed here.
    Home,
}

#[must_use]
pub fn check_access(session: Option<&Session>, access: RouteAccess, now_secs: i64) -> Access {
    if access == RouteAccess::Public {
        return Access::Granted;
    }
    let Some(session) = session.filter(|s| !s.token.is_empty()) else {
        return Access::Login { clear_session: false };
    };
    match session.is_expired(now_secs) {
        Ok(false) => {}
        Ok(true) | Err(_) => return Access::Login { clear_session: true },
    }
    if access.allows(session.effective_role()) { Access::Granted } else { Access::Home }
}

/// Landing page for a role.
#[must_use]
pub fn home_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "/admin/dashboard",
        Some(Role::Staff) => "/staff/dashboard",
        Some(Role::Customer) | None => "/",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Navigation bar entries for the signed-in role (or a visitor).
#[must_use]
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let link = |label, path| NavLink { label, path };
    match role {
        Some(Role::Admin) => vec![
            link("Dashboard", "/admin/dashboard"),
            link("Bookings", "/admin/bookings"),
            link("Fleet", "/admin/fleet"),
            link("Staff", "/admin/staff"),
        ],
        Some(Role::Staff) => vec![
            link("Dashboard", "/staff/dashboard"),
            link("Handover", "/staff/handover"),
            link("Return", "/staff/return"),
            link("On-spot", "/staff/on-spot"),
        ],
        Some(Role::Customer) => vec![
            link("Home", "/"),
            link("Explore", "/explore-vehicles"),
            link("Book a Car", "/booking"),
            link("My Bookings", "/my-bookings"),
            link("Support", "/customer-care"),
        ],
        None => vec![
            link("Home", "/"),
            link("About", "/about"),
            link("Explore", "/explore-vehicles"),
            link("Book a Car", "/booking"),
            link("Support", "/customer-care"),
        ],
    }
}

// =============================================================================
// ACCOUNT REQUESTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
