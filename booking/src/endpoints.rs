//! Backend route table.
//!
//! Paths are relative to the backend root. The web client prefixes them with
//! its same-origin proxy mount; the CLI prefixes them with `--base-url`.
//! Free-text segments and query values are percent-encoded here so callers
//! never splice raw emails into a URL.

use std::fmt::Write as _;

/// Cheap unauthenticated GET used to decide whether a backend is alive.
pub const PROBE_PATH: &str = "/api/v1/hubs";

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// `path?k=v&...`, skipping `None` values.
#[must_use]
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{k}={}", encode_component(v))))
        .collect();
    if query.is_empty() { path.to_owned() } else { format!("{path}?{}", query.join("&")) }
}

// =============================================================================
// LOCATIONS & FLEET
// =============================================================================

#[must_use]
pub fn states() -> String {
    "/api/v1/states".to_owned()
}

#[must_use]
pub fn cities_by_state(state_id: i64) -> String {
    format!("/api/v1/cities/state/{state_id}")
}

/// Hubs in one city, or every hub.
#[must_use]
pub fn hubs(city_id: Option<i64>) -> String {
    match city_id {
        Some(id) => format!("/api/v1/hubs/city/{id}"),
        None => "/api/v1/hubs".to_owned(),
    }
}

#[must_use]
pub fn search_locations(query: &str) -> String {
    with_query("/api/v1/locations/search", &[("query", Some(query.to_owned()))])
}

#[must_use]
pub fn car_types() -> String {
    "/api/v1/car-types".to_owned()
}

#[must_use]
pub fn available_cars(hub_id: i64, start: &str, end: &str, car_type_id: Option<i64>) -> String {
    with_query(
        "/api/v1/cars/available",
        &[
            ("hubId", Some(hub_id.to_string())),
            ("startDate", Some(start.to_owned())),
            ("endDate", Some(end.to_owned())),
            ("carTypeId", car_type_id.map(|id| id.to_string())),
        ],
    )
}

#[must_use]
pub fn upload_cars() -> String {
    "/api/v1/cars/upload".to_owned()
}

#[must_use]
pub fn add_ons() -> String {
    "/api/v1/addons".to_owned()
}

// =============================================================================
// BOOKINGS
// =============================================================================

#[must_use]
pub fn create_booking() -> String {
    "/booking/create".to_owned()
}

#[must_use]
pub fn booking(booking_id: i64) -> String {
    format!("/booking/get/{booking_id}")
}

#[must_use]
pub fn bookings_by_user(identity: &str) -> String {
    format!("/booking/user/{}", encode_component(identity))
}

#[must_use]
pub fn bookings_by_hub(hub_id: i64) -> String {
    format!("/booking/hub/{hub_id}")
}

#[must_use]
pub fn all_bookings() -> String {
    "/booking/all".to_owned()
}

#[must_use]
pub fn cancel_booking(booking_id: i64) -> String {
    format!("/booking/cancel/{booking_id}")
}

#[must_use]
pub fn process_handover() -> String {
    "/booking/process-handover".to_owned()
}

#[must_use]
pub fn return_car() -> String {
    "/booking/return".to_owned()
}

#[must_use]
pub fn invoice(booking_id: i64) -> String {
    format!("/api/v1/invoice/{booking_id}")
}

/// File name from a `Content-Disposition` header, else `Invoice_<id>.pdf`.
#[must_use]
pub fn invoice_filename(disposition: Option<&str>, booking_id: i64) -> String {
    disposition
        .and_then(|d| d.split(';').map(str::trim).find_map(|part| part.strip_prefix("filename=")))
        .map(|name| name.trim_matches('"').to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("Invoice_{booking_id}.pdf"))
}

// =============================================================================
// CUSTOMERS
// =============================================================================

#[must_use]
pub fn customers() -> String {
    "/api/v1/customers".to_owned()
}

#[must_use]
pub fn customer_by_email(email: &str) -> String {
    format!("/api/v1/customers/{}", encode_component(email))
}

#[must_use]
pub fn customer_by_id(customer_id: i64) -> String {
    format!("/api/v1/customers/id/{customer_id}")
}

/// `PUT` target for profile edits.
#[must_use]
pub fn update_customer(customer_id: i64) -> String {
    format!("/api/v1/customers/{customer_id}")
}

#[must_use]
pub fn support_tickets() -> String {
    "/api/v1/support-tickets".to_owned()
}

// =============================================================================
// BACK OFFICE
// =============================================================================

#[must_use]
pub fn vendors() -> String {
    "/api/v1/vendors".to_owned()
}

#[must_use]
pub fn vendor_test_connection(vendor_id: i64) -> String {
    format!("/api/v1/vendors/{vendor_id}/test-connection")
}

#[must_use]
pub fn upload_rates() -> String {
    "/api/admin/upload-rates".to_owned()
}

#[must_use]
pub fn fleet_overview() -> String {
    "/api/admin/fleet-overview".to_owned()
}

#[must_use]
pub fn admin_staff() -> String {
    "/api/admin/staff".to_owned()
}

#[must_use]
pub fn register_staff() -> String {
    "/api/admin/register-staff".to_owned()
}

#[must_use]
pub fn staff_member(staff_id: i64) -> String {
    format!("/api/admin/staff/{staff_id}")
}

// =============================================================================
// ACCOUNTS
// =============================================================================

#[must_use]
pub fn login() -> String {
    "/login".to_owned()
}

#[must_use]
pub fn register() -> String {
    "/register".to_owned()
}

#[must_use]
pub fn forgot_password() -> String {
    "/forgot-password".to_owned()
}

#[must_use]
pub fn reset_password() -> String {
    "/reset-password".to_owned()
}

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod tests;
