//! REST API helpers for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` through the host
//! server's `/backend` proxy, with the session's bearer token attached.
//! Server-side (SSR): the transport reports the service as unavailable since
//! these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-success statuses are
//! classified by `ApiError::from_status`, so callers show the server's own
//! message and decide whether cached data may stand in.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use booking::endpoints;
use booking::session::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest};
use booking::{
    AddOn, ApiError, BookingRequest, BookingResponse, CarType, Car, City, Customer, FleetOverview, HandoverRequest, Hub,
    MessageResponse, RegisterStaffRequest, ReturnRequest, Session, StaffMember, StateRecord, SupportTicket, Vendor,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Same-origin mount of the backend proxy.
pub const API_BASE: &str = "/backend";

#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// A completed HTTP exchange, before status classification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_disposition: Option<String>,
}

impl RawResponse {
    /// Keep 2xx responses; classify everything else.
    ///
    /// # Errors
    ///
    /// The `ApiError` for a non-success status.
    pub fn into_success(self) -> Result<Self, ApiError> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, &String::from_utf8_lossy(&self.body)))
        }
    }

    /// # Errors
    ///
    /// `ApiError::Decode` when the body is not the expected JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Human-readable body for endpoints that answer with a message.
    #[must_use]
    pub fn message(&self) -> String {
        message_from_body(&String::from_utf8_lossy(&self.body))
    }
}

/// `{"message": ...}`, a JSON string, or the plain text body.
#[must_use]
pub fn message_from_body(body: &str) -> String {
    let body = body.trim();
    if let Ok(parsed) = serde_json::from_str::<MessageResponse>(body) {
        if !parsed.message.is_empty() {
            return parsed.message;
        }
    }
    if let Ok(text) = serde_json::from_str::<String>(body) {
        return text;
    }
    body.to_owned()
}

// =============================================================================
// TRANSPORT
// =============================================================================

enum Payload {
    Empty,
    Json(serde_json::Value),
    #[cfg(feature = "hydrate")]
    Form(web_sys::FormData),
}

fn json_payload<B: Serialize>(body: &B) -> Result<Payload, ApiError> {
    serde_json::to_value(body).map(Payload::Json).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(verb: Verb, path: &str, payload: Payload) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        };
        let mut builder = RequestBuilder::new(&api_url(path)).method(method);
        if let Some(session) = crate::state::auth::stored_session() {
            builder = builder.header("Authorization", &session.bearer());
        }
        let request = match payload {
            Payload::Empty => builder.build(),
            Payload::Json(value) => builder.json(&value),
            Payload::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            log::error!("{verb:?} {path} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let raw = RawResponse {
            status: resp.status(),
            content_disposition: resp.headers().get("content-disposition"),
            body: resp.binary().await.map_err(|e| ApiError::Network(e.to_string()))?,
        };
        if raw.status >= 400 {
            log::warn!("{verb:?} {path} -> {}", raw.status);
        }
        raw.into_success()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, payload);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(Verb::Get, path, Payload::Empty).await?.json()
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send(Verb::Post, path, json_payload(body)?).await?.json()
}

async fn post_for_message<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    Ok(send(Verb::Post, path, json_payload(body)?).await?.message())
}

// =============================================================================
// LOCATIONS & FLEET
// =============================================================================

/// # Errors
///
/// Any transport or status failure.
pub async fn get_states() -> Result<Vec<StateRecord>, ApiError> {
    get(&endpoints::states()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_cities(state_id: i64) -> Result<Vec<City>, ApiError> {
    get(&endpoints::cities_by_state(state_id)).await
}

/// Hubs in a city, or every hub.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn get_hubs(city_id: Option<i64>) -> Result<Vec<Hub>, ApiError> {
    get(&endpoints::hubs(city_id)).await
}

/// Hubs serving an airport code.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn search_locations(query: &str) -> Result<Vec<Hub>, ApiError> {
    get(&endpoints::search_locations(query)).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_car_types() -> Result<Vec<CarType>, ApiError> {
    get(&endpoints::car_types()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_available_cars(hub_id: i64, start: &str, end: &str, car_type_id: Option<i64>) -> Result<Vec<Car>, ApiError> {
    get(&endpoints::available_cars(hub_id, start, end, car_type_id)).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_add_ons() -> Result<Vec<AddOn>, ApiError> {
    get(&endpoints::add_ons()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_fleet_overview() -> Result<FleetOverview, ApiError> {
    get(&endpoints::fleet_overview()).await
}

// =============================================================================
// CUSTOMERS
// =============================================================================

/// Look up a member by email. `Ok(None)` when the backend has no record.
///
/// # Errors
///
/// Any failure other than "not found".
pub async fn find_customer(email: &str) -> Result<Option<Customer>, ApiError> {
    match get(&endpoints::customer_by_email(email)).await {
        Ok(customer) => Ok(Some(customer)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_customer_by_id(customer_id: i64) -> Result<Customer, ApiError> {
    get(&endpoints::customer_by_id(customer_id)).await
}

/// Create or update by email; the response carries the customer id.
///
/// # Errors
///
/// Any transport or status failure, including validation rejections.
pub async fn save_customer(customer: &Customer) -> Result<Customer, ApiError> {
    post(&endpoints::customers(), &customer.cleaned()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn update_customer(customer_id: i64, customer: &Customer) -> Result<(), ApiError> {
    send(Verb::Put, &endpoints::update_customer(customer_id), json_payload(&customer.cleaned())?).await?;
    Ok(())
}

/// # Errors
///
/// Any transport or status failure.
pub async fn submit_support_ticket(ticket: &SupportTicket) -> Result<String, ApiError> {
    post_for_message(&endpoints::support_tickets(), ticket).await
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// # Errors
///
/// Any transport or status failure.
pub async fn create_booking(request: &BookingRequest) -> Result<BookingResponse, ApiError> {
    post(&endpoints::create_booking(), request).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_booking(booking_id: i64) -> Result<BookingResponse, ApiError> {
    get(&endpoints::booking(booking_id)).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_bookings_by_user(identity: &str) -> Result<Vec<BookingResponse>, ApiError> {
    get(&endpoints::bookings_by_user(identity)).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_bookings_by_hub(hub_id: i64) -> Result<Vec<BookingResponse>, ApiError> {
    get(&endpoints::bookings_by_hub(hub_id)).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_all_bookings() -> Result<Vec<BookingResponse>, ApiError> {
    get(&endpoints::all_bookings()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn cancel_booking(booking_id: i64) -> Result<BookingResponse, ApiError> {
    send(Verb::Post, &endpoints::cancel_booking(booking_id), Payload::Empty).await?.json()
}

/// # Errors
///
/// Any transport or status failure.
pub async fn process_handover(request: &HandoverRequest) -> Result<String, ApiError> {
    post_for_message(&endpoints::process_handover(), request).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn return_car(request: &ReturnRequest) -> Result<String, ApiError> {
    post_for_message(&endpoints::return_car(), request).await
}

/// Invoice PDF bytes and the file name to save them under.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn download_invoice(booking_id: i64) -> Result<(Vec<u8>, String), ApiError> {
    let raw = send(Verb::Get, &endpoints::invoice(booking_id), Payload::Empty).await?;
    let name = endpoints::invoice_filename(raw.content_disposition.as_deref(), booking_id);
    Ok((raw.body, name))
}

// =============================================================================
// BACK OFFICE
// =============================================================================

/// # Errors
///
/// Any transport or status failure.
pub async fn get_vendors() -> Result<Vec<Vendor>, ApiError> {
    get(&endpoints::vendors()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn add_vendor(vendor: &Vendor) -> Result<(), ApiError> {
    send(Verb::Post, &endpoints::vendors(), json_payload(vendor)?).await?;
    Ok(())
}

/// # Errors
///
/// Any transport or status failure.
pub async fn test_vendor_connection(vendor_id: i64) -> Result<String, ApiError> {
    Ok(send(Verb::Post, &endpoints::vendor_test_connection(vendor_id), Payload::Empty).await?.message())
}

/// # Errors
///
/// Any transport or status failure.
pub async fn get_admin_staff() -> Result<Vec<StaffMember>, ApiError> {
    get(&endpoints::admin_staff()).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn register_staff(request: &RegisterStaffRequest) -> Result<String, ApiError> {
    post_for_message(&endpoints::register_staff(), request).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn delete_staff(staff_id: i64) -> Result<(), ApiError> {
    send(Verb::Delete, &endpoints::staff_member(staff_id), Payload::Empty).await?;
    Ok(())
}

/// Multipart upload of a rate or car spreadsheet under the `file` field.
///
/// # Errors
///
/// Any transport or status failure.
#[cfg(feature = "hydrate")]
pub async fn upload_spreadsheet(path: &str, file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    Ok(send(Verb::Post, path, Payload::Form(form)).await?.message())
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Sign in. The returned session is what the caller persists.
///
/// # Errors
///
/// Any transport or status failure, or a response without a token.
pub async fn login(username: &str, password: &str) -> Result<Session, ApiError> {
    let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let session: Session = post(&endpoints::login(), &request).await?;
    if session.token.is_empty() {
        return Err(ApiError::Decode("login response carried no token".to_owned()));
    }
    Ok(session)
}

/// # Errors
///
/// Any transport or status failure.
pub async fn register(request: &RegisterRequest) -> Result<String, ApiError> {
    post_for_message(&endpoints::register(), request).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn forgot_password(email: &str) -> Result<String, ApiError> {
    post_for_message(&endpoints::forgot_password(), &ForgotPasswordRequest { email: email.to_owned() }).await
}

/// # Errors
///
/// Any transport or status failure.
pub async fn reset_password(token: &str, password: &str) -> Result<String, ApiError> {
    let request = ResetPasswordRequest { token: token.to_owned(), password: password.to_owned() };
    post_for_message(&endpoints::reset_password(), &request).await
}
