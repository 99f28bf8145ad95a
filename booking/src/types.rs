//! Wire records exchanged with the IndiaDrive REST backend.
//!
//! Every record deserializes leniently: missing fields fall back to defaults so
//! a partial payload from either backend still renders. Nothing here enforces
//! invariants; submission-time checks live in [`crate::validate`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// =============================================================================
// LOCATIONS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateRecord {
    pub state_id: i64,
    pub state_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    pub city_id: i64,
    pub city_name: String,
    pub state_id: Option<i64>,
}

/// A pickup/return location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hub {
    pub hub_id: i64,
    pub hub_name: String,
    #[serde(alias = "hubAddress")]
    pub hub_address_and_details: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub contact_number: Option<String>,
    pub city_id: Option<i64>,
    pub state_id: Option<i64>,
}

// =============================================================================
// FLEET
// =============================================================================

/// Vehicle category with tiered rates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarType {
    pub car_type_id: i64,
    pub car_type_name: String,
    pub daily_rate: f64,
    pub weekly_rate: f64,
    pub monthly_rate: f64,
    pub image_path: Option<String>,
}

/// A physical car unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Car {
    pub car_id: i64,
    pub car_name: Option<String>,
    pub number_plate: Option<String>,
    pub status: Option<String>,
    pub hub_id: Option<i64>,
    pub car_type_id: Option<i64>,
    pub car_type: Option<CarType>,
    pub image_path: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub is_available: Option<String>,
}

impl Car {
    /// Display label: car name, falling back to the car type name.
    #[must_use]
    pub fn label(&self) -> String {
        self.car_name
            .clone()
            .or_else(|| self.car_type.as_ref().map(|t| t.car_type_name.clone()))
            .unwrap_or_else(|| format!("Car #{}", self.car_id))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOn {
    pub add_on_id: i64,
    pub add_on_name: String,
    pub addon_daily_rate: f64,
    pub rate_valid_until: Option<String>,
}

// =============================================================================
// CUSTOMER
// =============================================================================

/// Customer profile as collected by the booking form and stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub cust_id: Option<i64>,
    pub membership_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub phone_number: Option<String>,
    pub date_of_birth: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub driving_license_number: String,
    #[serde(rename = "issuedByDL")]
    pub issued_by_dl: String,
    #[serde(rename = "validThroughDL")]
    pub valid_through_dl: String,
    pub idp_number: Option<String>,
    pub passport_number: Option<String>,
    pub passport_issued_by: Option<String>,
    pub passport_issue_date: Option<String>,
    pub passport_valid_from: Option<String>,
    pub passport_valid_through: Option<String>,
    pub credit_card_type: String,
    pub credit_card_number: String,
}

pub const DEFAULT_CARD_TYPE: &str = "VISA";

impl Customer {
    /// Blank form for `email` with the default card type preselected.
    #[must_use]
    pub fn blank(email: &str) -> Self {
        Self { email: email.to_owned(), credit_card_type: DEFAULT_CARD_TYPE.to_owned(), ..Self::default() }
    }

    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_owned()
    }

    /// Copy with optional fields that hold only whitespace turned into `None`,
    /// so the backend receives `null` rather than an empty date string.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        let mut out = self.clone();
        for field in [
            &mut out.membership_id,
            &mut out.phone_number,
            &mut out.address_line2,
            &mut out.city,
            &mut out.pincode,
            &mut out.idp_number,
            &mut out.passport_number,
            &mut out.passport_issued_by,
            &mut out.passport_issue_date,
            &mut out.passport_valid_from,
            &mut out.passport_valid_through,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        out.credit_card_number = out.credit_card_number.split_whitespace().collect();
        out
    }

    /// Copy with every date trimmed to `YYYY-MM-DD` for date inputs.
    #[must_use]
    pub fn normalized_for_form(&self) -> Self {
        let mut out = self.clone();
        out.date_of_birth = crate::dates::format_for_input(&out.date_of_birth);
        out.valid_through_dl = crate::dates::format_for_input(&out.valid_through_dl);
        for field in [
            &mut out.passport_issue_date,
            &mut out.passport_valid_from,
            &mut out.passport_valid_through,
        ] {
            if let Some(v) = field.as_mut() {
                *v = crate::dates::format_for_input(v);
            }
        }
        if out.credit_card_type.is_empty() {
            DEFAULT_CARD_TYPE.clone_into(&mut out.credit_card_type);
        }
        out
    }
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Booking lifecycle status. Unknown strings survive a round trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Allotted,
    Active,
    Completed,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub const ALL: [Self; 5] = [Self::Confirmed, Self::Allotted, Self::Active, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CONFIRMED" => Self::Confirmed,
            "ALLOTTED" => Self::Allotted,
            "ACTIVE" => Self::Active,
            "COMPLETED" => Self::Completed,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other(raw.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Allotted => "ALLOTTED",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the customer may still cancel.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Allotted)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Payload for `POST /booking/create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub car_id: i64,
    pub customer_id: i64,
    pub pickup_hub_id: i64,
    pub return_hub_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub add_on_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_type_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOnDetail {
    pub add_on_id: i64,
    pub add_on_name: String,
    pub daily_rate: f64,
    pub quantity: u32,
}

/// Booking as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub confirmation_number: Option<String>,
    pub booking_status: BookingStatus,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub car_name: Option<String>,
    pub number_plate: Option<String>,
    pub pickup_hub: Option<String>,
    pub pickup_hub_id: Option<i64>,
    pub return_hub: Option<String>,
    pub car_type_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub daily_rate: Option<f64>,
    pub total_amount: Option<f64>,
    pub total_addon_amount: Option<f64>,
    pub selected_add_ons: Vec<String>,
    pub add_on_details: Vec<AddOnDetail>,
    pub mobile_number: Option<String>,
    pub driving_license_number: Option<String>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

/// Fuel gauge reading recorded at handover and return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelLevel {
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "3/4")]
    ThreeQuarters,
    #[default]
    Full,
}

impl FuelLevel {
    pub const ALL: [Self; 4] = [Self::Quarter, Self::Half, Self::ThreeQuarters, Self::Full];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quarter => "1/4",
            Self::Half => "1/2",
            Self::ThreeQuarters => "3/4",
            Self::Full => "Full",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Payload for `POST /booking/process-handover`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverRequest {
    pub booking_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_status: Option<FuelLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Payload for `POST /booking/return`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub booking_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_status: Option<FuelLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// BACK OFFICE
// =============================================================================

pub const DEFAULT_VENDOR_TYPE: &str = "Maintenance";
pub const DEFAULT_VENDOR_API_URL: &str = "https://api.example.com/v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub vendor_type: String,
    pub email: Option<String>,
    pub api_url: Option<String>,
}

impl Default for Vendor {
    fn default() -> Self {
        Self {
            vendor_id: None,
            name: String::new(),
            vendor_type: DEFAULT_VENDOR_TYPE.to_owned(),
            email: None,
            api_url: Some(DEFAULT_VENDOR_API_URL.to_owned()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityRef {
    pub city_id: i64,
    pub city_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubRef {
    pub hub_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<CityRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffMember {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub hub: Option<HubRef>,
}

/// Payload for `POST /api/admin/register-staff`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStaffRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub hub: HubRef,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalInfo {
    pub booking_id: i64,
    pub customer_name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pickup_time: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetCar {
    pub car_id: i64,
    pub model: String,
    pub car_type: Option<String>,
    pub registration_number: String,
    pub status: String,
    pub daily_rate: Option<f64>,
    pub image_path: Option<String>,
    pub current_rental: Option<RentalInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubFleet {
    pub hub_id: i64,
    pub hub_name: String,
    pub city_name: Option<String>,
    pub cars: Vec<FleetCar>,
    pub total_cars: u32,
    pub available_cars: u32,
    pub rented_cars: u32,
    pub maintenance_cars: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetStatistics {
    pub total_cars: u32,
    pub total_available: u32,
    pub total_rented: u32,
    pub total_maintenance: u32,
    pub utilization_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetOverview {
    pub hubs: Vec<HubFleet>,
    pub statistics: FleetStatistics,
}

/// Payload for `POST /api/v1/support-tickets`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportTicket {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Accept either a JSON string or number and keep it as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
