//! Submission-time form checks.
//!
//! Each validator returns a [`FieldErrors`] map keyed by the wire field name so
//! forms can render the message under the matching input. The backend repeats
//! every check; these exist to fail fast with readable messages.
//!
//! Validators that depend on the calendar take `today` explicitly.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::dates::{age_on, parse_date};
use crate::types::{Customer, RegisterStaffRequest, SupportTicket};

pub const MIN_DRIVER_AGE: i32 = 18;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{16}$").expect("valid regex"));
static PASSWORD_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9!@#$%^&*]{8,}$").expect("valid regex"));

const PASSWORD_SPECIALS: &str = "!@#$%^&*";

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Field name → message, iterated in field-name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

#[must_use]
pub fn is_valid_mobile(raw: &str) -> bool {
    MOBILE_RE.is_match(raw)
}

/// Exactly sixteen digits once whitespace is removed.
#[must_use]
pub fn is_valid_card_number(raw: &str) -> bool {
    let compact: String = raw.split_whitespace().collect();
    CARD_RE.is_match(&compact)
}

/// At least [`MIN_DRIVER_AGE`] full years old on `today`.
#[must_use]
pub fn is_adult(dob: NaiveDate, today: NaiveDate) -> bool {
    age_on(dob, today) >= MIN_DRIVER_AGE
}

/// License valid through `today` or later.
#[must_use]
pub fn is_license_current(valid_through: NaiveDate, today: NaiveDate) -> bool {
    valid_through >= today
}

/// Eight or more characters from the allowed set, at least one special.
#[must_use]
pub fn is_strong_password(raw: &str) -> bool {
    PASSWORD_CHARS_RE.is_match(raw) && raw.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

// =============================================================================
// CUSTOMER FORM
// =============================================================================

/// Check the driver and payment details collected before booking.
#[must_use]
pub fn validate_customer(customer: &Customer, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if customer.first_name.trim().chars().count() < 2 {
        errors.insert("firstName", "First name is required (min 2 chars)");
    }
    if customer.last_name.trim().chars().count() < 2 {
        errors.insert("lastName", "Last name is required (min 2 chars)");
    }
    if !is_valid_email(&customer.email) {
        errors.insert("email", "Valid email is required");
    }
    if !is_valid_mobile(&customer.mobile_number) {
        errors.insert("mobileNumber", "Valid 10-digit mobile number is required");
    }

    if customer.date_of_birth.trim().is_empty() {
        errors.insert("dateOfBirth", "Date of Birth is required");
    } else {
        match parse_date(&customer.date_of_birth) {
            Some(dob) if is_adult(dob, today) => {}
            Some(_) => errors.insert("dateOfBirth", "You must be at least 18 years old"),
            None => errors.insert("dateOfBirth", "Date of Birth is invalid"),
        }
    }

    if customer.driving_license_number.trim().is_empty() {
        errors.insert("drivingLicenseNumber", "License number is required");
    }
    if customer.issued_by_dl.trim().is_empty() {
        errors.insert("issuedByDL", "Issued By is required");
    }
    if customer.valid_through_dl.trim().is_empty() {
        errors.insert("validThroughDL", "License expiry date is required");
    } else {
        match parse_date(&customer.valid_through_dl) {
            Some(expiry) if is_license_current(expiry, today) => {}
            Some(_) => errors.insert("validThroughDL", "License has expired"),
            None => errors.insert("validThroughDL", "License expiry date is invalid"),
        }
    }

    if !is_valid_card_number(&customer.credit_card_number) {
        errors.insert("creditCardNumber", "Valid 16-digit card number is required");
    }
    if customer.address_line1.trim().is_empty() {
        errors.insert("addressLine1", "Address is required");
    }

    errors
}

// =============================================================================
// SEARCH
// =============================================================================

/// Why a location/date search was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please select both Pickup and Return dates.")]
    IncompleteDates,
    #[error("Pickup date cannot be in the past.")]
    PickupInPast,
    #[error("Return date must be after the pickup date.")]
    ReturnNotAfterPickup,
    #[error("Please select state and city")]
    MissingLocation,
    #[error("Enter airport code")]
    MissingAirportCode,
}

impl SearchError {
    /// Short heading for the alert that shows the message.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::IncompleteDates => "Incomplete Dates",
            Self::PickupInPast => "Invalid Date",
            Self::ReturnNotAfterPickup => "Invalid Duration",
            Self::MissingLocation => "Selection Missing",
            Self::MissingAirportCode => "Input Required",
        }
    }
}

/// Pickup and return must both be set, pickup not before `today`, and return
/// strictly after pickup.
///
/// # Errors
///
/// Returns the first rule the dates break.
pub fn validate_search_dates(pickup: &str, return_at: &str, today: NaiveDate) -> Result<(), SearchError> {
    let (Some(start), Some(end)) = (crate::dates::parse_input_date(pickup), crate::dates::parse_input_date(return_at))
    else {
        return Err(SearchError::IncompleteDates);
    };
    if start.date() < today {
        return Err(SearchError::PickupInPast);
    }
    if end <= start {
        return Err(SearchError::ReturnNotAfterPickup);
    }
    Ok(())
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Self-service sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub const PASSWORD_RULE: &str =
    "Password must be at least 8 characters and contain at least one special character (!@#$%^&*).";

fn check_password(errors: &mut FieldErrors, password: &str, confirm: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required.");
    } else if !is_strong_password(password) {
        errors.insert("password", PASSWORD_RULE);
    }
    if password != confirm {
        errors.insert("confirmPassword", "Passwords do not match.");
    }
}

#[must_use]
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.username.trim().chars().count() < 3 {
        errors.insert("username", "Username must be at least 3 characters long.");
    }
    if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email address.");
    }
    check_password(&mut errors, &form.password, &form.confirm_password);
    errors
}

/// New-password form reached from an emailed reset link.
#[must_use]
pub fn validate_password_reset(token: &str, password: &str, confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if token.trim().is_empty() {
        errors.insert("token", "Invalid or missing reset token.");
    }
    check_password(&mut errors, password, confirm);
    errors
}

/// Admin form for adding a hub staff account.
#[must_use]
pub fn validate_staff(request: &RegisterStaffRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if request.username.trim().is_empty() {
        errors.insert("username", "Username is required.");
    }
    if !is_valid_email(&request.email) {
        errors.insert("email", "Please enter a valid email address.");
    }
    if request.password.is_empty() {
        errors.insert("password", "Password is required.");
    }
    if request.hub.hub_id <= 0 {
        errors.insert("hub", "Please select a hub.");
    }
    errors
}

/// Customer-care contact form.
#[must_use]
pub fn validate_support_ticket(ticket: &SupportTicket) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if ticket.name.trim().is_empty() {
        errors.insert("name", "Name is required.");
    }
    if !is_valid_email(&ticket.email) {
        errors.insert("email", "Please enter a valid email address.");
    }
    if ticket.subject.trim().is_empty() {
        errors.insert("subject", "Subject is required.");
    }
    if ticket.message.trim().is_empty() {
        errors.insert("message", "Message is required.");
    }
    errors
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
