use super::*;

#[test]
fn missing_booking_names_the_id() {
    let err = ApiError::NotFound("Booking not found".to_owned());
    assert_eq!(lookup_error(42, &err), "Booking #42 was not found.");
}

#[test]
fn outage_uses_generic_lookup_message() {
    assert_eq!(lookup_error(42, &ApiError::Unavailable), LOOKUP_FAILED);
    assert_eq!(lookup_error(42, &ApiError::Network("refused".to_owned())), LOOKUP_FAILED);
}

#[test]
fn auth_failure_passes_server_message_through() {
    let err = ApiError::Unauthorized("Please log in to continue.".to_owned());
    assert_eq!(lookup_error(1, &err), "Please log in to continue.");
}

#[test]
fn closed_bookings_disable_actions() {
    assert!(actions_enabled(&BookingStatus::Confirmed));
    assert!(actions_enabled(&BookingStatus::Active));
    assert!(!actions_enabled(&BookingStatus::Cancelled));
    assert!(!actions_enabled(&BookingStatus::Completed));
}
