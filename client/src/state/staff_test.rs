use super::*;

fn booking(status: BookingStatus) -> BookingResponse {
    BookingResponse {
        booking_id: 42,
        booking_status: status,
        end_date: Some("2024-06-23T10:00:00".into()),
        ..BookingResponse::default()
    }
}

#[test]
fn only_pending_bookings_can_be_handed_over() {
    assert!(handover_block(&BookingStatus::Confirmed).is_none());
    assert!(handover_block(&BookingStatus::Allotted).is_none());
    assert_eq!(handover_block(&BookingStatus::Active).unwrap().title, "Already Handed Over");
    assert_eq!(handover_block(&BookingStatus::Cancelled).unwrap().tone, booking::filter::Tone::Danger);
}

#[test]
fn only_active_bookings_can_be_returned() {
    assert!(return_block(&BookingStatus::Active).is_none());
    let notice = return_block(&BookingStatus::Confirmed).unwrap();
    assert_eq!(notice.text, "This booking is CONFIRMED. Only ACTIVE bookings can be returned.");
}

#[test]
fn handover_form_defaults_from_booking() {
    let form = HandoverForm::for_booking(&booking(BookingStatus::Confirmed), "2024-06-20");
    assert_eq!(form.start_date, "2024-06-20");
    assert_eq!(form.end_date, "2024-06-23");
    assert_eq!(form.fuel, FuelLevel::Full);
}

#[test]
fn handover_request_rejects_reversed_dates() {
    let form = HandoverForm { start_date: "2024-06-23".into(), end_date: "2024-06-20".into(), ..HandoverForm::default() };
    assert_eq!(form.request(42), Err("Start Date must be before End Date"));
}

#[test]
fn handover_request_drops_blank_fields() {
    let form = HandoverForm { car_id: Some(9), start_date: "2024-06-20".into(), ..HandoverForm::default() };
    let req = form.request(42).unwrap();
    assert_eq!(req.car_id, Some(9));
    assert_eq!(req.notes, None);
    assert_eq!(req.end_date, None);
}

#[test]
fn return_request_is_dated_today() {
    let req = return_request(42, "2024-06-23", FuelLevel::Half, "  scratch on bumper ");
    assert_eq!(req.return_date.as_deref(), Some("2024-06-23"));
    assert_eq!(req.notes.as_deref(), Some("scratch on bumper"));
}

#[test]
fn booking_id_input() {
    assert_eq!(parse_booking_id(" #42 "), Some(42));
    assert_eq!(parse_booking_id("0"), None);
    assert_eq!(parse_booking_id("abc"), None);
}

#[test]
fn contact_edit_prefills_from_booking() {
    let b = BookingResponse {
        mobile_number: Some("9876543210".into()),
        city: Some("Pune".into()),
        ..booking(BookingStatus::Confirmed)
    };
    let edit = ContactEdit::from_booking(&b);
    assert_eq!(edit.mobile, "9876543210");
    assert_eq!(edit.city, "Pune");
    assert_eq!(edit.licence, "");
}

#[test]
fn contact_edit_overlays_profile() {
    let stored = Customer { first_name: "Asha".into(), city: Some("Mumbai".into()), ..Customer::default() };
    let edit = ContactEdit { mobile: " 9123456780 ".into(), city: String::new(), ..ContactEdit::default() };
    let updated = edit.apply(stored);
    assert_eq!(updated.first_name, "Asha");
    assert_eq!(updated.mobile_number, "9123456780");
    assert_eq!(updated.phone_number.as_deref(), Some("9123456780"));
    assert_eq!(updated.city, None);
}

fn on_spot_catalogue() -> Vec<AddOn> {
    vec![
        AddOn { add_on_id: 1, add_on_name: "GPS Navigation".into(), addon_daily_rate: 200.0, ..AddOn::default() },
        AddOn { add_on_id: 2, add_on_name: "Child Seat".into(), addon_daily_rate: 150.0, ..AddOn::default() },
    ]
}

fn counter_car() -> Car {
    Car {
        car_id: 31,
        car_type: Some(booking::CarType { car_type_id: 4, daily_rate: 1800.0, ..booking::CarType::default() }),
        ..Car::default()
    }
}

fn walk_in(today: NaiveDate) -> OnSpotBooking {
    let mut spot = OnSpotBooking::starting(today);
    spot.set_dates(None, Some("2024-06-03".into()));
    spot.car = Some(counter_car());
    spot.add_ons.toggle(1);
    spot.add_ons.toggle(2);
    spot.add_ons.set_child_seat_qty(2);
    spot
}

#[test]
fn on_spot_request_uses_the_desk_hub_both_ways() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let customer = Customer { cust_id: Some(88), email: " walkin@example.com ".into(), ..Customer::default() };
    let request = walk_in(today).booking_request(7, &customer, &on_spot_catalogue(), today).unwrap();
    assert_eq!(request.pickup_hub_id, 7);
    assert_eq!(request.return_hub_id, 7);
    assert_eq!(request.car_id, 31);
    assert_eq!(request.customer_id, 88);
    assert_eq!(request.start_date, "2024-06-01");
    assert_eq!(request.end_date, "2024-06-03");
    assert_eq!(request.add_on_ids, vec![1, 2, 2]);
    assert_eq!(request.email.as_deref(), Some("walkin@example.com"));
    assert_eq!(request.car_type_id, Some(4));
}

#[test]
fn on_spot_quote_counts_each_child_seat() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let quote = walk_in(today).quote(&on_spot_catalogue()).unwrap();
    assert_eq!(quote.days, 2);
    assert!((quote.total - 2.0 * (1800.0 + 200.0 + 2.0 * 150.0)).abs() < f64::EPSILON);
    assert!(OnSpotBooking::starting(today).quote(&on_spot_catalogue()).is_none());
}

#[test]
fn on_spot_request_needs_a_saved_customer_and_a_car() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let unsaved = Customer { email: "new@example.com".into(), ..Customer::default() };
    let err = walk_in(today).booking_request(7, &unsaved, &[], today).unwrap_err();
    assert_eq!(err.text, "Invalid Customer ID");

    let saved = Customer { cust_id: Some(5), ..unsaved };
    let err = OnSpotBooking::starting(today).booking_request(7, &saved, &[], today).unwrap_err();
    assert_eq!(err.title, "No vehicle");
}

#[test]
fn on_spot_dates_are_checked_and_reset_the_car() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut spot = walk_in(today);
    spot.set_dates(Some("2024-05-30".into()), None);
    assert!(spot.car.is_none());
    assert!(spot.check_dates(today).is_err());
    assert!(OnSpotBooking::starting(today).check_dates(today).is_ok());
}

#[test]
fn auto_handover_leaves_with_a_full_tank() {
    let created = BookingResponse { booking_id: 120, confirmation_number: Some("IND-120".into()), ..BookingResponse::default() };
    let request = auto_handover(&created, 31);
    assert_eq!(request.booking_id, 120);
    assert_eq!(request.car_id, Some(31));
    assert_eq!(request.fuel_status, Some(FuelLevel::Full));
    assert_eq!(request.notes.as_deref(), Some("On-Spot Booking - Auto Handover"));
    assert_eq!(request.start_date, None);
    assert_eq!(on_spot_done(&created).text, "Booking Created and Handed Over! Confirmation: IND-120");
}
