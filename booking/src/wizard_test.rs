use super::*;

fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn today() -> NaiveDate {
    day("2024-06-15")
}

fn criteria() -> SearchCriteria {
    SearchCriteria {
        pickup: "2024-06-20".into(),
        return_at: "2024-06-23".into(),
        different_return: false,
        location: Location::City {
            state_id: 1,
            state_name: "Maharashtra".into(),
            city_id: Some(4),
            city_name: Some("Pune".into()),
        },
    }
}

fn hub(id: i64) -> Hub {
    Hub { hub_id: id, hub_name: format!("Hub {id}"), ..Hub::default() }
}

fn suv() -> CarType {
    CarType { car_type_id: 3, car_type_name: "SUV".into(), daily_rate: 2000.0, ..CarType::default() }
}

fn customer() -> Customer {
    Customer {
        cust_id: Some(11),
        first_name: "Asha".into(),
        last_name: "Rao".into(),
        email: "asha@example.in".into(),
        mobile_number: "9876543210".into(),
        date_of_birth: "1990-01-01".into(),
        address_line1: "12 MG Road".into(),
        driving_license_number: "MH12".into(),
        issued_by_dl: "RTO Pune".into(),
        valid_through_dl: "2030-01-01".into(),
        credit_card_number: "4111111111111111".into(),
        ..Customer::blank("asha@example.in")
    }
}

fn at_review() -> Wizard {
    let mut w = Wizard::new();
    w.submit_search(criteria(), today()).unwrap();
    w.select_hub(hub(7), today()).unwrap();
    w.select_car(SelectedCar::from_car_type(&suv()), today()).unwrap();
    w.customer_saved(customer(), today()).unwrap();
    w
}

// =============================================================================
// FORWARD FLOW
// =============================================================================

#[test]
fn happy_path_reaches_review() {
    let w = at_review();
    assert_eq!(w.step(), Step::Review);
    assert_eq!(w.step().number(), 4);
}

#[test]
fn step_numbers_follow_indicator() {
    assert_eq!(Step::Search.number(), 1);
    assert_eq!(Step::Hub.number(), 1);
    assert_eq!(Step::Car.number(), 2);
    assert_eq!(Step::Details.number(), 3);
}

#[test]
fn invalid_search_stays_on_search() {
    let mut w = Wizard::new();
    let mut bad = criteria();
    bad.pickup = "2024-06-10".into();
    assert_eq!(w.submit_search(bad, today()), Err(WizardError::Search(SearchError::PickupInPast)));
    assert_eq!(w.step(), Step::Search);
    assert!(w.search().is_none());
}

#[test]
fn cannot_skip_to_car_without_hub() {
    let mut w = Wizard::new();
    w.submit_search(criteria(), today()).unwrap();
    assert_eq!(w.go_to(Step::Car, today()), Err(WizardError::NoHub));
    assert_eq!(w.step(), Step::Hub);
}

#[test]
fn jump_straight_to_review_is_refused() {
    let mut w = Wizard::new();
    assert_eq!(w.go_to(Step::Review, today()), Err(WizardError::NoSearch));
}

#[test]
fn customer_without_id_is_not_saved() {
    let mut w = Wizard::new();
    w.submit_search(criteria(), today()).unwrap();
    w.select_hub(hub(7), today()).unwrap();
    w.select_car(SelectedCar::from_car_type(&suv()), today()).unwrap();
    let mut unsaved = customer();
    unsaved.cust_id = None;
    assert_eq!(w.customer_saved(unsaved, today()), Err(WizardError::CustomerNotSaved));
    assert_eq!(w.step(), Step::Details);
}

#[test]
fn invalid_customer_blocks_review() {
    let mut w = Wizard::new();
    w.submit_search(criteria(), today()).unwrap();
    w.select_hub(hub(7), today()).unwrap();
    w.select_car(SelectedCar::from_car_type(&suv()), today()).unwrap();
    let mut underage = customer();
    underage.date_of_birth = "2010-01-01".into();
    let err = w.customer_saved(underage, today()).unwrap_err();
    assert!(matches!(err, WizardError::CustomerInvalid(ref e) if e.get("dateOfBirth").is_some()));
    assert_eq!(w.step(), Step::Details);
}

// =============================================================================
// RE-ENTRY
// =============================================================================

#[test]
fn new_search_clears_hub_and_car() {
    let mut w = at_review();
    w.go_to(Step::Search, today()).unwrap();
    w.submit_search(criteria(), today()).unwrap();
    assert!(w.hub().is_none());
    assert!(w.car().is_none());
    assert_eq!(w.go_to(Step::Review, today()), Err(WizardError::NoHub));
}

#[test]
fn changing_hub_clears_car() {
    let mut w = at_review();
    w.go_to(Step::Hub, today()).unwrap();
    w.select_hub(hub(8), today()).unwrap();
    assert!(w.car().is_none());
}

#[test]
fn reselecting_same_hub_keeps_car() {
    let mut w = at_review();
    w.go_to(Step::Hub, today()).unwrap();
    w.select_hub(hub(7), today()).unwrap();
    assert!(w.car().is_some());
}

#[test]
fn forward_jump_revalidates_dates_against_today() {
    let mut w = at_review();
    w.go_to(Step::Search, today()).unwrap();
    let later = day("2024-06-21");
    assert_eq!(w.go_to(Step::Review, later), Err(WizardError::Search(SearchError::PickupInPast)));
    assert_eq!(w.step(), Step::Search);
}

#[test]
fn back_walks_one_step() {
    let mut w = at_review();
    assert_eq!(w.back(today()), Ok(Step::Details));
    assert_eq!(w.back(today()), Ok(Step::Car));
    assert_eq!(w.back(today()), Ok(Step::Hub));
    assert_eq!(w.back(today()), Ok(Step::Search));
    assert_eq!(w.back(today()), Ok(Step::Search));
}

// =============================================================================
// CONFIRMATION
// =============================================================================

#[test]
fn booking_request_expands_add_ons_and_returns_to_pickup_hub() {
    let mut w = at_review();
    let catalogue = vec![
        AddOn { add_on_id: 1, add_on_name: "GPS".into(), addon_daily_rate: 100.0, rate_valid_until: None },
        AddOn { add_on_id: 2, add_on_name: "Child Seat".into(), addon_daily_rate: 150.0, rate_valid_until: None },
    ];
    w.add_ons_mut().toggle(2);
    w.add_ons_mut().set_child_seat_qty(2);
    let req = w.booking_request(&catalogue, today()).unwrap();
    assert_eq!(req.car_id, 0);
    assert_eq!(req.customer_id, 11);
    assert_eq!(req.pickup_hub_id, 7);
    assert_eq!(req.return_hub_id, 7);
    assert_eq!(req.add_on_ids, vec![2, 2]);
    assert_eq!(req.car_type_id, Some(3));
    assert_eq!(req.email.as_deref(), Some("asha@example.in"));

    let q = w.quote(&catalogue).unwrap();
    assert_eq!(q.days, 3);
    assert_eq!(q.total, 3.0 * (2000.0 + 300.0));
}

#[test]
fn booking_request_outside_review_fails() {
    let mut w = Wizard::new();
    w.submit_search(criteria(), today()).unwrap();
    assert_eq!(w.booking_request(&[], today()), Err(WizardError::NotReviewing));
}

#[test]
fn confirm_locks_the_wizard() {
    let mut w = at_review();
    w.confirm(BookingResponse { booking_id: 99, ..BookingResponse::default() }).unwrap();
    assert_eq!(w.step(), Step::Confirmed);
    assert_eq!(w.confirmation().map(|b| b.booking_id), Some(99));
    assert_eq!(w.back(today()), Err(WizardError::AlreadyConfirmed));
    assert_eq!(w.submit_search(criteria(), today()), Err(WizardError::AlreadyConfirmed));
    w.reset();
    assert_eq!(w.step(), Step::Search);
}

#[test]
fn confirm_from_wrong_step_fails() {
    let mut w = Wizard::new();
    assert_eq!(w.confirm(BookingResponse::default()), Err(WizardError::NotReviewing));
}

// =============================================================================
// LOCATIONS
// =============================================================================

#[test]
fn city_required_when_state_has_cities() {
    let state = StateRecord { state_id: 1, state_name: "Goa".into() };
    let cities = vec![City { city_id: 2, city_name: "Panaji".into(), state_id: Some(1) }];
    assert_eq!(Location::from_city(Some(&state), None, &cities), Err(SearchError::MissingLocation));
    assert!(Location::from_city(Some(&state), None, &[]).is_ok());
    assert_eq!(Location::from_city(None, None, &[]), Err(SearchError::MissingLocation));
    let loc = Location::from_city(Some(&state), cities.first(), &cities).unwrap();
    assert_eq!(loc.describe(), "Panaji, Goa");
}

#[test]
fn airport_code_is_uppercased_and_required() {
    assert_eq!(Location::from_airport("  ", vec![]), Err(SearchError::MissingAirportCode));
    let loc = Location::from_airport("bom", vec![hub(1)]).unwrap();
    assert_eq!(loc.describe(), "BOM airport");
}

#[test]
fn resume_enters_details_directly() {
    let mut w = Wizard::new();
    w.add_ons_mut().toggle(5);
    w.resume(criteria(), hub(2), SelectedCar::from_car_type(&suv()), today()).unwrap();
    assert_eq!(w.step(), Step::Details);
    assert_eq!(w.hub().map(|h| h.hub_id), Some(2));
    assert!(w.add_ons().contains(5));
}

#[test]
fn resume_with_stale_dates_changes_nothing() {
    let mut w = Wizard::new();
    let stale = SearchCriteria { pickup: "2024-06-01".into(), ..criteria() };
    let err = w.resume(stale, hub(2), SelectedCar::from_car_type(&suv()), today()).unwrap_err();
    assert_eq!(err, WizardError::Search(SearchError::PickupInPast));
    assert_eq!(w, Wizard::new());
}
