use super::*;

#[test]
fn each_step_has_a_route() {
    assert_eq!(step_path(Step::Search), "/booking");
    assert_eq!(step_path(Step::Hub), "/select-hub");
    assert_eq!(step_path(Step::Car), "/select-car");
    assert_eq!(step_path(Step::Review), "/booking");
}

#[test]
fn indicator_has_four_numbered_steps() {
    let steps = indicator_steps();
    assert_eq!(steps.map(|(n, _)| n), [1, 2, 3, 4]);
    assert_eq!(steps[0].1, "Location");
}

#[test]
fn restart_keeps_catalogue_only() {
    let mut flow = BookingFlow {
        add_ons: vec![AddOn { add_on_id: 1, add_on_name: "GPS".into(), addon_daily_rate: 200.0, ..AddOn::default() }],
        draft: Customer::blank("x@y.in"),
        ..BookingFlow::default()
    };
    flow.wizard.add_ons_mut().toggle(1);
    flow.restart();
    assert_eq!(flow.add_ons.len(), 1);
    assert!(flow.wizard.add_ons().is_empty());
    assert!(flow.draft.email.is_empty());
}

#[test]
fn no_quote_before_a_car_is_chosen() {
    assert!(BookingFlow::default().quote().is_none());
}

#[test]
fn deep_link_needs_both_numeric_ids() {
    assert_eq!(DeepLink::parse(Some("4"), Some(" 17 ")), Some(DeepLink { hub_id: 4, car_id: 17 }));
    assert_eq!(DeepLink::parse(Some("4"), None), None);
    assert_eq!(DeepLink::parse(Some("x"), Some("1")), None);
}

#[test]
fn deep_link_criteria_require_a_located_hub() {
    let mut hub = Hub { hub_id: 4, hub_name: "Pune Airport".into(), city_id: Some(9), ..Hub::default() };
    assert!(DeepLink::criteria(&hub, "2030-01-01T10:00", "2030-01-03T10:00").is_none());
    hub.state_id = Some(2);
    let criteria = DeepLink::criteria(&hub, "2030-01-01T10:00", "2030-01-03T10:00").unwrap();
    assert_eq!(criteria.location, Location::City { state_id: 2, state_name: String::new(), city_id: Some(9), city_name: None });
    assert!(!criteria.different_return);
}

#[test]
fn deep_link_car_resolves_type_from_catalogue() {
    let sedan = CarType { car_type_id: 3, car_type_name: "Sedan".into(), daily_rate: 2500.0, ..CarType::default() };
    let cars = vec![Car { car_id: 17, car_name: Some("Honda City".into()), car_type_id: Some(3), ..Car::default() }];
    let link = DeepLink { hub_id: 4, car_id: 17 };

    let selected = link.find_car(&cars, std::slice::from_ref(&sedan)).unwrap();
    assert_eq!(selected.car_id, 17);
    assert_eq!(selected.model, "Honda City");
    assert_eq!(selected.car_type, sedan);

    assert!(link.find_car(&cars, &[]).is_none());
    assert!(DeepLink { hub_id: 4, car_id: 99 }.find_car(&cars, &[sedan]).is_none());
}

#[test]
fn search_errors_keep_their_titles() {
    let notice = wizard_notice(&WizardError::Search(booking::validate::SearchError::PickupInPast));
    assert_eq!(notice.title, "Invalid Date");
    assert_eq!(notice.tone, booking::filter::Tone::Warning);
    assert_eq!(wizard_notice(&WizardError::NoHub).text, "Please select a pickup hub.");
}

#[test]
fn stored_profile_replaces_draft() {
    let found = Customer {
        cust_id: Some(7),
        first_name: "Asha".into(),
        email: "asha@example.in".into(),
        date_of_birth: "1990-04-02T00:00:00".into(),
        ..Customer::default()
    };
    let draft = prefill_draft(&Customer::default(), Some(found), "asha@example.in");
    assert_eq!(draft.cust_id, Some(7));
    assert_eq!(draft.date_of_birth, "1990-04-02");
}

#[test]
fn unknown_email_keeps_typed_details() {
    let typed = Customer { first_name: "Ravi".into(), email: "old@x.in".into(), ..Customer::default() };
    let draft = prefill_draft(&typed, None, "ravi@x.in");
    assert_eq!(draft.first_name, "Ravi");
    assert_eq!(draft.email, "ravi@x.in");

    let fresh = prefill_draft(&Customer::default(), None, "new@x.in");
    assert_eq!(fresh, Customer::blank("new@x.in"));
}

#[test]
fn refused_rewind_reports_a_notice() {
    let mut flow = BookingFlow::default();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let notice = flow.rewind(Step::Hub, today).expect("hub needs a search first");
    assert_eq!(notice.text, "Please search for a location and dates first.");
    assert_eq!(flow.wizard.step(), Step::Search);

    assert!(flow.rewind(Step::Search, today).is_none());
}
