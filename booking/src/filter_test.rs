use super::*;

fn booking(id: i64, status: BookingStatus, start: &str, end: &str) -> BookingResponse {
    BookingResponse {
        booking_id: id,
        booking_status: status,
        start_date: Some(start.into()),
        end_date: Some(end.into()),
        ..BookingResponse::default()
    }
}

fn bookings() -> Vec<BookingResponse> {
    vec![
        booking(1, BookingStatus::Confirmed, "2024-03-01T10:00:00", "2024-03-03T10:00:00"),
        booking(2, BookingStatus::Allotted, "2024-03-05T00:00:00", "2024-03-08T00:00:00"),
        booking(3, BookingStatus::Active, "2024-02-20T00:00:00", "2024-03-02T00:00:00"),
        booking(4, BookingStatus::Completed, "2024-01-01T00:00:00", "2024-01-03T00:00:00"),
        booking(5, BookingStatus::Cancelled, "2024-03-10T00:00:00", "2024-03-12T00:00:00"),
    ]
}

fn ids(found: &[&BookingResponse]) -> Vec<i64> {
    found.iter().map(|b| b.booking_id).collect()
}

#[test]
fn admin_active_means_confirmed_or_allotted() {
    let all = bookings();
    let found = filter_admin_bookings(&all, AdminStatusFilter::Active, DateRange::default());
    assert_eq!(ids(&found), vec![1, 2]);
}

#[test]
fn hub_filter_is_exact() {
    let all = bookings();
    let found = filter_hub_bookings(&all, &HubStatusFilter::Exact(BookingStatus::Active));
    assert_eq!(ids(&found), vec![3]);
    assert_eq!(filter_hub_bookings(&all, &HubStatusFilter::All).len(), 5);
    assert_eq!(HubStatusFilter::tabs().len(), 5);
}

#[test]
fn date_range_compares_calendar_days() {
    let all = bookings();
    let range = DateRange::from_inputs("2024-03-01", "2024-03-08");
    let found = filter_admin_bookings(&all, AdminStatusFilter::All, range);
    assert_eq!(ids(&found), vec![1, 2]);
}

#[test]
fn open_ended_range() {
    let all = bookings();
    let range = DateRange::from_inputs("", "2024-01-31");
    assert_eq!(ids(&filter_admin_bookings(&all, AdminStatusFilter::All, range)), vec![4]);
    assert!(DateRange::from_inputs("", "").is_empty());
}

#[test]
fn counts_split_by_status() {
    let counts = count_bookings(&bookings());
    assert_eq!(counts, BookingCounts { total: 5, active: 2, completed: 1, cancelled: 1 });
}

fn fleet_car(id: i64, model: &str, reg: &str, status: &str) -> FleetCar {
    FleetCar {
        car_id: id,
        model: model.into(),
        registration_number: reg.into(),
        status: status.into(),
        ..FleetCar::default()
    }
}

fn hubs() -> Vec<HubFleet> {
    vec![
        HubFleet {
            hub_id: 1,
            hub_name: "Pune".into(),
            cars: vec![fleet_car(1, "Swift", "MH12AB1234", "Available"), fleet_car(2, "Creta", "MH12CD5678", "Rented")],
            available_cars: 1,
            rented_cars: 1,
            ..HubFleet::default()
        },
        HubFleet { hub_id: 2, hub_name: "Goa".into(), ..HubFleet::default() },
    ]
}

#[test]
fn fleet_search_matches_model_or_registration() {
    let hubs = hubs();
    assert_eq!(filter_fleet_cars(&hubs[0].cars, "swi", FleetStatus::All).len(), 1);
    assert_eq!(filter_fleet_cars(&hubs[0].cars, "cd56", FleetStatus::All)[0].car_id, 2);
    assert!(filter_fleet_cars(&hubs[0].cars, "swift", FleetStatus::Rented).is_empty());
}

#[test]
fn fleet_sections_hide_empty_hubs() {
    let hubs = hubs();
    assert_eq!(fleet_sections(&hubs, "", FleetStatus::All).len(), 2);
    assert_eq!(fleet_sections(&hubs, "", FleetStatus::Maintenance).len(), 0);
    let searched = fleet_sections(&hubs, "creta", FleetStatus::All);
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].hub.hub_id, 1);
}

#[test]
fn hubs_with_cars_start_expanded() {
    assert_eq!(default_expanded(&hubs()).into_iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn tones() {
    assert_eq!(status_tone(&BookingStatus::Cancelled), Tone::Danger);
    assert_eq!(status_tone(&BookingStatus::Other("HOLD".into())).as_class(), "warning");
    assert_eq!(fleet_tone("Maintenance"), Tone::Warning);
}
