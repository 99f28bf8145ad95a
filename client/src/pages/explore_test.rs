use super::*;

fn car(id: i64, model: &str, status: &str) -> FleetCar {
    FleetCar {
        car_id: id,
        model: model.into(),
        registration_number: format!("MH12AB{id:04}"),
        status: status.into(),
        ..FleetCar::default()
    }
}

fn hubs() -> Vec<HubFleet> {
    vec![
        HubFleet {
            hub_id: 1,
            hub_name: "Pune Airport".into(),
            cars: vec![car(10, "Swift", "Available"), car(11, "City", "Rented")],
            ..HubFleet::default()
        },
        HubFleet {
            hub_id: 2,
            hub_name: "Mumbai Central".into(),
            cars: vec![car(20, "Creta", "Available")],
            ..HubFleet::default()
        },
    ]
}

#[test]
fn listing_spans_hubs_and_filters_status() {
    let hubs = hubs();
    let ids: Vec<i64> = explore_listing(&hubs, None, "", FleetStatus::Available).iter().map(|(_, c)| c.car_id).collect();
    assert_eq!(ids, [10, 20]);
    assert_eq!(explore_listing(&hubs, None, "", FleetStatus::All).len(), 3);
}

#[test]
fn listing_narrows_to_one_hub_and_search() {
    let hubs = hubs();
    let listing = explore_listing(&hubs, Some(1), "", FleetStatus::All);
    assert!(listing.iter().all(|(h, _)| h.hub_id == 1));
    let hits = explore_listing(&hubs, None, "cre", FleetStatus::All);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0.hub_name, "Mumbai Central");
}

#[test]
fn book_now_links_carry_hub_and_car() {
    assert_eq!(book_now_href(2, 20), "/booking?hubId=2&carId=20");
}
