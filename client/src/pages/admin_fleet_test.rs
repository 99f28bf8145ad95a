use super::*;

#[test]
fn utilization_tile_has_one_decimal() {
    let stats = FleetStatistics {
        total_cars: 12,
        total_available: 7,
        total_rented: 4,
        total_maintenance: 1,
        utilization_rate: 33.333,
    };
    let tiles = statistic_tiles(&stats);
    assert_eq!(tiles[0], ("Total cars", "12".to_owned()));
    assert_eq!(tiles[4], ("Utilization", "33.3%".to_owned()));
}

#[test]
fn toggling_a_hub_flips_it() {
    let mut expanded = BTreeSet::from([1, 2]);
    toggle_hub(&mut expanded, 2);
    toggle_hub(&mut expanded, 3);
    assert_eq!(expanded, BTreeSet::from([1, 3]));
}

#[test]
fn rental_line_mentions_customer_and_booking() {
    let rental = RentalInfo {
        booking_id: 42,
        customer_name: "Asha Rao".into(),
        start_date: None,
        end_date: None,
        pickup_time: None,
    };
    assert_eq!(rental_line(&rental), "Asha Rao (#42)");
}
