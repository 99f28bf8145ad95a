use super::*;

fn add_on(id: i64, name: &str, rate: f64) -> AddOn {
    AddOn { add_on_id: id, add_on_name: name.into(), addon_daily_rate: rate, rate_valid_until: None }
}

fn catalogue() -> Vec<AddOn> {
    vec![add_on(1, "GPS Navigation", 200.0), add_on(2, "Baby Child Seat", 150.0), add_on(3, "Wifi", 100.0)]
}

// =============================================================================
// QUOTES
// =============================================================================

#[test]
fn quote_without_add_ons_is_rate_times_days() {
    let q = quote(1500.0, 4, &catalogue(), &AddOnSelection::default());
    assert_eq!(q.car_total, 6000.0);
    assert_eq!(q.add_on_total, 0.0);
    assert_eq!(q.total, 6000.0);
}

#[test]
fn single_plain_add_on_adds_its_rate_per_day() {
    let mut sel = AddOnSelection::default();
    sel.toggle(1);
    let q = quote(1500.0, 3, &catalogue(), &sel);
    assert_eq!(q.total, 3.0 * (1500.0 + 200.0));
}

#[test]
fn child_seat_rate_scales_with_quantity() {
    let mut sel = AddOnSelection::default();
    sel.toggle(2);
    sel.set_child_seat_qty(3);
    let q = quote(1000.0, 2, &catalogue(), &sel);
    assert_eq!(q.total, 2.0 * (1000.0 + 150.0 * 3.0));
}

#[test]
fn quote_floors_days_to_one() {
    assert_eq!(quote(900.0, 0, &[], &AddOnSelection::default()).total, 900.0);
}

#[test]
fn child_seat_quantity_is_clamped() {
    let mut sel = AddOnSelection::default();
    sel.set_child_seat_qty(0);
    assert_eq!(sel.child_seat_qty(), 1);
    sel.set_child_seat_qty(9);
    assert_eq!(sel.child_seat_qty(), MAX_CHILD_SEATS);
}

#[test]
fn toggle_flips_membership() {
    let mut sel = AddOnSelection::default();
    assert!(sel.toggle(5));
    assert!(sel.contains(5));
    assert!(!sel.toggle(5));
    assert!(sel.is_empty());
}

#[test]
fn expand_repeats_child_seat_id_per_seat() {
    let mut sel = AddOnSelection::default();
    sel.toggle(1);
    sel.toggle(2);
    sel.set_child_seat_qty(2);
    assert_eq!(expand_add_on_ids(&catalogue(), &sel), vec![1, 2, 2]);
}

#[test]
fn child_seat_detection_ignores_case() {
    assert!(is_child_seat("CHILD SEAT (infant)"));
    assert!(!is_child_seat("Child booster"));
}

// =============================================================================
// BOOKED TOTALS
// =============================================================================

fn booked() -> BookingResponse {
    BookingResponse {
        booking_id: 1,
        start_date: Some("2024-01-01T00:00:00".into()),
        end_date: Some("2024-01-03T00:00:00".into()),
        daily_rate: Some(1000.0),
        total_addon_amount: Some(400.0),
        ..BookingResponse::default()
    }
}

#[test]
fn estimate_recovers_add_on_daily_rate() {
    let est = estimate_modified_total(&booked(), "2024-01-01", "2024-01-05").unwrap();
    assert_eq!(est.days, 4);
    assert_eq!(est.rental, 4000.0);
    assert_eq!(est.add_on, 800.0);
    assert_eq!(est.total, 4800.0);
}

#[test]
fn estimate_rejects_empty_range() {
    assert!(estimate_modified_total(&booked(), "2024-01-05", "2024-01-05").is_none());
    assert!(estimate_modified_total(&booked(), "2024-01-06", "2024-01-05").is_none());
    assert!(estimate_modified_total(&booked(), "", "2024-01-05").is_none());
}

#[test]
fn display_total_prefers_server_amount() {
    let mut b = booked();
    b.total_amount = Some(2400.0);
    assert_eq!(display_total(&b), 2400.0);
}

#[test]
fn display_total_falls_back_to_default_rate() {
    let mut b = booked();
    b.daily_rate = None;
    assert_eq!(display_total(&b), 2.0 * FALLBACK_DAILY_RATE);
}

#[test]
fn inr_uses_indian_grouping() {
    assert_eq!(format_inr(0.0), "₹0");
    assert_eq!(format_inr(999.4), "₹999");
    assert_eq!(format_inr(1000.0), "₹1,000");
    assert_eq!(format_inr(123_456.0), "₹1,23,456");
    assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    assert_eq!(format_inr(-4500.0), "-₹4,500");
}
