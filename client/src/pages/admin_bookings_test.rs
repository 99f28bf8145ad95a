use super::*;

#[test]
fn tiles_follow_counts() {
    let counts = BookingCounts { total: 9, active: 4, completed: 3, cancelled: 2 };
    assert_eq!(count_tiles(counts), [("Total", 9), ("Active", 4), ("Completed", 3), ("Cancelled", 2)]);
}

#[test]
fn record_count_pluralizes() {
    assert_eq!(records_label(0), "0 records");
    assert_eq!(records_label(1), "1 record");
    assert_eq!(records_label(12), "12 records");
}
