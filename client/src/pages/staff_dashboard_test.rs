use super::*;

fn booking(id: i64, status: BookingStatus) -> BookingResponse {
    BookingResponse { booking_id: id, booking_status: status, ..BookingResponse::default() }
}

#[test]
fn tabs_link_to_their_routes() {
    assert_eq!(StaffTab::HubBookings.path(), "/staff/dashboard");
    assert_eq!(StaffTab::Return.href_for(7), "/staff/return?id=7");
    assert_eq!(StaffTab::OnSpot.path(), "/staff/on-spot");
    assert_eq!(StaffTab::ALL.last(), Some(&StaffTab::OnSpot));
}

#[test]
fn tab_counts_cover_every_filter() {
    let list = vec![
        booking(1, BookingStatus::Confirmed),
        booking(2, BookingStatus::Confirmed),
        booking(3, BookingStatus::Active),
        booking(4, BookingStatus::Cancelled),
    ];
    let counts = hub_tab_counts(&list);
    assert_eq!(counts.len(), HubStatusFilter::tabs().len());
    assert_eq!(counts[0], (HubStatusFilter::All, 4));
    assert!(counts.contains(&(HubStatusFilter::Exact(BookingStatus::Confirmed), 2)));
    assert!(counts.contains(&(HubStatusFilter::Exact(BookingStatus::Completed), 0)));
}

#[test]
fn quick_action_follows_booking_status() {
    assert_eq!(quick_action(&BookingStatus::Confirmed), Some(StaffTab::Handover));
    assert_eq!(quick_action(&BookingStatus::Allotted), Some(StaffTab::Handover));
    assert_eq!(quick_action(&BookingStatus::Active), Some(StaffTab::Return));
    assert_eq!(quick_action(&BookingStatus::Completed), None);
    assert_eq!(quick_action(&BookingStatus::Cancelled), None);
}
