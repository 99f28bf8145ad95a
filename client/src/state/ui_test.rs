use super::*;

#[test]
fn default_has_no_notice() {
    assert!(UiState::default().notice.is_none());
}

#[test]
fn expire_clears_only_the_matching_notice() {
    let mut ui = UiState::default();
    let first = ui.show(Notice::info("Saved", "Details saved."));
    let second = ui.show(Notice::danger("Booking Failed", "Car not available"));
    ui.expire(first);
    assert_eq!(ui.notice.as_ref().map(|n| n.title.as_str()), Some("Booking Failed"));
    ui.expire(second);
    assert!(ui.notice.is_none());
}

#[test]
fn constructors_set_tone() {
    assert_eq!(Notice::success("a", "b").tone, Tone::Success);
    assert_eq!(Notice::warning("a", "b").tone, Tone::Warning);
}
