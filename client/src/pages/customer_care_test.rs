use super::*;

#[test]
fn ticket_inputs_are_trimmed() {
    let ticket = ticket_from_inputs(" Asha ", "asha@example.in ", " Refund ", "  Where is it?  ");
    assert_eq!(ticket.name, "Asha");
    assert_eq!(ticket.email, "asha@example.in");
    assert_eq!(ticket.subject, "Refund");
    assert_eq!(ticket.message, "Where is it?");
    assert!(validate_support_ticket(&ticket).is_empty());
}

#[test]
fn blank_ticket_reports_every_field() {
    let errors = validate_support_ticket(&ticket_from_inputs("", "", " ", ""));
    assert_eq!(errors.len(), 4);
}
