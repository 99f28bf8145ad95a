use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  asha ", "s3cret!"),
        Ok(("asha".to_owned(), "s3cret!".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("asha", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("asha", " pw ").map(|(_, p)| p), Ok(" pw ".to_owned()));
}
