use super::*;

#[test]
fn registration_request_is_a_trimmed_customer_signup() {
    let form = RegistrationForm {
        username: " asha ".into(),
        email: " asha@example.in ".into(),
        password: "pass@word1".into(),
        confirm_password: "pass@word1".into(),
    };
    let request = registration_request(&form);
    assert_eq!(request.username, "asha");
    assert_eq!(request.email, "asha@example.in");
    assert_eq!(request.password, "pass@word1");
    assert_eq!(request.role, Role::Customer.as_str());
}
