use super::*;

#[test]
fn message_field_wins() {
    let body = r#"{"message":"Car not available","title":"Bad Request"}"#;
    assert_eq!(extract_server_message(body).as_deref(), Some("Car not available"));
}

#[test]
fn validation_errors_are_flattened_per_field() {
    let body = r#"{"title":"One or more validation errors occurred.","errors":{"Email":["Required","Invalid"],"CarId":["Must be positive"]}}"#;
    assert_eq!(extract_server_message(body).as_deref(), Some("CarId: Must be positive\nEmail: Required, Invalid"));
}

#[test]
fn title_used_when_nothing_else() {
    assert_eq!(extract_server_message(r#"{"title":"Conflict"}"#).as_deref(), Some("Conflict"));
}

#[test]
fn plain_text_and_json_strings_pass_through() {
    assert_eq!(extract_server_message("Token expired").as_deref(), Some("Token expired"));
    assert_eq!(extract_server_message(r#""Invalid token""#).as_deref(), Some("Invalid token"));
    assert_eq!(extract_server_message("   "), None);
}

#[test]
fn status_mapping() {
    assert!(ApiError::from_status(404, "").is_not_found());
    assert_eq!(
        ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#),
        ApiError::Unauthorized("Invalid credentials".into())
    );
    assert_eq!(ApiError::from_status(503, ""), ApiError::Unavailable);
    assert_eq!(
        ApiError::from_status(400, ""),
        ApiError::Status { status: 400, message: "Request failed with status 400".into() }
    );
}

#[test]
fn display_is_user_facing() {
    let err = ApiError::from_status(409, r#"{"message":"Already cancelled"}"#);
    assert_eq!(err.to_string(), "Already cancelled");
    assert_eq!(err.status(), Some(409));
}

#[test]
fn transient_classification() {
    assert!(ApiError::Network("reset".into()).is_transient());
    assert!(ApiError::Unavailable.is_transient());
    assert!(ApiError::from_status(500, "").is_transient());
    assert!(!ApiError::from_status(400, "").is_transient());
    assert!(!ApiError::NotFound("gone".into()).is_transient());
}
