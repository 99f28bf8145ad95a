use super::*;

fn raw(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.as_bytes().to_vec(), content_disposition: None }
}

#[test]
fn api_url_prefixes_proxy_mount() {
    assert_eq!(api_url("/booking/all"), "/backend/booking/all");
}

#[test]
fn success_statuses_pass_through() {
    assert!(raw(200, "[]").into_success().is_ok());
    assert!(raw(204, "").into_success().is_ok());
}

#[test]
fn failures_are_classified() {
    assert!(raw(404, "").into_success().unwrap_err().is_not_found());
    assert_eq!(raw(503, "{}").into_success().unwrap_err(), ApiError::Unavailable);
    let err = raw(400, r#"{"message":"Car not available"}"#).into_success().unwrap_err();
    assert_eq!(err.to_string(), "Car not available");
}

#[test]
fn json_decode_errors_are_decode() {
    let err = raw(200, "not json").json::<Vec<Hub>>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn messages_from_json_or_text() {
    assert_eq!(message_from_body(r#"{"message":"Staff registered"}"#), "Staff registered");
    assert_eq!(message_from_body(r#""Connection OK""#), "Connection OK");
    assert_eq!(message_from_body("Uploaded 12 rows\n"), "Uploaded 12 rows");
}

