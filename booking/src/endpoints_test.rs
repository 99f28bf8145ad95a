use super::*;

#[test]
fn encodes_reserved_characters() {
    assert_eq!(encode_component("asha+test@example.in"), "asha%2Btest%40example.in");
    assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
    assert_eq!(encode_component("Pune-Hub_1.~"), "Pune-Hub_1.~");
}

#[test]
fn encodes_multibyte_as_utf8() {
    assert_eq!(encode_component("₹"), "%E2%82%B9");
}

#[test]
fn available_cars_query_skips_missing_type() {
    assert_eq!(
        available_cars(4, "2024-06-20", "2024-06-23", None),
        "/api/v1/cars/available?hubId=4&startDate=2024-06-20&endDate=2024-06-23"
    );
    assert!(available_cars(4, "a", "b", Some(2)).ends_with("&carTypeId=2"));
}

#[test]
fn datetime_query_values_are_encoded() {
    assert_eq!(
        available_cars(1, "2024-06-20T10:00", "2024-06-21T10:00", None),
        "/api/v1/cars/available?hubId=1&startDate=2024-06-20T10%3A00&endDate=2024-06-21T10%3A00"
    );
}

#[test]
fn hubs_by_city_or_all() {
    assert_eq!(hubs(Some(3)), "/api/v1/hubs/city/3");
    assert_eq!(hubs(None), PROBE_PATH);
}

#[test]
fn identity_paths_are_encoded() {
    assert_eq!(bookings_by_user("a b@x.in"), "/booking/user/a%20b%40x.in");
    assert_eq!(customer_by_email("a@x.in"), "/api/v1/customers/a%40x.in");
}

#[test]
fn query_helper_without_params() {
    assert_eq!(with_query("/x", &[("a", None)]), "/x");
    assert_eq!(search_locations("BOM"), "/api/v1/locations/search?query=BOM");
}

#[test]
fn invoice_name_from_disposition() {
    assert_eq!(invoice_filename(Some(r#"attachment; filename="INV-42.pdf""#), 42), "INV-42.pdf");
    assert_eq!(invoice_filename(Some("attachment"), 42), "Invoice_42.pdf");
    assert_eq!(invoice_filename(None, 7), "Invoice_7.pdf");
}
