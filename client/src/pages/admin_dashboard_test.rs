use super::*;

#[test]
fn spreadsheets_post_to_their_upload_routes() {
    assert_eq!(Spreadsheet::Rates.path(), "/api/admin/upload-rates");
    assert_eq!(Spreadsheet::Cars.path(), "/api/v1/cars/upload");
    assert_eq!(Spreadsheet::Cars.success_message(), "Cars synchronization completed successfully!");
}

#[test]
fn vendor_requires_a_name() {
    assert_eq!(vendor_from_inputs("  ", "Maintenance", "", ""), Err("Vendor name is required."));
}

#[test]
fn vendor_drops_blank_optionals_and_defaults_type() {
    let vendor = vendor_from_inputs(" QuickFix Garage ", "", " ops@quickfix.in ", "").unwrap();
    assert_eq!(vendor.name, "QuickFix Garage");
    assert_eq!(vendor.vendor_type, "Maintenance");
    assert_eq!(vendor.email.as_deref(), Some("ops@quickfix.in"));
    assert_eq!(vendor.api_url, None);
    assert_eq!(vendor.vendor_id, None);
}
