use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["indiadrive-cli"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => panic!("parse failed: {e}"),
    }
}

#[test]
fn defaults_point_at_the_local_host_proxy() {
    let cli = parse(&["--token", "t", "fleet"]);
    assert_eq!(cli.base_url, "http://127.0.0.1:3000");
    assert_eq!(cli.api_prefix, "/backend");
    assert!(matches!(cli.command, Command::Fleet));
}

#[test]
fn handover_parses_fuel_and_car() {
    let cli = parse(&["handover", "42", "--car-id", "7", "--fuel", "3/4", "--notes", " scratch on bumper "]);
    let Command::Handover(args) = cli.command else {
        panic!("expected handover");
    };
    let request = handover_request(args);
    assert_eq!(request.booking_id, 42);
    assert_eq!(request.car_id, Some(7));
    assert_eq!(request.fuel_status, Some(FuelLevel::ThreeQuarters));
    assert_eq!(request.notes.as_deref(), Some("scratch on bumper"));
    assert_eq!(request.start_date, None);
}

#[test]
fn unknown_fuel_level_is_rejected() {
    let err = Cli::try_parse_from(["indiadrive-cli", "return", "42", "--fuel", "empty"]).unwrap_err();
    assert!(err.to_string().contains("1/4, 1/2, 3/4, Full"));
}

#[test]
fn upload_subcommands_take_a_file() {
    let cli = parse(&["rates", "upload", "rates.xlsx"]);
    let Command::Rates(UploadCommand { command: UploadSubcommand::Upload { file } }) = cli.command else {
        panic!("expected rates upload");
    };
    assert_eq!(file, PathBuf::from("rates.xlsx"));
}

#[test]
fn vendor_add_uses_vendor_defaults() {
    let cli = parse(&["vendors", "add", "--name", "Speedy Tyres"]);
    let Command::Vendors(VendorsCommand { command: VendorsSubcommand::Add { vendor_type, api_url, email, .. } }) =
        cli.command
    else {
        panic!("expected vendors add");
    };
    assert_eq!(vendor_type, booking::DEFAULT_VENDOR_TYPE);
    assert_eq!(api_url, booking::DEFAULT_VENDOR_API_URL);
    assert_eq!(email, None);
}

#[test]
fn only_ping_and_login_skip_the_token() {
    assert!(!needs_token(&parse(&["ping"]).command));
    assert!(!needs_token(&parse(&["login", "--username", "asha", "--password", "pw"]).command));
    assert!(needs_token(&parse(&["bookings", "get", "9"]).command));
    assert!(needs_token(&parse(&["invoice", "9", "--out", "inv.pdf"]).command));
}

#[test]
fn blank_notes_are_dropped() {
    assert_eq!(non_blank(Some("   ".to_owned())), None);
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some(" ok ".to_owned())).as_deref(), Some("ok"));
}

#[test]
fn client_joins_prefix_and_paths() {
    let client = match BackendClient::new("http://localhost:3000/", "/backend/", None) {
        Ok(client) => client,
        Err(e) => panic!("client: {e}"),
    };
    assert_eq!(client.api_url("/api/v1/hubs"), "http://localhost:3000/backend/api/v1/hubs");
    assert_eq!(client.host_url("/healthz"), "http://localhost:3000/healthz");

    let direct = match BackendClient::new("http://localhost:8080", "", None) {
        Ok(client) => client,
        Err(e) => panic!("client: {e}"),
    };
    assert_eq!(direct.api_url("/booking/return"), "http://localhost:8080/booking/return");
}
