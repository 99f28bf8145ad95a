mod http;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use booking::endpoints;
use booking::session::LoginRequest;
use booking::validate::validate_staff;
use booking::{ApiError, FuelLevel, HandoverRequest, HubRef, RegisterStaffRequest, ReturnRequest, Session, Vendor};

use crate::http::BackendClient;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing token; pass --token or set INDIADRIVE_TOKEN")]
    MissingToken,
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Parser, Debug)]
#[command(name = "indiadrive-cli", about = "IndiaDrive back-office CLI")]
struct Cli {
    #[arg(long, env = "INDIADRIVE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Path prefix in front of every API path; empty to call a backend directly.
    #[arg(long, env = "INDIADRIVE_API_PREFIX", default_value = "/backend")]
    api_prefix: String,

    #[arg(long, env = "INDIADRIVE_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Host health and the active backend.
    Ping,
    /// Sign in and print the session, including the bearer token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "INDIADRIVE_PASSWORD")]
        password: String,
    },
    Rates(UploadCommand),
    Cars(UploadCommand),
    Vendors(VendorsCommand),
    Staff(StaffCommand),
    Bookings(BookingsCommand),
    /// Hand a car over to the customer.
    Handover(HandoverArgs),
    /// Check a car back in and generate the invoice.
    Return(ReturnArgs),
    /// Download the invoice PDF for a booking.
    Invoice {
        booking_id: i64,
        /// Defaults to the server-provided file name.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fleet status by hub.
    Fleet,
}

#[derive(Args, Debug)]
struct UploadCommand {
    #[command(subcommand)]
    command: UploadSubcommand,
}

#[derive(Subcommand, Debug)]
enum UploadSubcommand {
    Upload { file: PathBuf },
}

#[derive(Args, Debug)]
struct VendorsCommand {
    #[command(subcommand)]
    command: VendorsSubcommand,
}

#[derive(Subcommand, Debug)]
enum VendorsSubcommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type", default_value = booking::DEFAULT_VENDOR_TYPE)]
        vendor_type: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value = booking::DEFAULT_VENDOR_API_URL)]
        api_url: String,
    },
    Test {
        vendor_id: i64,
    },
}

#[derive(Args, Debug)]
struct StaffCommand {
    #[command(subcommand)]
    command: StaffSubcommand,
}

#[derive(Subcommand, Debug)]
enum StaffSubcommand {
    List,
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "INDIADRIVE_STAFF_PASSWORD")]
        password: String,
        #[arg(long)]
        hub_id: i64,
    },
    Delete {
        staff_id: i64,
    },
}

#[derive(Args, Debug)]
struct BookingsCommand {
    #[command(subcommand)]
    command: BookingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum BookingsSubcommand {
    All,
    Get { booking_id: i64 },
    Hub { hub_id: i64 },
    /// Bookings for an email address or user id.
    User { identity: String },
    Cancel { booking_id: i64 },
}

#[derive(Args, Debug)]
struct HandoverArgs {
    booking_id: i64,
    #[arg(long)]
    car_id: Option<i64>,
    #[arg(long, value_parser = parse_fuel)]
    fuel: Option<FuelLevel>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long)]
    end_date: Option<String>,
}

#[derive(Args, Debug)]
struct ReturnArgs {
    booking_id: i64,
    #[arg(long)]
    return_date: Option<String>,
    #[arg(long, value_parser = parse_fuel)]
    fuel: Option<FuelLevel>,
    #[arg(long)]
    notes: Option<String>,
}

fn parse_fuel(raw: &str) -> Result<FuelLevel, String> {
    FuelLevel::parse(raw).ok_or_else(|| {
        let accepted: Vec<_> = FuelLevel::ALL.iter().map(|f| f.as_str()).collect();
        format!("expected one of {}", accepted.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = BackendClient::new(&cli.base_url, &cli.api_prefix, cli.token.clone())?;
    if needs_token(&cli.command) && cli.token.as_deref().is_none_or(|t| t.trim().is_empty()) {
        return Err(CliError::MissingToken);
    }

    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::Login { username, password } => run_login(&client, username, password).await,
        Command::Rates(upload) => run_upload(&client, &endpoints::upload_rates(), upload).await,
        Command::Cars(upload) => run_upload(&client, &endpoints::upload_cars(), upload).await,
        Command::Vendors(vendors) => run_vendors(&client, vendors).await,
        Command::Staff(staff) => run_staff(&client, staff).await,
        Command::Bookings(bookings) => run_bookings(&client, bookings).await,
        Command::Handover(args) => run_handover(&client, args).await,
        Command::Return(args) => run_return(&client, args).await,
        Command::Invoice { booking_id, out } => run_invoice(&client, booking_id, out).await,
        Command::Fleet => print_json(&client.get::<Value>(&endpoints::fleet_overview()).await?),
    }
}

/// Everything except the health check and sign-in acts on a signed-in account.
fn needs_token(command: &Command) -> bool {
    !matches!(command, Command::Ping | Command::Login { .. })
}

async fn run_ping(client: &BackendClient) -> Result<(), CliError> {
    client.get_host("/healthz").await?;
    let backend = client.get_host("/backend-status").await?;
    let status = serde_json::from_str::<Value>(&backend).unwrap_or(Value::String(backend));
    print_json(&serde_json::json!({ "ok": true, "backend": status }))
}

async fn run_login(client: &BackendClient, username: String, password: String) -> Result<(), CliError> {
    let session: Session = client.post(&endpoints::login(), &LoginRequest { username, password }).await?;
    print_json(&serde_json::to_value(session)?)
}

async fn run_upload(client: &BackendClient, path: &str, upload: UploadCommand) -> Result<(), CliError> {
    let UploadSubcommand::Upload { file } = upload.command;
    let bytes = read_file(&file).await?;
    let name = file.file_name().map_or_else(|| "upload.xlsx".to_owned(), |n| n.to_string_lossy().into_owned());
    let message = client.upload(path, name, bytes).await?;
    print_message(&message)
}

async fn run_vendors(client: &BackendClient, vendors: VendorsCommand) -> Result<(), CliError> {
    match vendors.command {
        VendorsSubcommand::List => print_json(&client.get::<Value>(&endpoints::vendors()).await?),
        VendorsSubcommand::Add { name, vendor_type, email, api_url } => {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(CliError::Invalid("Vendor name is required.".to_owned()));
            }
            let vendor = Vendor { vendor_id: None, name, vendor_type, email, api_url: Some(api_url) };
            let message = client.post_for_message(&endpoints::vendors(), Some(&vendor)).await?;
            print_message(&message)
        }
        VendorsSubcommand::Test { vendor_id } => {
            let message = client.post_for_message::<Value>(&endpoints::vendor_test_connection(vendor_id), None).await?;
            print_message(&message)
        }
    }
}

async fn run_staff(client: &BackendClient, staff: StaffCommand) -> Result<(), CliError> {
    match staff.command {
        StaffSubcommand::List => print_json(&client.get::<Value>(&endpoints::admin_staff()).await?),
        StaffSubcommand::Register { username, email, password, hub_id } => {
            let request = RegisterStaffRequest {
                username: username.trim().to_owned(),
                email: email.trim().to_owned(),
                password,
                hub: HubRef { hub_id, ..HubRef::default() },
            };
            validate_staff(&request).into_result().map_err(|errors| {
                let messages: Vec<_> = errors.iter().map(|(field, message)| format!("{field}: {message}")).collect();
                CliError::Invalid(messages.join("; "))
            })?;
            let message = client.post_for_message(&endpoints::register_staff(), Some(&request)).await?;
            print_message(&message)
        }
        StaffSubcommand::Delete { staff_id } => print_message(&client.delete(&endpoints::staff_member(staff_id)).await?),
    }
}

async fn run_bookings(client: &BackendClient, bookings: BookingsCommand) -> Result<(), CliError> {
    let value: Value = match bookings.command {
        BookingsSubcommand::All => client.get(&endpoints::all_bookings()).await?,
        BookingsSubcommand::Get { booking_id } => client.get(&endpoints::booking(booking_id)).await?,
        BookingsSubcommand::Hub { hub_id } => client.get(&endpoints::bookings_by_hub(hub_id)).await?,
        BookingsSubcommand::User { identity } => client.get(&endpoints::bookings_by_user(identity.trim())).await?,
        BookingsSubcommand::Cancel { booking_id } => client.post_empty(&endpoints::cancel_booking(booking_id)).await?,
    };
    print_json(&value)
}

async fn run_handover(client: &BackendClient, args: HandoverArgs) -> Result<(), CliError> {
    let request = handover_request(args);
    print_message(&client.post_for_message(&endpoints::process_handover(), Some(&request)).await?)
}

async fn run_return(client: &BackendClient, args: ReturnArgs) -> Result<(), CliError> {
    let request = ReturnRequest {
        booking_id: args.booking_id,
        return_date: args.return_date,
        fuel_status: args.fuel,
        notes: non_blank(args.notes),
    };
    print_message(&client.post_for_message(&endpoints::return_car(), Some(&request)).await?)
}

async fn run_invoice(client: &BackendClient, booking_id: i64, out: Option<PathBuf>) -> Result<(), CliError> {
    let (bytes, disposition) = client.download(&endpoints::invoice(booking_id)).await?;
    let path = out.unwrap_or_else(|| PathBuf::from(endpoints::invoice_filename(disposition.as_deref(), booking_id)));
    tokio::fs::write(&path, &bytes).await.map_err(|source| CliError::Io { path: path.clone(), source })?;
    print_json(&serde_json::json!({ "bookingId": booking_id, "file": path.display().to_string(), "bytes": bytes.len() }))
}

fn handover_request(args: HandoverArgs) -> HandoverRequest {
    HandoverRequest {
        booking_id: args.booking_id,
        car_id: args.car_id,
        fuel_status: args.fuel,
        notes: non_blank(args.notes),
        start_date: args.start_date,
        end_date: args.end_date,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

async fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path).await.map_err(|source| CliError::Io { path: path.to_owned(), source })
}

fn print_message(message: &str) -> Result<(), CliError> {
    print_json(&serde_json::json!({ "message": message }))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
