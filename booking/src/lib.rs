//! Domain rules for IndiaDrive car rentals.
//!
//! This crate is UI-framework agnostic so the Leptos client, the host server,
//! and the back-office CLI share one definition of the wire records, backend
//! routes, pricing, validation, booking wizard, and session policy.

pub mod cache;
pub mod dates;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod pricing;
pub mod session;
pub mod types;
pub mod validate;
pub mod wizard;

pub use error::ApiError;
pub use session::{Role, Session};
pub use types::*;
pub use wizard::{Step, Wizard};
