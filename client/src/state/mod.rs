//! Application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per module here. Pages read and update them;
//! none of them talk to the network themselves.

pub mod auth;
pub mod booking;
pub mod staff;
pub mod ui;
