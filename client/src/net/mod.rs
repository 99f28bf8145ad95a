//! Networking for the booking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call goes to the host server's same-origin `/backend` proxy, which
//! forwards it to whichever REST backend is currently alive.

pub mod api;
