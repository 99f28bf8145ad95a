//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (nav, notices, guards) and the booking
//! widgets reused across customer, staff, and admin pages, reading shared
//! state from Leptos context providers.

pub mod booking_card;
pub mod customer_form;
pub mod field;
pub mod nav_bar;
pub mod notice_banner;
pub mod price_summary;
pub mod protected;
pub mod status_badge;
pub mod step_indicator;
