//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pure helpers a page needs are `pub` so its `_test.rs`
//! file can exercise them without a browser.

pub mod about;
pub mod admin_bookings;
pub mod admin_dashboard;
pub mod admin_fleet;
pub mod admin_staff;
pub mod booking;
pub mod car_select;
pub mod customer_care;
pub mod explore;
pub mod forgot_password;
pub mod home;
pub mod hub_select;
pub mod login;
pub mod manage_booking;
pub mod my_bookings;
pub mod register;
pub mod reset_password;
pub mod staff_dashboard;
