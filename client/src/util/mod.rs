//! Browser glue and small helpers used by pages and state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage, theme, and downloads are the only places that reach for
//! `web-sys`. Under SSR their reads come back empty and their writes are
//! dropped.

pub mod clock;
pub mod download;
pub mod guard;
pub mod storage;
pub mod theme;
