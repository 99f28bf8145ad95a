//! Wall-clock reads.
//!
//! `chrono`'s `wasmbind` feature backs `Local::now()` with the JS `Date` in
//! the browser, so the same code runs under SSR, tests, and hydrate.

use chrono::{Local, NaiveDate, Utc};

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD` for date inputs.
#[must_use]
pub fn today_input() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[must_use]
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}

/// "5 min ago" style age for cached data.
#[must_use]
pub fn age_label(then_ms: i64, now_ms: i64) -> String {
    let mins = (now_ms - then_ms).max(0) / 60_000;
    match mins {
        0 => "just now".to_owned(),
        1..=59 => format!("{mins} min ago"),
        60..=1439 => format!("{} h ago", mins / 60),
        _ => format!("{} days ago", mins / 1440),
    }
}
