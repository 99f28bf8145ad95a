//! Date parsing and day arithmetic shared by pricing and validation.
//!
//! Form inputs carry `YYYY-MM-DD` (or `YYYY-MM-DDTHH:MM` from datetime
//! pickers); the backends answer with ISO datetimes. Both shapes parse here.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const DAY_MS: i64 = 86_400_000;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a form or wire date. Plain dates resolve to midnight.
#[must_use]
pub fn parse_input_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    let trimmed = raw.trim_end_matches('Z');
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Calendar date part of [`parse_input_date`].
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_input_date(raw).map(|dt| dt.date())
}

/// Value for an `<input type="date">`: everything before the `T`.
#[must_use]
pub fn format_for_input(raw: &str) -> String {
    raw.split('T').next().unwrap_or_default().trim().to_owned()
}

/// Human display such as `05 Mar 2024`, or the raw text if it does not parse.
#[must_use]
pub fn format_display(raw: &str) -> String {
    parse_input_date(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%d %b %Y").to_string())
}

/// Whole rental days between two instants, rounded up, never below one.
#[must_use]
pub fn rental_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let ms = (end - start).num_milliseconds().abs();
    let days = (ms + DAY_MS - 1) / DAY_MS;
    days.max(1)
}

/// [`rental_days`] over raw inputs; a missing or unparseable side counts as one day.
#[must_use]
pub fn rental_days_from_input(start: &str, end: &str) -> i64 {
    match (parse_input_date(start), parse_input_date(end)) {
        (Some(s), Some(e)) => rental_days(s, e),
        _ => 1,
    }
}

/// Completed years between `dob` and `today`.
#[must_use]
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
