//! Rental price arithmetic.
//!
//! DESIGN
//! ======
//! A quote is `days × (car daily rate + add-on daily total)`. The child seat is
//! the one add-on sold by quantity: its daily rate is multiplied by the chosen
//! seat count, and the booking payload repeats its id once per seat so the
//! backend prices it the same way.

use std::collections::BTreeSet;

use crate::dates::{parse_input_date, rental_days};
use crate::types::{AddOn, BookingResponse};

/// Daily rate assumed for list views when a booking carries neither a total
/// nor a daily rate.
pub const FALLBACK_DAILY_RATE: f64 = 2500.0;

pub const MAX_CHILD_SEATS: u32 = 3;

/// Whether an add-on is priced per child seat.
#[must_use]
pub fn is_child_seat(name: &str) -> bool {
    name.to_lowercase().contains("child seat")
}

// =============================================================================
// ADD-ON SELECTION
// =============================================================================

/// Add-ons ticked in the booking form plus the child-seat quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddOnSelection {
    ids: BTreeSet<i64>,
    child_seat_qty: u32,
}

impl Default for AddOnSelection {
    fn default() -> Self {
        Self { ids: BTreeSet::new(), child_seat_qty: 1 }
    }
}

impl AddOnSelection {
    #[must_use]
    pub fn contains(&self, add_on_id: i64) -> bool {
        self.ids.contains(&add_on_id)
    }

    /// Flip one add-on on or off. Returns the new state.
    pub fn toggle(&mut self, add_on_id: i64) -> bool {
        if self.ids.remove(&add_on_id) {
            false
        } else {
            self.ids.insert(add_on_id);
            true
        }
    }

    /// Set the seat count, clamped to `1..=MAX_CHILD_SEATS`.
    pub fn set_child_seat_qty(&mut self, qty: u32) {
        self.child_seat_qty = qty.clamp(1, MAX_CHILD_SEATS);
    }

    #[must_use]
    pub fn child_seat_qty(&self) -> u32 {
        self.child_seat_qty
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }

    /// Units of `add_on` in this selection (0 when unselected).
    #[must_use]
    pub fn quantity_of(&self, add_on: &AddOn) -> u32 {
        if !self.contains(add_on.add_on_id) {
            0
        } else if is_child_seat(&add_on.add_on_name) {
            self.child_seat_qty
        } else {
            1
        }
    }
}

// =============================================================================
// QUOTES
// =============================================================================

/// Sum of daily rates for the selected add-ons.
#[must_use]
pub fn daily_add_on_total(add_ons: &[AddOn], selection: &AddOnSelection) -> f64 {
    add_ons
        .iter()
        .map(|a| a.addon_daily_rate * f64::from(selection.quantity_of(a)))
        .sum()
}

/// Price breakdown shown in the booking summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub days: i64,
    pub car_total: f64,
    pub add_on_total: f64,
    pub total: f64,
}

/// Price a rental of `days` at `daily_rate` with the selected add-ons.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quote(daily_rate: f64, days: i64, add_ons: &[AddOn], selection: &AddOnSelection) -> Quote {
    let days = days.max(1);
    let factor = days as f64;
    let car_total = daily_rate * factor;
    let add_on_total = daily_add_on_total(add_ons, selection) * factor;
    Quote { days, car_total, add_on_total, total: car_total + add_on_total }
}

/// Add-on ids for the booking payload, with the child seat repeated per seat.
#[must_use]
pub fn expand_add_on_ids(add_ons: &[AddOn], selection: &AddOnSelection) -> Vec<i64> {
    let child_seat_id = add_ons.iter().find(|a| is_child_seat(&a.add_on_name)).map(|a| a.add_on_id);
    let mut ids = Vec::new();
    for id in selection.ids() {
        if Some(id) == child_seat_id {
            ids.extend(std::iter::repeat_n(id, selection.child_seat_qty as usize));
        } else {
            ids.push(id);
        }
    }
    ids
}

// =============================================================================
// BOOKED TOTALS
// =============================================================================

/// Revised price when staff move a booking's dates at handover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub days: i64,
    pub rental: f64,
    pub add_on: f64,
    pub total: f64,
}

/// Re-price `booking` for new dates. The add-on daily rate is recovered from
/// the booked add-on amount over the booked days. `None` when the new range is
/// empty or either new date is unparseable.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_modified_total(booking: &BookingResponse, new_start: &str, new_end: &str) -> Option<Estimate> {
    let start = parse_input_date(new_start)?;
    let end = parse_input_date(new_end)?;
    if start >= end {
        return None;
    }
    let days = rental_days(start, end);

    let booked_range = booking
        .start_date
        .as_deref()
        .and_then(parse_input_date)
        .zip(booking.end_date.as_deref().and_then(parse_input_date));
    let add_on_daily = match (booked_range, booking.total_addon_amount) {
        (Some((s, e)), Some(amount)) if amount > 0.0 => amount / rental_days(s, e) as f64,
        _ => 0.0,
    };

    let rental = booking.daily_rate.unwrap_or_default() * days as f64;
    let add_on = add_on_daily * days as f64;
    Some(Estimate { days, rental, add_on, total: rental + add_on })
}

/// Total shown in booking lists: the server total when present, otherwise
/// booked days × daily rate with [`FALLBACK_DAILY_RATE`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn display_total(booking: &BookingResponse) -> f64 {
    if let Some(total) = booking.total_amount.filter(|t| *t > 0.0) {
        return total;
    }
    let days = crate::dates::rental_days_from_input(
        booking.start_date.as_deref().unwrap_or_default(),
        booking.end_date.as_deref().unwrap_or_default(),
    );
    let rate = booking.daily_rate.filter(|r| *r > 0.0).unwrap_or(FALLBACK_DAILY_RATE);
    days as f64 * rate
}

/// Rupee amount with Indian digit grouping, rounded to whole rupees: `₹1,23,456`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            parts.push(right);
            rest = left;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{tail}", parts.join(","))
    };
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}₹{grouped}")
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
