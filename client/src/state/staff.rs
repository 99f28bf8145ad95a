//! Hub staff console rules: which bookings may be handed over or returned,
//! and how a walk-in rental is booked and handed over in one go.

#[cfg(test)]
#[path = "staff_test.rs"]
mod staff_test;

use booking::dates::rental_days_from_input;
use booking::pricing::{AddOnSelection, Quote, expand_add_on_ids, quote};
use booking::validate::validate_search_dates;
use booking::{AddOn, BookingRequest, BookingResponse, BookingStatus, Car, Customer, FuelLevel, HandoverRequest, ReturnRequest};
use chrono::{Days, NaiveDate};

use crate::state::ui::Notice;

/// Why a booking cannot be handed over, if it cannot.
pub fn handover_block(status: &BookingStatus) -> Option<Notice> {
    match status {
        BookingStatus::Active => Some(Notice::info("Already Handed Over", "This vehicle has already been handed over.")),
        BookingStatus::Completed => {
            Some(Notice::info("Booking Closed", "This booking is already completed and closed."))
        }
        BookingStatus::Cancelled => Some(Notice::danger("Booking Cancelled", "This booking has been cancelled.")),
        _ => None,
    }
}

/// Why a booking cannot be returned, if it cannot. Only active rentals can.
pub fn return_block(status: &BookingStatus) -> Option<Notice> {
    (*status != BookingStatus::Active).then(|| {
        Notice::warning(
            "Not Returnable",
            format!("This booking is {status}. Only ACTIVE bookings can be returned."),
        )
    })
}

/// Inputs of the handover dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandoverForm {
    pub car_id: Option<i64>,
    pub fuel: FuelLevel,
    pub notes: String,
    pub start_date: String,
    pub end_date: String,
}

impl HandoverForm {
    /// Defaults for `booking`: pickup today, the booked return date.
    pub fn for_booking(booking: &BookingResponse, today: &str) -> Self {
        Self {
            start_date: today.to_owned(),
            end_date: booking.end_date.as_deref().map(booking::dates::format_for_input).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// The message shown when the dates are not in order.
    pub fn request(&self, booking_id: i64) -> Result<HandoverRequest, &'static str> {
        use booking::dates::parse_input_date;

        if let (Some(start), Some(end)) = (parse_input_date(&self.start_date), parse_input_date(&self.end_date)) {
            if start >= end {
                return Err("Start Date must be before End Date");
            }
        }
        let non_empty = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
        Ok(HandoverRequest {
            booking_id,
            car_id: self.car_id,
            fuel_status: Some(self.fuel),
            notes: non_empty(&self.notes),
            start_date: non_empty(&self.start_date),
            end_date: non_empty(&self.end_date),
        })
    }
}

pub fn return_request(booking_id: i64, today: &str, fuel: FuelLevel, notes: &str) -> ReturnRequest {
    ReturnRequest {
        booking_id,
        return_date: Some(today.to_owned()),
        fuel_status: Some(fuel),
        notes: Some(notes.trim().to_owned()).filter(|n| !n.is_empty()),
    }
}

/// Contact fields the desk may correct while the customer is at the counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactEdit {
    pub mobile: String,
    pub licence: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

impl ContactEdit {
    pub fn from_booking(booking: &BookingResponse) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            mobile: text(&booking.mobile_number),
            licence: text(&booking.driving_license_number),
            address: text(&booking.address_line1),
            city: text(&booking.city),
            pincode: text(&booking.pincode),
        }
    }

    /// Overlay the edit on the stored profile. The phone number mirrors the mobile.
    pub fn apply(&self, mut customer: Customer) -> Customer {
        let optional = |s: &str| Some(s.trim().to_owned()).filter(|s| !s.is_empty());
        customer.mobile_number = self.mobile.trim().to_owned();
        customer.phone_number = optional(&self.mobile);
        customer.driving_license_number = self.licence.trim().to_owned();
        customer.address_line1 = self.address.trim().to_owned();
        customer.city = optional(&self.city);
        customer.pincode = optional(&self.pincode);
        customer
    }
}

/// Booking id typed into the lookup box.
pub fn parse_booking_id(raw: &str) -> Option<i64> {
    raw.trim().trim_start_matches('#').parse::<i64>().ok().filter(|id| *id > 0)
}

// =============================================================================
// ON-SPOT BOOKING
// =============================================================================

pub const ON_SPOT_HANDOVER_NOTE: &str = "On-Spot Booking - Auto Handover";

/// Walk-in rental taken at the counter. Pickup and return are both the
/// desk's own hub, and the car leaves with a full tank as soon as the
/// booking exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OnSpotBooking {
    pub start_date: String,
    pub end_date: String,
    pub car: Option<Car>,
    pub add_ons: AddOnSelection,
}

impl OnSpotBooking {
    /// A one-day rental starting `today`.
    pub fn starting(today: NaiveDate) -> Self {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self {
            start_date: today.format("%Y-%m-%d").to_string(),
            end_date: tomorrow.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// The notice shown when the dates cannot be searched.
    pub fn check_dates(&self, today: NaiveDate) -> Result<(), Notice> {
        validate_search_dates(&self.start_date, &self.end_date, today)
            .map_err(|err| Notice::warning(err.title(), err.to_string()))
    }

    /// Changing dates invalidates the car picked for the old range.
    pub fn set_dates(&mut self, start: Option<String>, end: Option<String>) {
        if let Some(start) = start {
            self.start_date = start;
        }
        if let Some(end) = end {
            self.end_date = end;
        }
        self.car = None;
    }

    pub fn days(&self) -> i64 {
        rental_days_from_input(&self.start_date, &self.end_date)
    }

    /// Price of the picked car plus add-ons; `None` until a car is picked.
    pub fn quote(&self, add_ons: &[AddOn]) -> Option<Quote> {
        let car = self.car.as_ref()?;
        let rate = car.car_type.as_ref().map_or(0.0, |t| t.daily_rate);
        Some(quote(rate, self.days(), add_ons, &self.add_ons))
    }

    /// # Errors
    ///
    /// The notice shown when no car is picked, the customer record has not
    /// been saved yet, or the dates are out of order.
    pub fn booking_request(
        &self,
        hub_id: i64,
        customer: &Customer,
        add_ons: &[AddOn],
        today: NaiveDate,
    ) -> Result<BookingRequest, Notice> {
        self.check_dates(today)?;
        let Some(car) = self.car.as_ref() else {
            return Err(Notice::warning("No vehicle", "Pick an available vehicle first."));
        };
        let Some(customer_id) = customer.cust_id.filter(|id| *id > 0) else {
            return Err(Notice::danger("Booking Failed", "Invalid Customer ID"));
        };
        Ok(BookingRequest {
            car_id: car.car_id,
            customer_id,
            pickup_hub_id: hub_id,
            return_hub_id: hub_id,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            add_on_ids: expand_add_on_ids(add_ons, &self.add_ons),
            email: Some(customer.email.trim().to_owned()).filter(|e| !e.is_empty()),
            car_type_id: car.car_type_id.or_else(|| car.car_type.as_ref().map(|t| t.car_type_id)).filter(|id| *id > 0),
        })
    }
}

/// Handover sent straight after an on-spot booking is created.
pub fn auto_handover(booking: &BookingResponse, car_id: i64) -> HandoverRequest {
    HandoverRequest {
        booking_id: booking.booking_id,
        car_id: Some(car_id),
        fuel_status: Some(FuelLevel::Full),
        notes: Some(ON_SPOT_HANDOVER_NOTE.to_owned()),
        start_date: None,
        end_date: None,
    }
}

/// Success line naming the confirmation the customer takes away.
pub fn on_spot_done(booking: &BookingResponse) -> Notice {
    let confirmation = booking.confirmation_number.clone().unwrap_or_else(|| format!("#{}", booking.booking_id));
    Notice::success("Handed over", format!("Booking Created and Handed Over! Confirmation: {confirmation}"))
}
