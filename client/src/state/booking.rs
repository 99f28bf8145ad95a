//! Customer booking flow state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard spans the `/booking`, `/select-hub`, and `/select-car` routes.
//! One [`BookingFlow`] lives in context for the whole app so navigating
//! between those routes keeps the wizard, the loaded add-on catalogue, and
//! the in-progress customer form.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use booking::pricing::Quote;
use booking::validate::FieldErrors;
use booking::wizard::{Location, SearchCriteria, SelectedCar, Step, WizardError};
use booking::{AddOn, Car, CarType, Customer, Hub, Wizard};
use chrono::NaiveDate;

use crate::state::ui::Notice;

#[derive(Clone, Debug, Default)]
pub struct BookingFlow {
    pub wizard: Wizard,
    /// Add-on catalogue, loaded once per flow.
    pub add_ons: Vec<AddOn>,
    /// Driver details as typed; becomes the wizard's customer once saved.
    pub draft: Customer,
    pub errors: FieldErrors,
}

impl BookingFlow {
    pub fn quote(&self) -> Option<Quote> {
        self.wizard.quote(&self.add_ons)
    }

    /// Start a new booking, keeping the add-on catalogue.
    pub fn restart(&mut self) {
        let add_ons = std::mem::take(&mut self.add_ons);
        *self = Self { add_ons, ..Self::default() };
    }

    /// Move the wizard back to `step`. Returns the notice to show when the
    /// move is refused; the wizard then stays where it was.
    pub fn rewind(&mut self, step: Step, today: NaiveDate) -> Option<Notice> {
        self.wizard.go_to(step, today).err().map(|err| wizard_notice(&err))
    }
}

/// Notice explaining why the wizard refused a move.
pub fn wizard_notice(err: &WizardError) -> Notice {
    match err {
        WizardError::Search(search) => Notice::warning(search.title(), search.to_string()),
        WizardError::CustomerInvalid(_) => Notice::warning("Check your details", err.to_string()),
        WizardError::AlreadyConfirmed => Notice::info("Booking confirmed", err.to_string()),
        _ => Notice::warning("Booking incomplete", err.to_string()),
    }
}

/// Driver form contents after looking up `email`: a stored profile wins,
/// otherwise the draft keeps what was typed under that email.
pub fn prefill_draft(draft: &Customer, found: Option<Customer>, email: &str) -> Customer {
    match found {
        Some(customer) => customer.normalized_for_form(),
        None if draft.email.is_empty() && draft.first_name.is_empty() => Customer::blank(email),
        None => Customer { email: email.to_owned(), ..draft.clone() },
    }
}

/// `?hubId=&carId=` from a "Book now" link on the fleet page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeepLink {
    pub hub_id: i64,
    pub car_id: i64,
}

impl DeepLink {
    /// Both ids must be present and numeric.
    pub fn parse(hub_id: Option<&str>, car_id: Option<&str>) -> Option<Self> {
        let hub_id = hub_id?.trim().parse().ok()?;
        let car_id = car_id?.trim().parse().ok()?;
        Some(Self { hub_id, car_id })
    }

    /// Search criteria anchored at `hub`'s own city. `None` when the hub
    /// record does not say where it is.
    pub fn criteria(hub: &Hub, pickup: &str, return_at: &str) -> Option<SearchCriteria> {
        let state_id = hub.state_id.filter(|id| *id > 0)?;
        Some(SearchCriteria {
            pickup: pickup.to_owned(),
            return_at: return_at.to_owned(),
            different_return: false,
            location: Location::City { state_id, state_name: String::new(), city_id: hub.city_id, city_name: None },
        })
    }

    /// The linked car, if it is still available for the searched dates.
    pub fn find_car(self, available: &[Car], car_types: &[CarType]) -> Option<SelectedCar> {
        let car = available.iter().find(|c| c.car_id == self.car_id)?;
        let car_type = car.car_type.clone().or_else(|| {
            let type_id = car.car_type_id?;
            car_types.iter().find(|t| t.car_type_id == type_id).cloned()
        })?;
        Some(SelectedCar::from_car(car, &car_type))
    }
}

/// Route that renders `step`.
pub fn step_path(step: Step) -> &'static str {
    match step {
        Step::Hub => "/select-hub",
        Step::Car => "/select-car",
        Step::Search | Step::Details | Step::Review | Step::Confirmed => "/booking",
    }
}

/// Steps shown in the progress indicator, with their numbers.
pub fn indicator_steps() -> [(u8, &'static str); 4] {
    [
        (Step::Hub.number(), Step::Hub.label()),
        (Step::Car.number(), Step::Car.label()),
        (Step::Details.number(), Step::Details.label()),
        (Step::Review.number(), Step::Review.label()),
    ]
}
