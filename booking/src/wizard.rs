//! Booking wizard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The customer flow spans several pages: search (dates + location), hub
//! selection, car selection, driver details, review, confirmation. The client
//! keeps one [`Wizard`] in context and every page drives it through the
//! transition methods below.
//!
//! DESIGN
//! ======
//! Each step has an entry guard that re-checks all upstream data, including
//! re-validating the search dates against the current day. Any move into a
//! step (forward, backward, or a direct jump) goes through the guard, so a
//! stale search left open overnight cannot reach review. Changing an upstream
//! choice clears what depended on it: a new search drops the hub and car, a new
//! hub drops the car.

use chrono::NaiveDate;

use crate::dates::rental_days_from_input;
use crate::pricing::{AddOnSelection, Quote, expand_add_on_ids, quote};
use crate::types::{AddOn, BookingRequest, BookingResponse, Car, CarType, City, Customer, Hub, StateRecord};
use crate::validate::{FieldErrors, SearchError, validate_customer, validate_search_dates};

// =============================================================================
// STEPS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Search,
    Hub,
    Car,
    Details,
    Review,
    Confirmed,
}

impl Step {
    /// Number shown in the progress indicator. Search and hub share step 1.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Search | Self::Hub => 1,
            Self::Car => 2,
            Self::Details => 3,
            Self::Review | Self::Confirmed => 4,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Search | Self::Hub => "Location",
            Self::Car => "Vehicle",
            Self::Details => "Details",
            Self::Review => "Review",
            Self::Confirmed => "Confirmed",
        }
    }

    /// Step reached by "back". Search and confirmed have none.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Search | Self::Confirmed => None,
            Self::Hub => Some(Self::Search),
            Self::Car => Some(Self::Hub),
            Self::Details => Some(Self::Car),
            Self::Review => Some(Self::Details),
        }
    }
}

// =============================================================================
// CHOICES
// =============================================================================

/// Where the customer wants to pick up.
#[derive(Clone, Debug, PartialEq)]
pub enum Location {
    City { state_id: i64, state_name: String, city_id: Option<i64>, city_name: Option<String> },
    Airport { code: String, hubs: Vec<Hub> },
}

impl Location {
    /// City search from the dropdowns. A city is required whenever the chosen
    /// state has any.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingLocation`] when the state, or a required city, is unset.
    pub fn from_city(state: Option<&StateRecord>, city: Option<&City>, cities: &[City]) -> Result<Self, SearchError> {
        let state = state.ok_or(SearchError::MissingLocation)?;
        if city.is_none() && !cities.is_empty() {
            return Err(SearchError::MissingLocation);
        }
        Ok(Self::City {
            state_id: state.state_id,
            state_name: state.state_name.clone(),
            city_id: city.map(|c| c.city_id),
            city_name: city.map(|c| c.city_name.clone()),
        })
    }

    /// Airport search with the hubs the backend returned for `code`.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingAirportCode`] when `code` is blank.
    pub fn from_airport(code: &str, hubs: Vec<Hub>) -> Result<Self, SearchError> {
        let code = code.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(SearchError::MissingAirportCode);
        }
        Ok(Self::Airport { code, hubs })
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::City { state_name, city_name: Some(city), .. } => format!("{city}, {state_name}"),
            Self::City { state_name, .. } => state_name.clone(),
            Self::Airport { code, .. } => format!("{code} airport"),
        }
    }

    fn check(&self) -> Result<(), SearchError> {
        match self {
            Self::City { state_id, .. } if *state_id <= 0 => Err(SearchError::MissingLocation),
            Self::Airport { code, .. } if code.trim().is_empty() => Err(SearchError::MissingAirportCode),
            _ => Ok(()),
        }
    }
}

/// Dates and location from the search step.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCriteria {
    pub pickup: String,
    pub return_at: String,
    pub different_return: bool,
    pub location: Location,
}

impl SearchCriteria {
    /// # Errors
    ///
    /// The first date or location rule broken on `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), SearchError> {
        validate_search_dates(&self.pickup, &self.return_at, today)?;
        self.location.check()
    }

    #[must_use]
    pub fn rental_days(&self) -> i64 {
        rental_days_from_input(&self.pickup, &self.return_at)
    }
}

/// The vehicle the customer settled on. Booking by category uses car id 0 and
/// lets the backend allot a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedCar {
    pub car_id: i64,
    pub model: String,
    pub car_type: CarType,
}

impl SelectedCar {
    #[must_use]
    pub fn from_car_type(car_type: &CarType) -> Self {
        Self { car_id: 0, model: car_type.car_type_name.clone(), car_type: car_type.clone() }
    }

    #[must_use]
    pub fn from_car(car: &Car, car_type: &CarType) -> Self {
        Self { car_id: car.car_id, model: car.label(), car_type: car_type.clone() }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{0}")]
    Search(#[from] SearchError),
    #[error("Please search for a location and dates first.")]
    NoSearch,
    #[error("Please select a pickup hub.")]
    NoHub,
    #[error("Please select a car.")]
    NoCar,
    #[error("Please save your details before reviewing the booking.")]
    CustomerNotSaved,
    #[error("Some of your details need attention.")]
    CustomerInvalid(FieldErrors),
    #[error("The booking can only be confirmed from the review step.")]
    NotReviewing,
    #[error("This booking is already confirmed. Start a new booking to continue.")]
    AlreadyConfirmed,
}

// =============================================================================
// WIZARD
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    step: Step,
    search: Option<SearchCriteria>,
    hub: Option<Hub>,
    car: Option<SelectedCar>,
    add_ons: AddOnSelection,
    customer: Option<Customer>,
    confirmation: Option<BookingResponse>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Search,
            search: None,
            hub: None,
            car: None,
            add_ons: AddOnSelection::default(),
            customer: None,
            confirmation: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn search(&self) -> Option<&SearchCriteria> {
        self.search.as_ref()
    }

    #[must_use]
    pub fn hub(&self) -> Option<&Hub> {
        self.hub.as_ref()
    }

    #[must_use]
    pub fn car(&self) -> Option<&SelectedCar> {
        self.car.as_ref()
    }

    #[must_use]
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    #[must_use]
    pub fn add_ons(&self) -> &AddOnSelection {
        &self.add_ons
    }

    pub fn add_ons_mut(&mut self) -> &mut AddOnSelection {
        &mut self.add_ons
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&BookingResponse> {
        self.confirmation.as_ref()
    }

    /// Re-check everything `step` depends on.
    ///
    /// # Errors
    ///
    /// The first missing or no-longer-valid upstream choice.
    pub fn entry_guard(&self, step: Step, today: NaiveDate) -> Result<(), WizardError> {
        if step == Step::Search {
            return Ok(());
        }
        if step == Step::Confirmed {
            return if self.confirmation.is_some() { Ok(()) } else { Err(WizardError::NotReviewing) };
        }
        if self.confirmation.is_some() {
            return Err(WizardError::AlreadyConfirmed);
        }

        let search = self.search.as_ref().ok_or(WizardError::NoSearch)?;
        search.validate(today)?;
        if step == Step::Hub {
            return Ok(());
        }

        if self.hub.is_none() {
            return Err(WizardError::NoHub);
        }
        if step == Step::Car {
            return Ok(());
        }

        if self.car.is_none() {
            return Err(WizardError::NoCar);
        }
        if step == Step::Details {
            return Ok(());
        }

        let customer = self.customer.as_ref().filter(|c| c.cust_id.is_some()).ok_or(WizardError::CustomerNotSaved)?;
        validate_customer(customer, today).into_result().map_err(WizardError::CustomerInvalid)
    }

    /// Move to `step` if its entry guard passes; otherwise stay put.
    ///
    /// # Errors
    ///
    /// The guard failure. The current step is unchanged.
    pub fn go_to(&mut self, step: Step, today: NaiveDate) -> Result<(), WizardError> {
        self.entry_guard(step, today)?;
        self.step = step;
        Ok(())
    }

    /// One step back, guarded like any other entry.
    ///
    /// # Errors
    ///
    /// [`WizardError::AlreadyConfirmed`] after confirmation, or a guard failure.
    pub fn back(&mut self, today: NaiveDate) -> Result<Step, WizardError> {
        let Some(previous) = self.step.previous() else {
            return if self.step == Step::Confirmed { Err(WizardError::AlreadyConfirmed) } else { Ok(self.step) };
        };
        self.go_to(previous, today)?;
        Ok(previous)
    }

    /// Accept a new search and advance to hub selection. Drops any hub and
    /// car chosen for the previous search.
    ///
    /// # Errors
    ///
    /// The search rule that failed, or [`WizardError::AlreadyConfirmed`].
    pub fn submit_search(&mut self, criteria: SearchCriteria, today: NaiveDate) -> Result<(), WizardError> {
        if self.confirmation.is_some() {
            return Err(WizardError::AlreadyConfirmed);
        }
        criteria.validate(today)?;
        self.search = Some(criteria);
        self.hub = None;
        self.car = None;
        self.step = Step::Hub;
        Ok(())
    }

    /// Pick the pickup hub and advance to car selection. Drops a previously
    /// chosen car when the hub changes.
    ///
    /// # Errors
    ///
    /// Guard failure for the hub step.
    pub fn select_hub(&mut self, hub: Hub, today: NaiveDate) -> Result<(), WizardError> {
        self.entry_guard(Step::Hub, today)?;
        if self.hub.as_ref().map(|h| h.hub_id) != Some(hub.hub_id) {
            self.car = None;
        }
        self.hub = Some(hub);
        self.step = Step::Car;
        Ok(())
    }

    /// Pick the car and advance to driver details.
    ///
    /// # Errors
    ///
    /// Guard failure for the car step.
    pub fn select_car(&mut self, car: SelectedCar, today: NaiveDate) -> Result<(), WizardError> {
        self.entry_guard(Step::Car, today)?;
        self.car = Some(car);
        self.step = Step::Details;
        Ok(())
    }

    /// Enter driver details directly with a search, hub, and car chosen
    /// elsewhere (a deep link from car selection). Nothing changes unless the
    /// whole combination passes the details guard.
    ///
    /// # Errors
    ///
    /// The first guard failure.
    pub fn resume(&mut self, criteria: SearchCriteria, hub: Hub, car: SelectedCar, today: NaiveDate) -> Result<(), WizardError> {
        let mut next = Self { add_ons: self.add_ons.clone(), ..Self::new() };
        next.search = Some(criteria);
        next.hub = Some(hub);
        next.car = Some(car);
        next.go_to(Step::Details, today)?;
        *self = next;
        Ok(())
    }

    /// Record the customer returned by the backend and advance to review.
    ///
    /// # Errors
    ///
    /// [`WizardError::CustomerNotSaved`] when the record carries no id, or a
    /// guard failure for the review step.
    pub fn customer_saved(&mut self, customer: Customer, today: NaiveDate) -> Result<(), WizardError> {
        self.entry_guard(Step::Details, today)?;
        if customer.cust_id.is_none() {
            return Err(WizardError::CustomerNotSaved);
        }
        self.customer = Some(customer);
        self.go_to(Step::Review, today)
    }

    /// Record the backend's confirmation. Only valid from review.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotReviewing`] from any other step.
    pub fn confirm(&mut self, response: BookingResponse) -> Result<(), WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::NotReviewing);
        }
        self.confirmation = Some(response);
        self.step = Step::Confirmed;
        Ok(())
    }

    /// Start over, keeping nothing.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Price the current car and add-ons over the searched dates.
    #[must_use]
    pub fn quote(&self, add_ons: &[AddOn]) -> Option<Quote> {
        let search = self.search.as_ref()?;
        let car = self.car.as_ref()?;
        Some(quote(car.car_type.daily_rate, search.rental_days(), add_ons, &self.add_ons))
    }

    /// Payload for `POST /booking/create`. Returns to the same hub it leaves from.
    ///
    /// # Errors
    ///
    /// [`WizardError::NotReviewing`] outside review, or a guard failure.
    pub fn booking_request(&self, add_ons: &[AddOn], today: NaiveDate) -> Result<BookingRequest, WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::NotReviewing);
        }
        self.entry_guard(Step::Review, today)?;
        let (Some(search), Some(hub), Some(car), Some(customer)) =
            (self.search.as_ref(), self.hub.as_ref(), self.car.as_ref(), self.customer.as_ref())
        else {
            return Err(WizardError::NotReviewing);
        };
        Ok(BookingRequest {
            car_id: car.car_id,
            customer_id: customer.cust_id.unwrap_or_default(),
            pickup_hub_id: hub.hub_id,
            return_hub_id: hub.hub_id,
            start_date: search.pickup.clone(),
            end_date: search.return_at.clone(),
            add_on_ids: expand_add_on_ids(add_ons, &self.add_ons),
            email: Some(customer.email.clone()).filter(|e| !e.is_empty()),
            car_type_id: Some(car.car_type.car_type_id).filter(|id| *id > 0),
        })
    }
}

#[cfg(test)]
#[path = "wizard_test.rs"]
mod tests;
