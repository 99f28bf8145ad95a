//! List filters for the back-office screens.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dates::parse_date;
use crate::types::{BookingResponse, BookingStatus, FleetCar, HubFleet};

// =============================================================================
// STATUS FILTERS
// =============================================================================

/// Status tabs on the all-bookings screen. "Active" means not yet handed over
/// or closed: confirmed or allotted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminStatusFilter {
    #[default]
    All,
    Active,
    Completed,
    Cancelled,
}

impl AdminStatusFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    #[must_use]
    pub fn matches(self, status: &BookingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => matches!(status, BookingStatus::Confirmed | BookingStatus::Allotted),
            Self::Completed => *status == BookingStatus::Completed,
            Self::Cancelled => *status == BookingStatus::Cancelled,
        }
    }
}

/// Status tabs on the hub bookings screen: everything, or one exact status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HubStatusFilter {
    #[default]
    All,
    Exact(BookingStatus),
}

impl HubStatusFilter {
    /// Tabs in display order.
    #[must_use]
    pub fn tabs() -> Vec<Self> {
        let mut tabs = vec![Self::All];
        tabs.extend(
            [BookingStatus::Confirmed, BookingStatus::Active, BookingStatus::Completed, BookingStatus::Cancelled]
                .into_iter()
                .map(Self::Exact),
        );
        tabs
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Exact(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, status: &BookingStatus) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => wanted == status,
        }
    }
}

// =============================================================================
// DATE RANGE
// =============================================================================

/// Inclusive calendar window. A booking is excluded when it starts before
/// `from` or ends after `to`; bookings with unparseable dates are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub fn from_inputs(from: &str, to: &str) -> Self {
        Self { from: parse_date(from), to: parse_date(to) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    #[must_use]
    pub fn contains(&self, booking: &BookingResponse) -> bool {
        let start = booking.start_date.as_deref().and_then(parse_date);
        let end = booking.end_date.as_deref().and_then(parse_date);
        if let (Some(from), Some(start)) = (self.from, start) {
            if start < from {
                return false;
            }
        }
        if let (Some(to), Some(end)) = (self.to, end) {
            if end > to {
                return false;
            }
        }
        true
    }
}

#[must_use]
pub fn filter_admin_bookings<'a>(
    bookings: &'a [BookingResponse],
    status: AdminStatusFilter,
    range: DateRange,
) -> Vec<&'a BookingResponse> {
    bookings
        .iter()
        .filter(|b| status.matches(&b.booking_status) && range.contains(b))
        .collect()
}

#[must_use]
pub fn filter_hub_bookings<'a>(bookings: &'a [BookingResponse], status: &HubStatusFilter) -> Vec<&'a BookingResponse> {
    bookings.iter().filter(|b| status.matches(&b.booking_status)).collect()
}

/// Headline counts for the all-bookings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[must_use]
pub fn count_bookings(bookings: &[BookingResponse]) -> BookingCounts {
    let count = |f: AdminStatusFilter| bookings.iter().filter(|b| f.matches(&b.booking_status)).count();
    BookingCounts {
        total: bookings.len(),
        active: count(AdminStatusFilter::Active),
        completed: count(AdminStatusFilter::Completed),
        cancelled: count(AdminStatusFilter::Cancelled),
    }
}

// =============================================================================
// FLEET
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FleetStatus {
    #[default]
    All,
    Available,
    Rented,
    Maintenance,
}

impl FleetStatus {
    pub const ALL: [Self; 4] = [Self::All, Self::Available, Self::Rented, Self::Maintenance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Maintenance => "Maintenance",
        }
    }

    #[must_use]
    pub fn matches(self, car_status: &str) -> bool {
        self == Self::All || car_status == self.label()
    }

    /// Whether a hub has any car in this status according to its counters.
    #[must_use]
    pub fn hub_has_any(self, hub: &HubFleet) -> bool {
        match self {
            Self::All => true,
            Self::Available => hub.available_cars > 0,
            Self::Rented => hub.rented_cars > 0,
            Self::Maintenance => hub.maintenance_cars > 0,
        }
    }
}

/// Cars matching a case-insensitive model/registration search and a status.
#[must_use]
pub fn filter_fleet_cars<'a>(cars: &'a [FleetCar], search: &str, status: FleetStatus) -> Vec<&'a FleetCar> {
    let needle = search.trim().to_lowercase();
    cars.iter()
        .filter(|car| {
            needle.is_empty()
                || car.model.to_lowercase().contains(&needle)
                || car.registration_number.to_lowercase().contains(&needle)
        })
        .filter(|car| status.matches(&car.status))
        .collect()
}

/// One hub section on the fleet screen after filtering.
#[derive(Debug, PartialEq)]
pub struct FleetSection<'a> {
    pub hub: &'a HubFleet,
    pub cars: Vec<&'a FleetCar>,
}

/// Hubs to show: hubs without any car in the chosen status are hidden, as are
/// hubs with no search hits while a search is active.
#[must_use]
pub fn fleet_sections<'a>(hubs: &'a [HubFleet], search: &str, status: FleetStatus) -> Vec<FleetSection<'a>> {
    let searching = !search.trim().is_empty();
    hubs.iter()
        .filter(|hub| status.hub_has_any(hub))
        .map(|hub| FleetSection { hub, cars: filter_fleet_cars(&hub.cars, search, status) })
        .filter(|section| !(searching && section.cars.is_empty()))
        .collect()
}

/// Hubs expanded on first render: those with at least one car.
#[must_use]
pub fn default_expanded(hubs: &[HubFleet]) -> BTreeSet<i64> {
    hubs.iter().filter(|h| !h.cars.is_empty()).map(|h| h.hub_id).collect()
}

// =============================================================================
// BADGES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    /// Modifier used by the `badge--*` CSS classes.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

#[must_use]
pub fn status_tone(status: &BookingStatus) -> Tone {
    match status {
        BookingStatus::Confirmed => Tone::Success,
        BookingStatus::Allotted | BookingStatus::Active => Tone::Info,
        BookingStatus::Completed => Tone::Neutral,
        BookingStatus::Cancelled => Tone::Danger,
        BookingStatus::Other(_) => Tone::Warning,
    }
}

#[must_use]
pub fn fleet_tone(car_status: &str) -> Tone {
    match car_status {
        "Available" => Tone::Success,
        "Rented" => Tone::Info,
        "Maintenance" => Tone::Warning,
        _ => Tone::Neutral,
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
