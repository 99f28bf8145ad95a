//! Read-through booking cache.
//!
//! DESIGN
//! ======
//! The backend is the only source of truth. Every successful response is
//! written through to the cache (keyed by booking id, never duplicated) and
//! returned as [`Freshness::Live`]. When a call fails transiently the cached
//! copy is returned instead, marked [`Freshness::Cached`] with the time it was
//! recorded so the UI can say so. Authoritative negatives (404) evict.
//!
//! Storage is abstracted behind [`KeyValueStore`] so the browser can back it
//! with `sessionStorage` while tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::BookingResponse;

pub const CACHE_KEY: &str = "myBookings";

/// String key/value storage with browser-storage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedBooking {
    pub booking: BookingResponse,
    #[serde(default)]
    pub car_name: Option<String>,
    /// Identity (email or username) of the session that recorded the entry.
    #[serde(default)]
    pub owner: Option<String>,
    pub cached_at_ms: i64,
}

impl CachedBooking {
    fn belongs_to(&self, identity: &str) -> bool {
        let matches = |v: Option<&str>| v.is_some_and(|v| v.eq_ignore_ascii_case(identity));
        matches(self.owner.as_deref()) || matches(self.booking.email.as_deref())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    Live,
    /// Served from cache; `cached_at_ms` is the oldest entry's write time.
    Cached { cached_at_ms: i64 },
}

impl Freshness {
    #[must_use]
    pub fn is_stale(self) -> bool {
        matches!(self, Self::Cached { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub freshness: Freshness,
}

// =============================================================================
// CACHE
// =============================================================================

pub struct BookingCache<S> {
    store: S,
}

impl<S: KeyValueStore> BookingCache<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All entries. An unreadable payload reads as empty.
    #[must_use]
    pub fn entries(&self) -> Vec<CachedBooking> {
        self.store
            .get(CACHE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write(&self, entries: &[CachedBooking]) {
        match serde_json::to_string(entries) {
            Ok(raw) => self.store.set(CACHE_KEY, &raw),
            Err(_) => self.store.remove(CACHE_KEY),
        }
    }

    #[must_use]
    pub fn get(&self, booking_id: i64) -> Option<CachedBooking> {
        self.entries().into_iter().find(|e| e.booking.booking_id == booking_id)
    }

    #[must_use]
    pub fn for_user(&self, identity: &str) -> Vec<CachedBooking> {
        self.entries().into_iter().filter(|e| e.belongs_to(identity)).collect()
    }

    /// Insert or replace by booking id. A `None` car name keeps the one
    /// already recorded.
    pub fn record(&self, booking: &BookingResponse, car_name: Option<&str>, owner: Option<&str>, now_ms: i64) {
        let mut entries = self.entries();
        let existing = entries.iter().position(|e| e.booking.booking_id == booking.booking_id);
        let previous = existing.map(|i| entries.remove(i));
        let car_name = car_name
            .map(str::to_owned)
            .or_else(|| booking.car_name.clone())
            .or_else(|| previous.as_ref().and_then(|p| p.car_name.clone()));
        let owner = owner.map(str::to_owned).or_else(|| previous.and_then(|p| p.owner));
        entries.push(CachedBooking { booking: booking.clone(), car_name, owner, cached_at_ms: now_ms });
        self.write(&entries);
    }

    pub fn evict(&self, booking_id: i64) {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|e| e.booking.booking_id != booking_id);
        if entries.len() != before {
            self.write(&entries);
        }
    }

    pub fn clear(&self) {
        self.store.remove(CACHE_KEY);
    }

    /// Settle a single-booking fetch against the cache.
    ///
    /// # Errors
    ///
    /// The original error when it is not transient or nothing is cached.
    pub fn resolve_one(
        &self,
        result: Result<BookingResponse, ApiError>,
        booking_id: i64,
        now_ms: i64,
    ) -> Result<Resolved<BookingResponse>, ApiError> {
        match result {
            Ok(booking) => {
                self.record(&booking, None, None, now_ms);
                Ok(Resolved { value: booking, freshness: Freshness::Live })
            }
            Err(err) if err.is_transient() => match self.get(booking_id) {
                Some(entry) => Ok(Resolved {
                    value: entry.booking,
                    freshness: Freshness::Cached { cached_at_ms: entry.cached_at_ms },
                }),
                None => Err(err),
            },
            Err(err) => {
                if err.is_not_found() {
                    self.evict(booking_id);
                }
                Err(err)
            }
        }
    }

    /// Settle a user's booking list against the cache. Success replaces the
    /// user's entries outright, dropping any the server no longer returns.
    ///
    /// # Errors
    ///
    /// The original error when it is not transient or nothing is cached.
    pub fn resolve_for_user(
        &self,
        result: Result<Vec<BookingResponse>, ApiError>,
        identity: &str,
        now_ms: i64,
    ) -> Result<Resolved<Vec<BookingResponse>>, ApiError> {
        match result {
            Ok(bookings) => {
                let mut entries = self.entries();
                let previous: HashMap<i64, CachedBooking> = entries
                    .iter()
                    .filter(|e| e.belongs_to(identity))
                    .map(|e| (e.booking.booking_id, e.clone()))
                    .collect();
                entries.retain(|e| !e.belongs_to(identity) && !bookings.iter().any(|b| b.booking_id == e.booking.booking_id));
                for booking in &bookings {
                    let car_name = booking
                        .car_name
                        .clone()
                        .or_else(|| previous.get(&booking.booking_id).and_then(|p| p.car_name.clone()));
                    entries.push(CachedBooking {
                        booking: booking.clone(),
                        car_name,
                        owner: Some(identity.to_owned()),
                        cached_at_ms: now_ms,
                    });
                }
                self.write(&entries);
                Ok(Resolved { value: bookings, freshness: Freshness::Live })
            }
            Err(err) if err.is_transient() => {
                let cached = self.for_user(identity);
                let Some(oldest) = cached.iter().map(|e| e.cached_at_ms).min() else {
                    return Err(err);
                };
                Ok(Resolved {
                    value: cached.into_iter().map(|e| e.booking).collect(),
                    freshness: Freshness::Cached { cached_at_ms: oldest },
                })
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
