//! Browser storage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in `sessionStorage["user"]`, the booking cache in
//! `sessionStorage["myBookings"]`, and the theme in `localStorage["theme"]`.
//! These helpers centralize hydrate-only web-sys glue so state modules and
//! pages never touch `window` directly. During SSR every read is empty and
//! every write is dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use booking::cache::{BookingCache, KeyValueStore};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Cleared when the tab closes.
    Session,
    /// Survives restarts.
    Local,
}

/// `KeyValueStore` over one of the browser storage areas.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    #[must_use]
    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    #[must_use]
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    #[must_use]
    pub fn area(self) -> StorageArea {
        self.area
    }

    #[cfg(feature = "hydrate")]
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            StorageArea::Session => window.session_storage().ok().flatten(),
            StorageArea::Local => window.local_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("storage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    serde_json::from_str(&store.get(key)?).ok()
}

/// Save a JSON value under `key`. Unserializable values are dropped.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.set(key, &raw);
    }
}

/// The tab's booking cache.
#[must_use]
pub fn booking_cache() -> BookingCache<BrowserStore> {
    BookingCache::new(BrowserStore::session())
}
