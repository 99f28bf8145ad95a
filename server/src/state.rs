//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the backend selector shared by every proxied
//! request, and one pooled HTTP client for upstream calls.

use std::sync::Arc;

use crate::backend::{BackendProbe, BackendSelector, HttpProbe};
use crate::config::ServerConfig;

/// Clone is required by Axum; every field is Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub selector: Arc<BackendSelector>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with the real HTTP probe.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        let probe: Arc<dyn BackendProbe> =
            Arc::new(HttpProbe::new(http.clone(), config.probe_path.clone(), config.probe_timeout));
        Ok(Self::with_probe(config, http, probe))
    }

    #[must_use]
    pub fn with_probe(config: ServerConfig, http: reqwest::Client, probe: Arc<dyn BackendProbe>) -> Self {
        let selector = Arc::new(BackendSelector::new(config.backends.clone(), probe));
        Self { config: Arc::new(config), selector, http }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
