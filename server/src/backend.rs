//! Active backend discovery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two interchangeable backends (.NET and Java) serve the same API. The
//! browser never talks to them directly; every `/backend/*` request is
//! forwarded to whichever one this selector currently considers alive.
//!
//! DESIGN
//! ======
//! Candidates are probed in preference order with a cheap GET. The first
//! one that answers with a success status becomes active and stays active
//! until a forwarded request fails to connect, at which point it is
//! invalidated and the next request triggers a fresh probe round.
//!
//! Probe rounds are serialized by a mutex. A caller that waited on the mutex
//! while another round ran adopts that round's result instead of probing
//! again, so a burst of requests against a cold selector costs one round.
//! When nothing answers, the selector reports `None`; it never guesses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock, watch};

/// Liveness check for one backend base URL.
#[async_trait::async_trait]
pub trait BackendProbe: Send + Sync {
    async fn is_alive(&self, base_url: &str) -> bool;
}

/// Probe that issues `GET {base}{path}` and treats any 2xx as alive.
pub struct HttpProbe {
    http: reqwest::Client,
    path: String,
    timeout: Duration,
}

impl HttpProbe {
    #[must_use]
    pub fn new(http: reqwest::Client, path: impl Into<String>, timeout: Duration) -> Self {
        Self { http, path: path.into(), timeout }
    }
}

#[async_trait::async_trait]
impl BackendProbe for HttpProbe {
    async fn is_alive(&self, base_url: &str) -> bool {
        let url = format!("{base_url}{}", self.path);
        match self.http.get(&url).timeout(self.timeout).send().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                tracing::debug!(%url, status = %resp.status(), "backend probe rejected");
                false
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "backend probe failed");
                false
            }
        }
    }
}

/// Snapshot returned by `GET /backend-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendStatus {
    pub active: Option<String>,
    pub candidates: Vec<String>,
}

pub struct BackendSelector {
    candidates: Vec<String>,
    probe: Arc<dyn BackendProbe>,
    active: RwLock<Option<String>>,
    discovery: Mutex<()>,
    rounds: AtomicU64,
    changes: watch::Sender<Option<String>>,
}

impl BackendSelector {
    #[must_use]
    pub fn new(candidates: Vec<String>, probe: Arc<dyn BackendProbe>) -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            candidates,
            probe,
            active: RwLock::new(None),
            discovery: Mutex::new(()),
            rounds: AtomicU64::new(0),
            changes,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Current active backend without probing.
    pub async fn active(&self) -> Option<String> {
        self.active.read().await.clone()
    }

    /// Active backend, running a probe round first if none is known.
    pub async fn resolve(&self) -> Option<String> {
        if let Some(url) = self.active().await {
            return Some(url);
        }

        let seen = self.rounds.load(Ordering::Acquire);
        let _round = self.discovery.lock().await;
        if self.rounds.load(Ordering::Acquire) != seen {
            // A round finished while we waited; share its outcome.
            return self.active().await;
        }
        if let Some(url) = self.active().await {
            return Some(url);
        }

        let found = self.discover().await;
        self.publish(found.clone()).await;
        self.rounds.fetch_add(1, Ordering::AcqRel);
        found
    }

    /// Drop `failed` if it is still the active backend.
    pub async fn invalidate(&self, failed: &str) {
        let mut active = self.active.write().await;
        if active.as_deref() == Some(failed) {
            *active = None;
            drop(active);
            tracing::warn!(backend = %failed, "backend unreachable; will re-probe");
            self.changes.send_replace(None);
        }
    }

    /// Notified whenever the active backend changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.changes.subscribe()
    }

    pub async fn status(&self) -> BackendStatus {
        BackendStatus { active: self.active().await, candidates: self.candidates.clone() }
    }

    async fn discover(&self) -> Option<String> {
        for url in &self.candidates {
            if self.probe.is_alive(url).await {
                tracing::info!(backend = %url, "backend selected");
                return Some(url.clone());
            }
            tracing::warn!(backend = %url, "backend not responding");
        }
        tracing::error!(candidates = self.candidates.len(), "no backend reachable");
        None
    }

    async fn publish(&self, url: Option<String>) {
        *self.active.write().await = url.clone();
        self.changes.send_if_modified(|current| {
            if *current == url {
                false
            } else {
                *current = url;
                true
            }
        });
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
