use std::sync::Arc;

use super::*;
use crate::backend::BackendProbe;
use crate::state::test_helpers::test_app_state_with_probe;

struct OnlyJava;

#[async_trait::async_trait]
impl BackendProbe for OnlyJava {
    async fn is_alive(&self, base_url: &str) -> bool {
        base_url.ends_with(":5087")
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn backend_status_probes_and_reports() {
    let state = test_app_state_with_probe(&["http://localhost:5086", "http://localhost:5087"], Arc::new(OnlyJava));

    let Json(status) = backend_status(State(state)).await;
    assert_eq!(status.active.as_deref(), Some("http://localhost:5087"));
    assert_eq!(status.candidates.len(), 2);
}
