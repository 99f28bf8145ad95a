//! Same-origin backend proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client calls `/backend/<api path>` on this server. The request is
//! forwarded to the active backend with its method, query, body, and a small
//! allow-list of headers. Responses come back with their status, body, and
//! the headers the client reads (content type, and the disposition used for
//! invoice downloads).
//!
//! ERROR HANDLING
//! ==============
//! No reachable backend answers 503 with a JSON `message`, which the client
//! shows verbatim. A connect or timeout failure against the active backend
//! invalidates it and answers 502; the next request re-probes.

use axum::body::{Body, Bytes};
use axum::extract::{OriginalUri, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

pub const NO_BACKEND_MESSAGE: &str = "No backend is reachable. Please try again shortly.";

/// Where the proxy is mounted on this server.
pub const MOUNT: &str = "/backend/";

/// Request headers copied upstream.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the client.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::CONTENT_DISPOSITION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("No backend is reachable. Please try again shortly.")]
    NoBackend,
    #[error("backend request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoBackend => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// The API path as the client encoded it, without the mount prefix.
///
/// Taken from the raw request path so percent-escapes in ids and emails
/// (`%23`, `%2F`, `%40`) reach the backend unchanged.
#[must_use]
pub fn upstream_path(request_path: &str) -> &str {
    request_path.strip_prefix(MOUNT).unwrap_or(request_path)
}

/// `{base}/{path}[?query]`.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Copy the allow-listed headers from `from`.
#[must_use]
pub fn filter_headers(from: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        if let Some(value) = from.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.selector.resolve().await.ok_or(ProxyError::NoBackend)?;
    let url = upstream_url(&base, upstream_path(uri.path()), query.as_deref());

    let mut request = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            if e.is_connect() || e.is_timeout() {
                state.selector.invalidate(&base).await;
            }
            tracing::warn!(%method, %url, error = %e, "proxy request failed");
            return Err(ProxyError::Upstream(e.to_string()));
        }
    };

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    tracing::debug!(%method, %url, %status, len = bytes.len(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
