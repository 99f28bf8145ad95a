use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::{get, post};

use super::*;
use crate::backend::BackendProbe;
use crate::routes::api_routes;
use crate::state::test_helpers::{test_app_state, test_app_state_with_probe};

struct AlwaysAlive;

#[async_trait::async_trait]
impl BackendProbe for AlwaysAlive {
    async fn is_alive(&self, _base_url: &str) -> bool {
        true
    }
}

/// Serve a tiny stand-in backend on an ephemeral port.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/api/v1/hubs", get(|| async { Json(serde_json::json!([{ "hubId": 1 }])) }))
        .route(
            "/booking/create",
            post(|headers: HeaderMap, body: String| async move {
                let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or("");
                let cookie = headers.contains_key(header::COOKIE);
                Json(serde_json::json!({ "auth": auth, "cookie": cookie, "body": body }))
            }),
        )
        .route(
            "/api/v1/invoice/{id}",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "application/pdf"), (header::CONTENT_DISPOSITION, "attachment; filename=\"Invoice_7.pdf\"")],
                    "%PDF",
                )
            }),
        )
        .route("/api/v1/cars/available", get(|RawQuery(q): RawQuery| async move { q.unwrap_or_default() }))
        .route("/booking/user/{*identity}", get(|uri: Uri| async move { uri.path().to_owned() }))
        .route("/api/v1/customers/{*email}", get(|uri: Uri| async move { uri.path().to_owned() }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

fn backend_uri(path: &str) -> OriginalUri {
    OriginalUri(format!("{MOUNT}{path}").parse().unwrap())
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://h:1/", "/booking/all", None), "http://h:1/booking/all");
    assert_eq!(upstream_url("http://h:1", "api/v1/hubs", Some("")), "http://h:1/api/v1/hubs");
    assert_eq!(
        upstream_url("http://h:1", "api/v1/cars/available", Some("hubId=1&carTypeId=2")),
        "http://h:1/api/v1/cars/available?hubId=1&carTypeId=2"
    );
}

#[test]
fn upstream_path_keeps_escapes() {
    assert_eq!(upstream_path("/backend/booking/user/a%23b%40x.com"), "booking/user/a%23b%40x.com");
    assert_eq!(upstream_path("/backend/api/v1/customers/a%2Fb%3Fc%25d"), "api/v1/customers/a%2Fb%3Fc%25d");
    assert_eq!(upstream_path("/backend/booking/all"), "booking/all");
}

#[test]
fn only_allow_listed_headers_pass() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(out.len(), 1);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::NoBackend.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::Upstream("reset".into()).status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn no_backend_is_503_with_message() {
    let state = test_app_state(&["http://127.0.0.1:9"]);
    let resp = forward(
        State(state),
        backend_uri("api/v1/states"),
        RawQuery(None),
        Method::GET,
        HeaderMap::new(),
        Bytes::new(),
    )
    .await
    .unwrap_err()
    .into_response();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["message"], NO_BACKEND_MESSAGE);
}

#[tokio::test]
async fn forwards_body_and_authorization_only() {
    let base = spawn_upstream().await;
    let state = test_app_state(&[&base]);
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));

    let resp = forward(
        State(state),
        backend_uri("booking/create"),
        RawQuery(None),
        Method::POST,
        headers,
        Bytes::from_static(br#"{"carId":3}"#),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["auth"], "Bearer abc");
    assert_eq!(body["cookie"], false);
    assert_eq!(body["body"], r#"{"carId":3}"#);
}

#[tokio::test]
async fn passes_query_through() {
    let base = spawn_upstream().await;
    let state = test_app_state(&[&base]);

    let resp = forward(
        State(state),
        backend_uri("api/v1/cars/available"),
        RawQuery(Some("hubId=4&startDate=2024-06-20".into())),
        Method::GET,
        HeaderMap::new(),
        Bytes::new(),
    )
    .await
    .unwrap();

    assert_eq!(body_text(resp).await, "hubId=4&startDate=2024-06-20");
}

#[tokio::test]
async fn keeps_download_headers_and_upstream_status() {
    let base = spawn_upstream().await;
    let state = test_app_state(&[&base]);

    let resp = forward(
        State(state.clone()),
        backend_uri("api/v1/invoice/7"),
        RawQuery(None),
        Method::GET,
        HeaderMap::new(),
        Bytes::new(),
    )
    .await
    .unwrap();
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/pdf");
    assert!(resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str().unwrap().contains("Invoice_7.pdf"));

    let missing = forward(
        State(state),
        backend_uri("nope"),
        RawQuery(None),
        Method::GET,
        HeaderMap::new(),
        Bytes::new(),
    )
    .await
    .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn connect_failure_invalidates_backend() {
    let state = test_app_state_with_probe(&["http://127.0.0.1:9"], Arc::new(AlwaysAlive));

    let err = forward(
        State(state.clone()),
        backend_uri("booking/all"),
        RawQuery(None),
        Method::GET,
        HeaderMap::new(),
        Bytes::new(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(state.selector.active().await, None);
}

#[tokio::test]
async fn encoded_path_segments_reach_the_backend_unchanged() {
    let base = spawn_upstream().await;
    let app = api_routes(test_app_state(&[&base]));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let client = reqwest::Client::new();
    for path in ["/booking/user/a%23b%40x.com", "/api/v1/customers/a%2Fb%3Fc%25d%40x.com"] {
        let resp = client.get(format!("{host}/backend{path}")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "{path}");
        assert_eq!(resp.text().await.unwrap(), path);
    }
}
