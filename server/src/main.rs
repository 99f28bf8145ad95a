#![recursion_limit = "256"]

mod backend;
mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(backends = ?config.backends, probe = %config.probe_path, "backend candidates");

    let state = match state::AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "http client init failed");
            std::process::exit(1);
        }
    };

    // Log backend switches for operators.
    let mut changes = state.selector.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            match changes.borrow_and_update().clone() {
                Some(url) => tracing::info!(backend = %url, "active backend changed"),
                None => tracing::warn!("no active backend"),
            }
        }
    });

    // Warm the selector so the first page load does not pay for the probe.
    let warm = state.selector.clone();
    tokio::spawn(async move {
        warm.resolve().await;
    });

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "indiadrive listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
