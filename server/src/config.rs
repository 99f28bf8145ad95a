//! Host server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URLS: &str = "http://localhost:5086,http://localhost:5087";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("BACKEND_URLS lists no backends")]
    NoBackends,
    #[error("invalid backend url '{0}' (expected http:// or https://)")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URLs in preference order, without trailing slashes.
    pub backends: Vec<String>,
    pub probe_path: String,
    pub probe_timeout: Duration,
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URLS`: comma-separated, probed in order; default .NET then Java
    /// - `BACKEND_PROBE_PATH`: default `/api/v1/hubs`
    /// - `BACKEND_PROBE_TIMEOUT_MS`: default 2000
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MAX_UPLOAD_BYTES`: default 20 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a port number or `BACKEND_URLS`
    /// contains no usable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let backends = parse_backend_urls(
            &std::env::var("BACKEND_URLS").unwrap_or_else(|_| DEFAULT_BACKEND_URLS.to_owned()),
        )?;
        let probe_path = normalize_path(
            &std::env::var("BACKEND_PROBE_PATH").unwrap_or_else(|_| booking::endpoints::PROBE_PATH.to_owned()),
        );

        Ok(Self {
            port,
            backends,
            probe_path,
            probe_timeout: Duration::from_millis(env_parse("BACKEND_PROBE_TIMEOUT_MS", DEFAULT_PROBE_TIMEOUT_MS)),
            request_timeout: Duration::from_secs(env_parse("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Split, trim, and de-duplicate a comma-separated URL list, keeping order.
fn parse_backend_urls(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut urls: Vec<String> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !(part.starts_with("http://") || part.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(part.to_owned()));
        }
        let url = part.trim_end_matches('/').to_owned();
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    if urls.is_empty() {
        return Err(ConfigError::NoBackends);
    }
    Ok(urls)
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
