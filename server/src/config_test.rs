use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const KEYS: [&str; 6] = [
    "PORT",
    "BACKEND_URLS",
    "BACKEND_PROBE_PATH",
    "BACKEND_PROBE_TIMEOUT_MS",
    "BACKEND_REQUEST_TIMEOUT_SECS",
    "MAX_UPLOAD_BYTES",
];

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment.
unsafe fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backends, vec!["http://localhost:5086", "http://localhost:5087"]);
    assert_eq!(cfg.probe_path, "/api/v1/hubs");
    assert_eq!(cfg.probe_timeout, Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS));
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

#[test]
fn from_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BACKEND_URLS", " https://java.internal/ ,http://dotnet:5086,https://java.internal");
        std::env::set_var("BACKEND_PROBE_PATH", "health");
        std::env::set_var("BACKEND_PROBE_TIMEOUT_MS", "250");
        std::env::set_var("BACKEND_REQUEST_TIMEOUT_SECS", "5");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backends, vec!["https://java.internal", "http://dotnet:5086"]);
    assert_eq!(cfg.probe_path, "/health");
    assert_eq!(cfg.probe_timeout, Duration::from_millis(250));
    assert_eq!(cfg.request_timeout, Duration::from_secs(5));

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));

    unsafe { clear_env() };
}

#[test]
fn unparseable_numbers_fall_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_env();
        std::env::set_var("BACKEND_PROBE_TIMEOUT_MS", "soon");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.probe_timeout, Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS));

    unsafe { clear_env() };
}

#[test]
fn backend_list_validation() {
    assert!(matches!(parse_backend_urls(" , "), Err(ConfigError::NoBackends)));
    assert!(matches!(parse_backend_urls("localhost:5086"), Err(ConfigError::InvalidBackendUrl(_))));
}
