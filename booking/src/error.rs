//! Backend call failures as seen by the web client and the CLI.

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Unable to reach the booking service: {0}")]
    Network(String),
    /// Non-success status with the server's explanation.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    NotFound(String),
    /// 401/403: missing, expired, or insufficient credentials.
    #[error("{0}")]
    Unauthorized(String),
    /// A success response whose body did not match the expected shape.
    #[error("Unexpected response from the booking service: {0}")]
    Decode(String),
    /// No backend is currently reachable.
    #[error("The booking service is temporarily unavailable. Please try again shortly.")]
    Unavailable,
}

const MAX_RAW_MESSAGE_CHARS: usize = 300;

impl ApiError {
    /// Classify a non-success response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_server_message(body);
        match status {
            404 => Self::NotFound(message.unwrap_or_else(|| "Not found".to_owned())),
            401 | 403 => {
                Self::Unauthorized(message.unwrap_or_else(|| "Please log in to continue.".to_owned()))
            }
            503 => Self::Unavailable,
            _ => Self::Status {
                status,
                message: message.unwrap_or_else(|| format!("Request failed with status {status}")),
            },
        }
    }

    /// Worth serving cached data for: the server may still hold the record.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Unavailable => true,
            Self::Status { status, .. } => *status >= 500,
            Self::NotFound(_) | Self::Unauthorized(_) | Self::Decode(_) => false,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Unauthorized(_) => Some(401),
            Self::Unavailable => Some(503),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Pull a readable message out of an error body.
///
/// Tries, in order: a bare JSON string, `message`, a validation `errors` map
/// (one `field: a, b` line per field), `title`, then the raw text.
#[must_use]
pub fn extract_server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Some(body.chars().take(MAX_RAW_MESSAGE_CHARS).collect());
    };
    match &value {
        Value::String(s) if !s.trim().is_empty() => return Some(s.trim().to_owned()),
        Value::Object(map) => {
            if let Some(msg) = map.get("message").and_then(Value::as_str).filter(|s| !s.is_empty()) {
                return Some(msg.to_owned());
            }
            if let Some(Value::Object(errors)) = map.get("errors") {
                let mut lines: Vec<String> = errors
                    .iter()
                    .map(|(field, detail)| format!("{field}: {}", join_detail(detail)))
                    .collect();
                lines.sort();
                if !lines.is_empty() {
                    return Some(lines.join("\n"));
                }
            }
            if let Some(Value::String(title)) = map.get("title") {
                return Some(title.clone());
            }
        }
        _ => {}
    }
    Some(body.chars().take(MAX_RAW_MESSAGE_CHARS).collect())
}

fn join_detail(detail: &Value) -> String {
    match detail {
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned))
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
