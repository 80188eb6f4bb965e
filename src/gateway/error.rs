use derive_more::Display;
use serde_json::Value;

/// The single failure shape every gateway call reports: one human readable
/// message, either the backend's `detail` or the endpoint's fallback.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", message)]
pub struct FetchError {
    pub message: String,
}

impl std::error::Error for FetchError {}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response body, falling back when the
    /// body carries no usable `detail`.
    pub fn from_body(body: Option<&Value>, fallback: &str) -> Self {
        body.and_then(|b| b.get("detail"))
            .and_then(detail_message)
            .map(Self::new)
            .unwrap_or_else(|| Self::new(fallback))
    }
}

/// `detail` is a plain string for handled errors, or a list of
/// `{loc, msg, type}` entries for request validation failures.
fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
