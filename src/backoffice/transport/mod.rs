//! Generic request wrapper for the back office api.

pub(crate) mod client;
pub(crate) mod error;

use serde_json::Value;

/// Body of a successful response, decoded according to its content type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// The body as JSON. Text that parses as JSON is parsed, other text becomes a string.
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        }
    }
}
