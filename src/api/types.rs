//! API request and response types

use serde::Deserialize;
use serde::Serialize;

/// `POST /ask` request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskRequest {
    /// Free-text user message; absent means empty
    #[serde(default)]
    pub message: String,
}

impl AskRequest {
    /// Decode from an already-parsed JSON value.
    ///
    /// Only JSON objects are accepted; `message`, when present, must be a string.
    pub fn from_json(value: serde_json::Value) -> Result<Self, String> {
        if !value.is_object() {
            return Err("request body must be a JSON object".to_string());
        }
        serde_json::from_value(value).map_err(|e| format!("invalid request body: {e}"))
    }
}

/// `POST /ask` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub reply: String,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
