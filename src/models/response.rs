//! Success response body from the save endpoint.

use serde_json::Value;

/// Body of a 2xx response.
///
/// The endpoint may answer with JSON or with plain text; both count as success.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveResponse {
    /// Body parsed as JSON
    Json(Value),

    /// Body that was not valid JSON, kept verbatim
    Text(String),
}

impl SaveResponse {
    /// Interpret a raw response body, falling back to text when it is not JSON.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => {
                tracing::debug!("Parsed API response: {}", value);
                SaveResponse::Json(value)
            }
            Err(_) => {
                tracing::debug!("Response is not JSON, treating as text");
                SaveResponse::Text(body)
            }
        }
    }

    /// Whether the body was parsed as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, SaveResponse::Json(_))
    }
}
