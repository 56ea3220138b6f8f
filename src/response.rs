use serde_json::Value;

/// The normalized result of an API call.
///
/// The reseller API answers most calls with JSON, but some endpoints (and
/// most error pages in front of them) reply with plain text. Rather than
/// treating those as failures, every response body is run through
/// [`ApiResponse::normalize`]: well-formed JSON becomes [`ApiResponse::Json`],
/// everything else is handed back verbatim as [`ApiResponse::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The body decoded as a JSON value (object, array or scalar).
    Json(Value),
    /// The body as received, when it was not well-formed JSON.
    Raw(String),
}

impl ApiResponse {
    /// Decodes a response body, falling back to the raw text on any
    /// parse failure. There is no partial-parse recovery.
    pub fn normalize(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => ApiResponse::Json(value),
            Err(_) => ApiResponse::Raw(body.to_string()),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ApiResponse::Json(_))
    }

    /// The decoded value, if the body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Raw(_) => None,
        }
    }

    /// The verbatim body, if it was not JSON.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ApiResponse::Json(_) => None,
            ApiResponse::Raw(text) => Some(text),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Raw(_) => None,
        }
    }
}
