//! Error types for the Cryptowatch client library.

use thiserror::Error;

/// The main error type for all Cryptowatch client operations.
#[derive(Error, Debug)]
pub enum CryptowatchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Cryptowatch API returned an error
    #[error("Cryptowatch API error: {0}")]
    Api(ApiError),

    /// Rate limit exceeded (HTTP 429)
    #[error("Too many requests, allowance resets in {reset_in_minutes} minutes")]
    RateLimitExceeded {
        /// Approximate minutes until the allowance resets
        reset_in_minutes: u32,
        /// `Retry-After` value in seconds, when the server sent one
        retry_after_secs: Option<u64>,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CryptowatchError {
    /// The request never produced a response, or its body could not be read.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpMiddleware(_))
    }

    /// The response body did not have the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_) | Self::InvalidResponse(_))
    }

    /// The server answered with HTTP 429.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimitExceeded { .. })
    }

    /// The server answered with an error envelope.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The API error payload, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// An error reported by the Cryptowatch API in the response envelope.
///
/// The API answers failures with `{"error": "<message>"}` and a non-200 status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Message from the envelope's `error` field.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Create a new API error from a status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a parsed envelope.
    ///
    /// Falls back to a generic message when `error` is missing or not a string.
    pub fn from_envelope(status: u16, envelope: &serde_json::Map<String, serde_json::Value>) -> Self {
        match envelope.get("error").and_then(|e| e.as_str()) {
            Some(message) => Self::new(status, message),
            None => Self::new(status, format!("unknown API error, status {}", status)),
        }
    }

    /// Check if the resource was not found.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the server failed on its side.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}
