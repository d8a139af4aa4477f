/// Error types for the backend client
use thiserror::Error;

/// Main error type for backend requests
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Request failed with status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was rejected before being sent
    #[error("Invalid request: {0}")]
    Invalid(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

impl ApiError {
    /// Build a status error, pulling `detail` out of a `{"detail": "..."}` body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
        ApiError::Status { status, detail }
    }

    /// The backend-provided message, verbatim.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
