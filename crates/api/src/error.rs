use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Failure of a single API call.
///
/// Nothing is retried; each failure ends the user action that caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the session's bearer token. The session has been
    /// cleared by the time this is returned.
    #[error("session rejected by server")]
    Unauthorized,

    /// Non-success response.
    #[error("API error ({status}): {}", .error.as_deref().unwrap_or("no error message"))]
    Api { status: u16, error: Option<String> },

    /// The response body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Build from a failed response, picking up the server's `error` field.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let error = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty());
        ApiError::Api { status, error }
    }

    /// One-line message for the page banner, with the generic fallback.
    pub fn banner(&self) -> String {
        self.banner_or(GENERIC_FAILURE)
    }

    /// One-line message for the page banner: the server's `error` field when
    /// it sent one, else `fallback`.
    pub fn banner_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { error: Some(error), .. } => error.clone(),
            ApiError::Invalid(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<booknest_core::DomainError> for ApiError {
    fn from(err: booknest_core::DomainError) -> Self {
        ApiError::Invalid(err.to_string())
    }
}
