//! Error types for API requests and their normalized failure form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the movie API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or resource path could not form a valid URL
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No response was received (DNS, connect, reset, TLS)
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Server answered 2xx with an envelope carrying `success: false`
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Body was not valid JSON or did not match the expected shape
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP-style status code for this failure.
    ///
    /// Failures without a response report 500 (504 for timeouts).
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidUrl { .. } => 400,
            ApiError::Transport { .. } => 500,
            ApiError::Timeout { .. } => 504,
            ApiError::Status { status, .. } => *status,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Decode { .. } => 500,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short machine-readable classification, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Rejected { .. } => "rejected",
            ApiError::Decode { .. } => "decode_error",
        }
    }

    /// Normalize into the `{message, status}` record stores keep.
    pub fn to_failure(&self) -> ApiFailure {
        ApiFailure {
            message: self.message(),
            status: self.status(),
        }
    }
}

/// Normalized request failure: a human-readable message and a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub message: String,
    pub status: u16,
}

impl From<ApiError> for ApiFailure {
    fn from(err: ApiError) -> Self {
        err.to_failure()
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (status {})", self.message, self.status)
    }
}
