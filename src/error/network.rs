//! Network-related error types.
//!
//! Failures that happen before an API envelope could be read: the request
//! never reached the server, timed out, or came back with a non-2xx status.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String, duration_secs: u64 },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by server (HTTP 429).
    RateLimited,

    /// The URL could not be built or parsed.
    InvalidUrl { url: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 408,
            NetworkError::RateLimited => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => format!(
                "Loading {} timed out after {} seconds.",
                operation, duration_secs
            ),
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The requested content was not found.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            NetworkError::InvalidUrl { .. } => "The request address is invalid.".to_string(),
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited => "E_NET_RATE",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Classify a non-2xx status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        if status == 429 {
            NetworkError::RateLimited
        } else {
            NetworkError::HttpStatus {
                status,
                message: message.into(),
            }
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => write!(f, "{} timed out after {} seconds", operation, duration_secs),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited => write!(f, "Rate limited"),
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<HttpError> for NetworkError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed { url, message } => {
                NetworkError::ConnectionFailed { url, message }
            }
            HttpError::Timeout { url, after_secs } => NetworkError::Timeout {
                operation: url,
                duration_secs: after_secs,
            },
            HttpError::Status { status, body } => NetworkError::from_status(status, body),
            HttpError::Cancelled => NetworkError::Cancelled,
            HttpError::InvalidUrl(url) => NetworkError::InvalidUrl { url },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }
}
