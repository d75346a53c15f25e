//! Error category classification.
//!
//! Categories decide whether a retry affordance makes sense.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures, timeouts and rate limiting.
    /// Generally transient and retryable.
    Network,

    /// The server answered but refused the request: HTTP 5xx or an
    /// application-level `errorCode != 0`.
    Server,

    /// The response could not be understood (bad JSON, missing payload).
    /// Not retryable: retrying returns the same bytes.
    Client,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
