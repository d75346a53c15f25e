//! Error context for enriched error information.
//!
//! Attached to errors at the API boundary so logs say which endpoint and
//! page failed, not just why.

use std::fmt;

use chrono::{DateTime, Utc};

/// Context information attached to errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Name of the operation that failed (e.g. `articles`).
    pub operation: String,

    /// Request URL, when one was built.
    pub url: Option<String>,

    /// Page index requested, for paged endpoints.
    pub page: Option<u32>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            url: None,
            page: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the request URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the requested page.
    pub fn with_page(mut self, page: Option<u32>) -> Self {
        self.page = page;
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref url) = self.url {
            parts.push(format!("url={}", url));
        }
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Some(page) => write!(f, "{} page {}", self.operation, page),
            None => write!(f, "{}", self.operation),
        }
    }
}
