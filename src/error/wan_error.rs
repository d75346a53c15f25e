//! Unified error type for API calls.

use thiserror::Error;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;

/// Every way an API call can fail before a repository sees it.
#[derive(Debug, Error)]
pub enum WanError {
    /// Transport failure: the envelope was never received.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The server answered with `errorCode != 0`.
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    /// The body was not a valid envelope for the expected payload.
    #[error("Failed to decode {what}: {message}")]
    Decode { what: String, message: String },

    /// A successful envelope arrived with a null `data` where one is required.
    #[error("Response for {0} carried no data")]
    MissingData(String),

    /// Wrapped error with additional context.
    #[error("{error} ({context})")]
    WithContext {
        error: Box<WanError>,
        context: ErrorContext,
    },
}

impl WanError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WanError::Network(NetworkError::HttpStatus { status, .. }) if *status >= 500 => {
                ErrorCategory::Server
            }
            WanError::Network(_) => ErrorCategory::Network,
            WanError::Api { .. } => ErrorCategory::Server,
            WanError::Decode { .. } | WanError::MissingData(_) => ErrorCategory::Client,
            WanError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            WanError::Network(err) => err.is_retryable(),
            WanError::WithContext { error, .. } => error.is_retryable(),
            other => other.category().is_retryable(),
        }
    }

    /// Message suitable for the Error view state.
    ///
    /// Application errors show the server's own `errorMsg`; everything else
    /// gets a readable description of the failure class.
    pub fn user_message(&self) -> String {
        match self {
            WanError::Network(err) => err.user_message(),
            WanError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            WanError::Api { code, .. } => format!("Request failed (code {})", code),
            WanError::Decode { .. } => "Received an unreadable response from the server.".to_string(),
            WanError::MissingData(_) => "The server returned no content.".to_string(),
            WanError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            WanError::Network(err) => err.error_code(),
            WanError::Api { .. } => "E_API",
            WanError::Decode { .. } => "E_DECODE",
            WanError::MissingData(_) => "E_NO_DATA",
            WanError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        WanError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            WanError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &WanError {
        match self {
            WanError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_server_message() {
        let err = WanError::Api {
            code: -1001,
            message: "请先登录！".to_string(),
        };
        assert_eq!(err.user_message(), "请先登录！");
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.error_code(), "E_API");
    }

    #[test]
    fn test_api_error_without_message_falls_back_to_code() {
        let err = WanError::Api {
            code: -1,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), "Request failed (code -1)");
    }

    #[test]
    fn test_network_categories() {
        let err: WanError = NetworkError::Cancelled.into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(!err.is_retryable());

        let err: WanError = NetworkError::HttpStatus {
            status: 502,
            message: String::new(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_decode_is_client_error() {
        let err = WanError::Decode {
            what: "banners".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Client);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Failed to decode banners: expected value");
    }

    #[test]
    fn test_context_is_transparent_to_classification() {
        let err: WanError = NetworkError::Timeout {
            operation: "square".to_string(),
            duration_secs: 30,
        }
        .into();
        let err = err.with_context(ErrorContext::new("square").with_page(Some(3)));

        assert_eq!(err.context().map(|c| c.page), Some(Some(3)));
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
        assert!(err.is_retryable());
        assert!(matches!(err.inner(), WanError::Network(_)));
        assert!(err.to_string().ends_with("(square page 3)"));
    }
}
