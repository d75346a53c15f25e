//! HTTP client trait abstraction.
//!
//! The API client only ever issues GET requests; the trait is kept that
//! narrow so a test double is a few lines.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossy on invalid UTF-8.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures reported by an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    #[error("Connection failed to {url}: {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("Request to {url} timed out after {after_secs}s")]
    Timeout { url: String, after_secs: u64 },

    /// Only produced by clients that reject non-2xx statuses themselves.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for HTTP GET operations.
///
/// Implementations include the reqwest-based client and
/// [`MockHttpClient`](crate::adapters::mock::MockHttpClient).
///
/// # Example
///
/// ```ignore
/// use wanandroid::traits::{Headers, HttpClient};
///
/// async fn banners<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let response = client.get("https://www.wanandroid.com/banner/json", &Headers::new()).await?;
///     Ok(response.text_lossy())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// A non-2xx status is still an `Ok(Response)`; callers decide what a
    /// status means.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
