//! Reqwest-based HTTP client adapter.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use wanandroid::adapters::ReqwestHttpClient;
/// use wanandroid::config::ClientConfig;
/// use wanandroid::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::from_config(&ClientConfig::default())?;
/// let response = client.get("https://www.wanandroid.com/banner/json", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ReqwestHttpClient {
    /// Build a client with the configured request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self {
            client,
            timeout_secs: config.timeout().as_secs(),
        })
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(&self, url: &str, err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                after_secs: self.timeout_secs,
            }
        } else if err.is_connect() {
            HttpError::ConnectionFailed {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else if err.is_builder() {
            HttpError::InvalidUrl(url.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.get(url), headers);

        let response = builder
            .send()
            .await
            .map_err(|e| self.convert_error(url, e))?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| self.convert_error(url, e))?;

        debug!(url, status, bytes = body.len(), "HTTP response");
        Ok(Response::with_headers(status, response_headers, body))
    }
}
