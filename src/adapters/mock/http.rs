//! Mock HTTP client for testing.
//!
//! Returns canned responses or errors per URL and records every request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// URLs are matched exactly first, then by the longest configured prefix,
/// then the default response.
///
/// # Example
///
/// ```ignore
/// use wanandroid::adapters::mock::MockHttpClient;
/// use wanandroid::traits::{Headers, HttpClient, Response};
///
/// let client = MockHttpClient::new()
///     .with_json("https://www.wanandroid.com/navi/json", r#"{"data":[],"errorCode":0,"errorMsg":""}"#);
///
/// let response = client.get("https://www.wanandroid.com/navi/json", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_response`](Self::set_response) for a success.
    pub fn with_response(self, url: &str, response: Response) -> Self {
        self.set_response(url, MockResponse::Success(response));
        self
    }

    /// Builder form of [`set_response`](Self::set_response) for an error.
    pub fn with_error(self, url: &str, error: HttpError) -> Self {
        self.set_response(url, MockResponse::Error(error));
        self
    }

    /// A 200 response with the given JSON body.
    pub fn with_json(self, url: &str, body: &str) -> Self {
        self.with_response(url, Response::new(200, body.to_string()))
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Response for URLs without a specific match.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    pub fn clear_responses(&self) {
        lock(&self.responses).clear();
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_mock_http_client_new() {
        let client = MockHttpClient::new();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new()
            .with_response("https://example.com/banner/json", Response::new(200, "Hello"));

        let response = client
            .get("https://example.com/banner/json", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://example.com/banner/json");
    }

    #[tokio::test]
    async fn test_get_with_error() {
        let client = MockHttpClient::new().with_error(
            "https://example.com/tree/json",
            HttpError::Timeout {
                url: "https://example.com/tree/json".to_string(),
                after_secs: 30,
            },
        );

        let result = client
            .get("https://example.com/tree/json", &Headers::new())
            .await;

        match result {
            Err(HttpError::Timeout { after_secs, .. }) => assert_eq!(after_secs, 30),
            other => panic!("Expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();

        let result = client
            .get("https://example.com/missing", &Headers::new())
            .await;

        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_default_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, "Not Found")));

        let response = client
            .get("https://example.com/anything", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new()
            .with_response("https://example.com/article", Response::new(500, ""))
            .with_response("https://example.com/article/list", Response::new(200, ""));

        let response = client
            .get("https://example.com/article/list/3/json", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_headers_recorded() {
        let client = MockHttpClient::new().with_json("https://example.com/navi/json", "{}");

        let mut headers = Headers::new();
        headers.insert("User-Agent".to_string(), "wanandroid/test".to_string());

        client
            .get("https://example.com/navi/json", &headers)
            .await
            .unwrap();

        assert_eq!(
            client.get_requests()[0].headers.get("User-Agent"),
            Some(&"wanandroid/test".to_string())
        );
    }

    #[tokio::test]
    async fn test_clear_requests_and_responses() {
        let client = MockHttpClient::new().with_json("https://example.com", "{}");
        client
            .get("https://example.com", &Headers::new())
            .await
            .unwrap();
        assert_eq!(client.request_count(), 1);

        client.clear_requests();
        client.clear_responses();
        assert_eq!(client.request_count(), 0);
        assert!(client.get_response("https://example.com").is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let client = MockHttpClient::new().with_json("https://example.com", "{}");
        let cloned = client.clone();

        cloned
            .get("https://example.com", &Headers::new())
            .await
            .unwrap();

        assert_eq!(client.request_count(), 1);
    }
}
