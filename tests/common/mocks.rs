//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `wanandroid::adapters::mock` and provides builders for the wire bodies
//! the WanAndroid server sends.

pub use wanandroid::adapters::mock::{
    article_json, articles_json, page_body, Gate, MockHttpClient, MockResponse, Reply,
    ScriptedApi,
};
pub use wanandroid::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;
use serde_json::{json, Value};

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response with the given status.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures a transport failure.
    #[allow(dead_code)]
    pub fn with_error_response(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    /// Configures a default response for unmatched URLs.
    #[allow(dead_code)]
    pub fn with_default_success(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful envelope around `data`, as the server sends it.
#[allow(dead_code)]
pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "errorCode": 0, "errorMsg": "" })
}

/// A failed envelope.
#[allow(dead_code)]
pub fn error_envelope(code: i32, message: &str) -> Value {
    json!({ "data": null, "errorCode": code, "errorMsg": message })
}

/// One project category with no children.
#[allow(dead_code)]
pub fn category_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "children": [], "courseId": 13, "order": 145000, "parentChapterId": 293 })
}

/// A project entry as listed under `project/list`.
#[allow(dead_code)]
pub fn project_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "maker",
        "desc": "a project",
        "envelopePic": "https://www.wanandroid.com/blogimgs/p.png",
        "link": "https://github.com/example/project",
        "projectLink": "https://github.com/example/project",
        "publishTime": 1_700_000_000_000_i64,
        "chapterName": "完整项目",
        "superChapterName": "开源项目主Tab"
    })
}

/// A list of projects titled by their ids.
#[allow(dead_code)]
pub fn projects_json(ids: &[i64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| project_json(*id, &format!("project {}", id)))
            .collect(),
    )
}
