//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedApi`] - API client with queued, optionally gated, replies

pub mod api;
pub mod http;

pub use api::{article_json, articles_json, page_body, Gate, Reply, ScriptedApi};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
