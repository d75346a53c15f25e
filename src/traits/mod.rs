//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET transport
//! - [`ApiClient`] - Typed WanAndroid endpoints

pub mod api;
pub mod http;

pub use api::ApiClient;
pub use http::{Headers, HttpClient, HttpError, Response};
