//! Concrete implementations of the traits in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::ScriptedApi`] - Queued API replies with gating

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, ScriptedApi};
pub use reqwest_http::ReqwestHttpClient;
