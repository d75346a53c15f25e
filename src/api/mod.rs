//! WanAndroid API client.
//!
//! [`endpoints`] names the ten read endpoints and their paging scheme;
//! [`WanAndroidClient`] turns them into typed [`ApiClient`](crate::traits::ApiClient)
//! calls over an injected [`HttpClient`](crate::traits::HttpClient).

pub mod client;
pub mod endpoints;

pub use client::WanAndroidClient;
pub use endpoints::{Endpoint, EndpointKind, PageIndex};
