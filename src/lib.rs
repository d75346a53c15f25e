//! WanAndroid client - paginated content lists over the public WanAndroid API.
//!
//! This library exposes modules for use in integration tests and by the
//! `wanandroid` binary.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod traits;
pub mod view_state;

pub use api::WanAndroidClient;
pub use config::ClientConfig;
pub use error::{RepoError, RepoResult, WanError, WanResult};
