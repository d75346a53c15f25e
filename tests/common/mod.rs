//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures, mock configurations and helper
//! functions for driving the list controllers end to end.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{scripted, Reply};
//!
//! let api = scripted();
//! api.push(EndpointKind::Square, Reply::page(articles_json(&[1]), true));
//! let screen = square_screen(&api);
//! ```

pub mod mocks;

pub use mocks::*;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use wanandroid::models::Article;
use wanandroid::repository::{HomeRepository, ProjectRepository, TreeRepository};
use wanandroid::traits::ApiClient;
use wanandroid::view_state::{home_screen, HomeScreen, ProjectScreen, SquareScreen};

/// How long a test waits for spawned work before failing.
pub const WAIT: Duration = Duration::from_secs(5);

/// A fresh scripted API.
pub fn scripted() -> ScriptedApi {
    ScriptedApi::new()
}

/// The scripted API behind the trait object the repositories take.
pub fn as_client(api: &ScriptedApi) -> Arc<dyn ApiClient> {
    Arc::new(api.clone())
}

#[allow(dead_code)]
pub fn home(api: &ScriptedApi) -> HomeScreen {
    home_screen(HomeRepository::new(as_client(api)))
}

#[allow(dead_code)]
pub fn square_screen(api: &ScriptedApi) -> SquareScreen {
    SquareScreen::new(TreeRepository::new(as_client(api)))
}

#[allow(dead_code)]
pub fn project_screen(api: &ScriptedApi) -> ProjectScreen {
    ProjectScreen::new(ProjectRepository::new(as_client(api)))
}

/// Article ids in list order.
#[allow(dead_code)]
pub fn ids(articles: &[Article]) -> Vec<i64> {
    articles.iter().map(|a| a.id).collect()
}

/// Await `future`, failing the test if it takes longer than [`WAIT`].
#[allow(dead_code)]
pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(WAIT, future)
        .await
        .expect("timed out waiting for the controller")
}

/// Let spawned tasks run until none of them can make progress.
#[allow(dead_code)]
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Run `f` on its own thread and report whether it returned within [`WAIT`].
/// A blocking call that never returns fails the test instead of hanging it.
#[allow(dead_code)]
pub fn returns_within<F>(f: F) -> bool
where
    F: FnOnce() + Send + 'static,
{
    let (done, finished) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        f();
        let _ = done.send(());
    });
    finished.recv_timeout(WAIT).is_ok()
}
