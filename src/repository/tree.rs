use std::sync::Arc;

use super::{unwrap_list, unwrap_page};
use crate::error::RepoResult;
use crate::models::{ArticlePage, NavigationGroup, SystemNode};
use crate::traits::ApiClient;

/// The square, daily questions, the system tree and navigation.
#[derive(Clone)]
pub struct TreeRepository {
    api: Arc<dyn ApiClient>,
}

impl TreeRepository {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn system_tree(&self) -> RepoResult<Vec<SystemNode>> {
        unwrap_list("system_tree", self.api.fetch_system_tree().await)
    }

    /// Square articles (0-based).
    pub async fn square(&self, page: u32) -> RepoResult<ArticlePage> {
        unwrap_page("square", self.api.fetch_square(page).await)
    }

    pub async fn navigation(&self) -> RepoResult<Vec<NavigationGroup>> {
        unwrap_list("navigation", self.api.fetch_navigation().await)
    }

    /// Daily questions (1-based).
    pub async fn daily_question(&self, page: u32) -> RepoResult<ArticlePage> {
        unwrap_page("daily_questions", self.api.fetch_daily_question(page).await)
    }
}
