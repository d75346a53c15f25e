use std::sync::Arc;

use super::{unwrap_list, unwrap_page};
use crate::error::RepoResult;
use crate::models::{Article, ArticlePage, Banner};
use crate::traits::ApiClient;

/// Banners, the home article feed and pinned articles.
#[derive(Clone)]
pub struct HomeRepository {
    api: Arc<dyn ApiClient>,
}

impl HomeRepository {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn banners(&self) -> RepoResult<Vec<Banner>> {
        unwrap_list("banners", self.api.fetch_banners().await)
    }

    /// One page of the home feed (0-based).
    pub async fn articles(&self, page: u32) -> RepoResult<ArticlePage> {
        unwrap_page("articles", self.api.fetch_articles(page).await)
    }

    pub async fn top_articles(&self) -> RepoResult<Vec<Article>> {
        unwrap_list("top_articles", self.api.fetch_top_articles().await)
    }
}
