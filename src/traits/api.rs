//! The API client seam consumed by the repositories.

use async_trait::async_trait;

use crate::error::WanResult;
use crate::models::{
    ApiResponse, Article, ArticlePage, Banner, NavigationGroup, ProjectCategory, ProjectPage,
    SystemNode,
};

/// Typed access to the ten read endpoints.
///
/// `Ok` carries the decoded outer envelope, which may still report an
/// application failure (`errorCode != 0`). `Err` is a transport or decoding
/// failure. Implementations: [`WanAndroidClient`](crate::api::WanAndroidClient)
/// and [`ScriptedApi`](crate::adapters::mock::ScriptedApi).
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn fetch_banners(&self) -> WanResult<ApiResponse<Vec<Banner>>>;

    /// Home feed, 0-based.
    async fn fetch_articles(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>>;

    async fn fetch_top_articles(&self) -> WanResult<ApiResponse<Vec<Article>>>;

    async fn fetch_project_categories(&self) -> WanResult<ApiResponse<Vec<ProjectCategory>>>;

    /// Projects of one category, 1-based.
    async fn fetch_projects(
        &self,
        page: u32,
        category_id: i64,
    ) -> WanResult<ApiResponse<ProjectPage>>;

    /// Newest projects across categories, 0-based.
    async fn fetch_new_projects(&self, page: u32) -> WanResult<ApiResponse<ProjectPage>>;

    async fn fetch_system_tree(&self) -> WanResult<ApiResponse<Vec<SystemNode>>>;

    /// Square (user-shared) articles, 0-based.
    async fn fetch_square(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>>;

    async fn fetch_navigation(&self) -> WanResult<ApiResponse<Vec<NavigationGroup>>>;

    /// Daily questions, 1-based.
    async fn fetch_daily_question(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>>;
}
