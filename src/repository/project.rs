use std::sync::Arc;

use super::{unwrap_list, unwrap_page};
use crate::error::RepoResult;
use crate::models::{ProjectCategory, ProjectPage};
use crate::traits::ApiClient;

/// Project categories and project listings.
#[derive(Clone)]
pub struct ProjectRepository {
    api: Arc<dyn ApiClient>,
}

impl ProjectRepository {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    pub async fn categories(&self) -> RepoResult<Vec<ProjectCategory>> {
        unwrap_list(
            "project_categories",
            self.api.fetch_project_categories().await,
        )
    }

    /// Projects in one category (1-based).
    pub async fn projects(&self, page: u32, category_id: i64) -> RepoResult<ProjectPage> {
        unwrap_page("projects", self.api.fetch_projects(page, category_id).await)
    }

    /// Newest projects (0-based).
    pub async fn new_projects(&self, page: u32) -> RepoResult<ProjectPage> {
        unwrap_page("newest_projects", self.api.fetch_new_projects(page).await)
    }
}
