//! Home feed: banners, pinned articles and the paged article list.

use async_trait::async_trait;
use tracing::warn;

use super::list::{ListController, PageSource};
use super::pager::Chunk;
use crate::api::EndpointKind;
use crate::error::RepoResult;
use crate::models::{Article, Banner};
use crate::repository::HomeRepository;

/// Loaded together with the first article page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeHead {
    pub banners: Vec<Banner>,
    /// Best effort: empty when the pinned list failed to load.
    pub pinned: Vec<Article>,
}

/// The home screen's controller.
pub type HomeScreen = ListController<Article, HomeHead>;

struct HomeSource {
    repo: HomeRepository,
}

#[async_trait]
impl PageSource<Article, HomeHead> for HomeSource {
    /// Banners and articles must both succeed; pinned articles may fail.
    async fn first_page(&self, page: u32) -> RepoResult<(Chunk<Article>, HomeHead)> {
        let (banners, pinned, articles) = tokio::join!(
            self.repo.banners(),
            self.repo.top_articles(),
            self.repo.articles(page),
        );

        let banners = banners?;
        let articles = articles?;
        let pinned = pinned.unwrap_or_else(|e| {
            warn!(error = %e, "Pinned articles unavailable");
            Vec::new()
        });

        Ok((articles.into(), HomeHead { banners, pinned }))
    }

    async fn next_page(&self, page: u32) -> RepoResult<Chunk<Article>> {
        self.repo.articles(page).await.map(Chunk::from)
    }
}

/// Build the home screen controller. Call `start()` to begin loading.
pub fn home_screen(repo: HomeRepository) -> HomeScreen {
    ListController::new(
        "home",
        EndpointKind::Articles.page_index(),
        HomeSource { repo },
    )
}
