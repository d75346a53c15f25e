//! Project screen: a category list plus one project list per mode.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::watch;
use tracing::debug;

use super::lifecycle::TaskScope;
use super::list::{relay, FnSource, Listener, ListController};
use super::load_state::LoadState;
use super::pager::{Chunk, ListSnapshot};
use crate::api::EndpointKind;
use crate::models::{Project, ProjectCategory};
use crate::repository::ProjectRepository;

/// Which project list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectMode {
    /// Projects of one category, by category id.
    Category(i64),
    /// Newest projects across all categories.
    Newest,
}

impl fmt::Display for ProjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectMode::Category(id) => write!(f, "category {}", id),
            ProjectMode::Newest => write!(f, "newest"),
        }
    }
}

/// Everything the project screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    /// Category state until categories load, then the active list's state.
    pub state: LoadState,
    pub mode: Option<ProjectMode>,
    pub categories: Vec<ProjectCategory>,
    pub projects: ListSnapshot<Project>,
}

impl Default for ProjectView {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            mode: None,
            categories: Vec::new(),
            projects: ListSnapshot::empty(EndpointKind::Projects.page_index().initial()),
        }
    }
}

struct Inner {
    repo: ProjectRepository,
    categories: ListController<ProjectCategory>,
    lists: Mutex<HashMap<ProjectMode, ListController<Project>>>,
    mode: Mutex<Option<ProjectMode>>,
    view: watch::Sender<ProjectView>,
    listener: Listener,
    tasks: TaskScope,
}

impl Inner {
    fn mode(&self) -> MutexGuard<'_, Option<ProjectMode>> {
        self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lists(&self) -> MutexGuard<'_, HashMap<ProjectMode, ListController<Project>>> {
        self.lists.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The list for `mode`, created on first use.
    fn list(&self, mode: ProjectMode) -> ListController<Project> {
        self.lists()
            .entry(mode)
            .or_insert_with(|| {
                let list = project_list(self.repo.clone(), mode);
                list.set_listener(self.listener.clone());
                list
            })
            .clone()
    }

    fn compute_view(&self) -> ProjectView {
        let categories = self.categories.snapshot();
        let mode = *self.mode();
        let projects = mode
            .and_then(|mode| self.lists().get(&mode).map(ListController::snapshot))
            .unwrap_or_else(|| ProjectView::default().projects);

        let state = if !categories.state.is_success() {
            categories.state.clone()
        } else {
            match mode {
                Some(_) => projects.state.clone(),
                None if categories.items.is_empty() => LoadState::Success,
                // First category is about to be selected.
                None => LoadState::Loading,
            }
        };

        ProjectView {
            state,
            mode,
            categories: categories.items,
            projects,
        }
    }

    fn publish(&self) {
        self.view.send_replace(self.compute_view());
    }
}

fn project_list(repo: ProjectRepository, mode: ProjectMode) -> ListController<Project> {
    match mode {
        ProjectMode::Category(category_id) => ListController::new(
            "projects",
            EndpointKind::Projects.page_index(),
            FnSource(move |page| {
                let repo = repo.clone();
                async move { repo.projects(page, category_id).await.map(Chunk::from) }
            }),
        ),
        ProjectMode::Newest => ListController::new(
            "newest_projects",
            EndpointKind::NewestProjects.page_index(),
            FnSource(move |page| {
                let repo = repo.clone();
                async move { repo.new_projects(page).await.map(Chunk::from) }
            }),
        ),
    }
}

/// Controller for the project screen.
///
/// Loading fetches the categories and then selects the first one. Every
/// mode keeps its own list; returning to a mode that loaded shows it
/// without a request.
#[derive(Clone)]
pub struct ProjectScreen {
    inner: Arc<Inner>,
}

impl ProjectScreen {
    pub fn new(repo: ProjectRepository) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<Inner>| {
            let listener = relay(weak.clone(), Inner::publish);
            let categories = {
                let repo = repo.clone();
                ListController::new(
                    "project_categories",
                    EndpointKind::ProjectCategories.page_index(),
                    FnSource(move |_| {
                        let repo = repo.clone();
                        async move { repo.categories().await.map(Chunk::from) }
                    }),
                )
            };
            categories.set_listener(listener.clone());

            let (view, _) = watch::channel(ProjectView::default());
            Inner {
                repo,
                categories,
                lists: Mutex::new(HashMap::new()),
                mode: Mutex::new(None),
                view,
                listener,
                tasks: TaskScope::new(),
            }
        });
        Self { inner }
    }

    pub fn view(&self) -> ProjectView {
        self.inner.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProjectView> {
        self.inner.view.subscribe()
    }

    pub fn state(&self) -> LoadState {
        self.inner.compute_view().state
    }

    pub fn mode(&self) -> Option<ProjectMode> {
        *self.inner.mode()
    }

    pub fn categories(&self) -> &ListController<ProjectCategory> {
        &self.inner.categories
    }

    /// The list for `mode`, if it was ever selected.
    pub fn list(&self, mode: ProjectMode) -> Option<ListController<Project>> {
        self.inner.lists().get(&mode).cloned()
    }

    /// Load categories, then select the first category if nothing is
    /// selected yet.
    pub async fn load(&self) {
        self.inner.categories.load().await;
        if !self.inner.categories.state().is_success() || self.mode().is_some() {
            return;
        }

        match self.inner.categories.items().first() {
            Some(first) => self.select_category(first.id).await,
            None => {
                debug!("No project categories");
                self.inner.publish();
            }
        }
    }

    /// Switch to `mode`, loading it unless it already loaded successfully
    /// or is loading now.
    pub async fn select(&self, mode: ProjectMode) {
        if self.inner.tasks.is_disposed() {
            return;
        }
        *self.inner.mode() = Some(mode);
        let list = self.inner.list(mode);
        self.inner.publish();

        if list.is_pristine() || list.state().is_error() {
            debug!(mode = %mode, "Loading project list");
            list.load().await;
        } else {
            debug!(mode = %mode, state = %list.state(), "Project list restored");
        }
    }

    pub async fn select_category(&self, category_id: i64) {
        self.select(ProjectMode::Category(category_id)).await;
    }

    pub async fn select_newest(&self) {
        self.select(ProjectMode::Newest).await;
    }

    pub async fn load_more(&self) {
        if let Some(mode) = self.mode() {
            self.inner.list(mode).load_more().await;
        }
    }

    /// Refetch the active list, or the categories if they are not loaded.
    pub async fn refresh(&self) {
        let mode = self.mode();
        match mode {
            Some(mode) if self.inner.categories.state().is_success() => {
                self.inner.list(mode).refresh().await
            }
            _ => self.load().await,
        }
    }

    pub fn start(&self) {
        let this = self.clone();
        self.inner.tasks.spawn(async move { this.load().await });
    }

    pub fn spawn_select(&self, mode: ProjectMode) -> bool {
        let this = self.clone();
        self.inner.tasks.spawn(async move { this.select(mode).await })
    }

    pub fn dispose(&self) {
        self.inner.tasks.dispose();
        self.inner.categories.dispose();
        // Disposing publishes, and publishing takes the lists lock.
        let lists: Vec<_> = self.inner.lists().values().cloned().collect();
        for list in lists {
            list.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{Reply, ScriptedApi};
    use crate::api::Endpoint;
    use serde_json::json;

    fn screen(api: &ScriptedApi) -> ProjectScreen {
        ProjectScreen::new(ProjectRepository::new(Arc::new(api.clone())))
    }

    fn categories() -> Reply {
        Reply::ok(json!([{"id": 294, "name": "完整项目"}, {"id": 402, "name": "跨平台应用"}]))
    }

    fn projects(ids: &[i64]) -> Reply {
        let items: Vec<_> = ids.iter().map(|id| json!({"id": id, "title": "p"})).collect();
        Reply::page(json!(items), false)
    }

    #[tokio::test]
    async fn test_load_selects_first_category() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::ProjectCategories, categories());
        api.push(EndpointKind::Projects, projects(&[1, 2]));
        let screen = screen(&api);

        screen.load().await;

        let view = screen.view();
        assert_eq!(view.state, LoadState::Success);
        assert_eq!(view.mode, Some(ProjectMode::Category(294)));
        assert_eq!(view.categories.len(), 2);
        assert_eq!(view.projects.items.len(), 2);
        assert_eq!(
            api.calls()[1],
            Endpoint::Projects {
                page: 1,
                category_id: 294
            }
        );
    }

    #[tokio::test]
    async fn test_empty_categories_is_success() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::ProjectCategories, Reply::ok(json!([])));
        let screen = screen(&api);

        screen.load().await;

        let view = screen.view();
        assert_eq!(view.state, LoadState::Success);
        assert_eq!(view.mode, None);
        assert!(view.projects.items.is_empty());
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_category_failure_is_error() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::ProjectCategories, Reply::api_error(-1, "分类失败"));
        let screen = screen(&api);

        screen.load().await;

        assert_eq!(screen.state(), LoadState::Error("分类失败".to_string()));
        assert_eq!(screen.mode(), None);
    }

    #[tokio::test]
    async fn test_newest_uses_zero_based_paging() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::NewestProjects, projects(&[9]));
        let screen = screen(&api);

        screen.select_newest().await;

        assert_eq!(api.calls(), vec![Endpoint::NewestProjects { page: 0 }]);
        assert_eq!(screen.list(ProjectMode::Newest).unwrap().cursor(), 0);
    }

    #[tokio::test]
    async fn test_refresh_after_category_failure_retries_categories() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::ProjectCategories, Reply::offline());
        api.push(EndpointKind::ProjectCategories, categories());
        api.push(EndpointKind::Projects, projects(&[1]));
        let screen = screen(&api);

        screen.load().await;
        assert!(screen.state().is_error());

        screen.refresh().await;
        assert!(screen.state().is_success());
        assert_eq!(screen.mode(), Some(ProjectMode::Category(294)));
    }

    #[tokio::test]
    async fn test_dispose_with_selected_modes_returns() {
        let api = ScriptedApi::new();
        api.push(EndpointKind::NewestProjects, projects(&[9]));
        api.push(EndpointKind::Projects, projects(&[1]));
        let screen = screen(&api);

        screen.select_newest().await;
        screen.select_category(294).await;

        // On its own thread so a hang fails the test instead of stalling it.
        let (done, finished) = std::sync::mpsc::channel();
        let handle = screen.clone();
        std::thread::spawn(move || {
            handle.dispose();
            let _ = done.send(());
        });
        assert!(finished
            .recv_timeout(std::time::Duration::from_secs(5))
            .is_ok());
        assert!(screen.list(ProjectMode::Newest).unwrap().is_disposed());
        assert!(!screen.spawn_select(ProjectMode::Newest));
    }
}
