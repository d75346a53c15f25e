//! Square screen: four independent tabs.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::watch;
use tracing::debug;

use super::lifecycle::TaskScope;
use super::list::{relay, FnSource, ListController, ListHandle};
use super::load_state::LoadState;
use super::pager::Chunk;
use crate::api::EndpointKind;
use crate::models::{Article, NavigationGroup, SystemNode};
use crate::repository::TreeRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SquareTab {
    #[default]
    Square,
    DailyQuestion,
    System,
    Navigation,
}

impl SquareTab {
    pub const ALL: [SquareTab; 4] = [
        SquareTab::Square,
        SquareTab::DailyQuestion,
        SquareTab::System,
        SquareTab::Navigation,
    ];

    /// Tab at a zero-based position in the tab bar.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            SquareTab::Square => 0,
            SquareTab::DailyQuestion => 1,
            SquareTab::System => 2,
            SquareTab::Navigation => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SquareTab::Square => "Square",
            SquareTab::DailyQuestion => "Daily question",
            SquareTab::System => "System",
            SquareTab::Navigation => "Navigation",
        }
    }
}

impl fmt::Display for SquareTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the screen shows: the active tab and that tab's state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SquareView {
    pub tab: SquareTab,
    pub state: LoadState,
}

struct Inner {
    square: ListController<Article>,
    questions: ListController<Article>,
    system: ListController<SystemNode>,
    navigation: ListController<NavigationGroup>,
    tab: Mutex<SquareTab>,
    view: watch::Sender<SquareView>,
    tasks: TaskScope,
}

impl Inner {
    fn tab(&self) -> MutexGuard<'_, SquareTab> {
        self.tab.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn list(&self, tab: SquareTab) -> &dyn ListHandle {
        match tab {
            SquareTab::Square => &self.square,
            SquareTab::DailyQuestion => &self.questions,
            SquareTab::System => &self.system,
            SquareTab::Navigation => &self.navigation,
        }
    }

    fn publish(&self) {
        let tab = *self.tab();
        let state = self.list(tab).state();
        self.view.send_replace(SquareView { tab, state });
    }
}

/// Controller for the square screen.
///
/// Each tab keeps its own list and cursor. Returning to a tab that already
/// loaded shows it as it was, without a request.
#[derive(Clone)]
pub struct SquareScreen {
    inner: Arc<Inner>,
}

impl SquareScreen {
    pub fn new(repo: TreeRepository) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<Inner>| {
            let square = {
                let repo = repo.clone();
                ListController::new(
                    "square",
                    EndpointKind::Square.page_index(),
                    FnSource(move |page| {
                        let repo = repo.clone();
                        async move { repo.square(page).await.map(Chunk::from) }
                    }),
                )
            };
            let questions = {
                let repo = repo.clone();
                ListController::new(
                    "daily_question",
                    EndpointKind::DailyQuestions.page_index(),
                    FnSource(move |page| {
                        let repo = repo.clone();
                        async move { repo.daily_question(page).await.map(Chunk::from) }
                    }),
                )
            };
            let system = {
                let repo = repo.clone();
                ListController::new(
                    "system",
                    EndpointKind::SystemTree.page_index(),
                    FnSource(move |_| {
                        let repo = repo.clone();
                        async move { repo.system_tree().await.map(Chunk::from) }
                    }),
                )
            };
            let navigation = {
                let repo = repo.clone();
                ListController::new(
                    "navigation",
                    EndpointKind::Navigation.page_index(),
                    FnSource(move |_| {
                        let repo = repo.clone();
                        async move { repo.navigation().await.map(Chunk::from) }
                    }),
                )
            };

            let listener = relay(weak.clone(), Inner::publish);
            square.set_listener(listener.clone());
            questions.set_listener(listener.clone());
            system.set_listener(listener.clone());
            navigation.set_listener(listener);

            let (view, _) = watch::channel(SquareView::default());
            Inner {
                square,
                questions,
                system,
                navigation,
                tab: Mutex::new(SquareTab::default()),
                view,
                tasks: TaskScope::new(),
            }
        });
        Self { inner }
    }

    pub fn tab(&self) -> SquareTab {
        *self.inner.tab()
    }

    pub fn view(&self) -> SquareView {
        self.inner.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SquareView> {
        self.inner.view.subscribe()
    }

    pub fn state(&self) -> LoadState {
        self.inner.list(self.tab()).state()
    }

    pub fn square(&self) -> &ListController<Article> {
        &self.inner.square
    }

    pub fn daily_questions(&self) -> &ListController<Article> {
        &self.inner.questions
    }

    pub fn system(&self) -> &ListController<SystemNode> {
        &self.inner.system
    }

    pub fn navigation(&self) -> &ListController<NavigationGroup> {
        &self.inner.navigation
    }

    /// Switch tabs. Loads the tab unless it already loaded successfully or
    /// is loading now.
    pub async fn select_tab(&self, tab: SquareTab) {
        if self.inner.tasks.is_disposed() {
            return;
        }
        *self.inner.tab() = tab;
        self.inner.publish();

        let list = self.inner.list(tab);
        if list.is_pristine() || list.state().is_error() {
            debug!(tab = %tab, "Loading tab");
            list.load().await;
        } else {
            debug!(tab = %tab, state = %list.state(), "Tab restored");
        }
    }

    /// [`select_tab`](Self::select_tab) by tab-bar position. Returns `false`
    /// for an unknown position.
    pub async fn select_tab_index(&self, index: usize) -> bool {
        match SquareTab::from_index(index) {
            Some(tab) => {
                self.select_tab(tab).await;
                true
            }
            None => false,
        }
    }

    /// Load the active tab.
    pub async fn load(&self) {
        self.inner.list(self.tab()).load().await;
    }

    pub async fn load_more(&self) {
        self.inner.list(self.tab()).load_more().await;
    }

    pub async fn refresh(&self) {
        self.inner.list(self.tab()).refresh().await;
    }

    /// Spawn the load of the active tab.
    pub fn start(&self) {
        let this = self.clone();
        self.inner.tasks.spawn(async move { this.load().await });
    }

    pub fn spawn_select_tab(&self, tab: SquareTab) -> bool {
        let this = self.clone();
        self.inner
            .tasks
            .spawn(async move { this.select_tab(tab).await })
    }

    pub fn dispose(&self) {
        self.inner.tasks.dispose();
        for tab in SquareTab::ALL {
            self.inner.list(tab).dispose();
        }
    }
}
