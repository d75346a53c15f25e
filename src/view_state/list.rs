//! Async list controller.
//!
//! [`ListController`] drives a [`Pager`] against a [`PageSource`] and
//! publishes a [`ListSnapshot`] after every transition. It is a cheap
//! `Clone` handle: presenters clone it into spawned tasks or call the async
//! operations directly.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::lifecycle::TaskScope;
use super::load_state::LoadState;
use super::pager::{Chunk, ListSnapshot, Pager};
use crate::api::PageIndex;
use crate::error::RepoResult;

/// Called after every published change.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// A listener that forwards to `on_change` while `owner` is alive.
pub(crate) fn relay<S>(owner: Weak<S>, on_change: fn(&S)) -> Listener
where
    S: Send + Sync + 'static,
{
    Arc::new(move || {
        if let Some(owner) = owner.upgrade() {
            on_change(&owner);
        }
    })
}

/// Where a list's pages come from.
#[async_trait]
pub trait PageSource<T, X = ()>: Send + Sync {
    /// The first page plus any data that belongs to the whole list.
    async fn first_page(&self, page: u32) -> RepoResult<(Chunk<T>, X)>;

    /// A later page.
    async fn next_page(&self, page: u32) -> RepoResult<Chunk<T>>;
}

/// A [`PageSource`] built from one page-fetching closure.
pub struct FnSource<F>(pub F);

#[async_trait]
impl<T, F, Fut> PageSource<T> for FnSource<F>
where
    T: Send + 'static,
    F: Fn(u32) -> Fut + Send + Sync,
    Fut: Future<Output = RepoResult<Chunk<T>>> + Send,
{
    async fn first_page(&self, page: u32) -> RepoResult<(Chunk<T>, ())> {
        (self.0)(page).await.map(|chunk| (chunk, ()))
    }

    async fn next_page(&self, page: u32) -> RepoResult<Chunk<T>> {
        (self.0)(page).await
    }
}

/// The operations every list supports, independent of item type.
#[async_trait]
pub trait ListHandle: Send + Sync {
    fn name(&self) -> &'static str;
    fn state(&self) -> LoadState;
    /// No load was ever issued.
    fn is_pristine(&self) -> bool;
    async fn load(&self);
    async fn load_more(&self);
    async fn refresh(&self);
    fn dispose(&self);
}

struct Shared<T, X> {
    name: &'static str,
    source: Arc<dyn PageSource<T, X>>,
    pager: Mutex<Pager<T, X>>,
    snapshot: watch::Sender<ListSnapshot<T, X>>,
    listener: Mutex<Option<Listener>>,
    tasks: TaskScope,
}

/// State holder for one paginated list.
pub struct ListController<T, X = ()> {
    shared: Arc<Shared<T, X>>,
}

impl<T, X> Clone for ListController<T, X> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, X> ListController<T, X>
where
    T: Clone + Send + Sync + 'static,
    X: Clone + Default + Send + Sync + 'static,
{
    pub fn new(
        name: &'static str,
        index: PageIndex,
        source: impl PageSource<T, X> + 'static,
    ) -> Self {
        let pager = Pager::new(index);
        let (snapshot, _) = watch::channel(pager.snapshot());
        Self {
            shared: Arc::new(Shared {
                name,
                source: Arc::new(source),
                pager: Mutex::new(pager),
                snapshot,
                listener: Mutex::new(None),
                tasks: TaskScope::new(),
            }),
        }
    }

    /// Register the single change listener, replacing any previous one.
    pub fn set_listener(&self, listener: Listener) {
        *self
            .shared
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot<T, X>> {
        self.shared.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> ListSnapshot<T, X> {
        self.shared.snapshot.borrow().clone()
    }

    fn pager(&self) -> MutexGuard<'_, Pager<T, X>> {
        self.shared
            .pager
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the pager, publish the result, then notify the listener
    /// outside the lock.
    fn update<R>(&self, f: impl FnOnce(&mut Pager<T, X>) -> R) -> R {
        self.update_if(f, |_| true)
    }

    /// Like [`update`](Self::update), but publishes nothing unless
    /// `changed` holds for the result.
    fn update_if<R>(
        &self,
        f: impl FnOnce(&mut Pager<T, X>) -> R,
        changed: impl FnOnce(&R) -> bool,
    ) -> R {
        let (out, publish) = {
            let mut pager = self.pager();
            let out = f(&mut pager);
            let publish = changed(&out);
            if publish {
                self.shared.snapshot.send_replace(pager.snapshot());
            }
            (out, publish)
        };
        if publish {
            self.notify();
        }
        out
    }

    fn notify(&self) {
        let listener = self
            .shared
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    /// Fetch the first page, replacing the list.
    pub async fn load(&self) {
        let Some(ticket) = self.update_if(Pager::begin_load, Option::is_some) else {
            return;
        };
        debug!(list = self.shared.name, generation = ticket.generation, "Loading");

        let result = self
            .shared
            .source
            .first_page(ticket.page)
            .await
            .map_err(|e| e.into_message());

        let applied = self.update_if(|pager| pager.finish_load(ticket, result), |applied| *applied);
        if applied {
            debug!(list = self.shared.name, state = %self.state(), "Load finished");
        } else {
            debug!(
                list = self.shared.name,
                generation = ticket.generation,
                "Discarding stale load"
            );
        }
    }

    /// Fetch the next page and append it. A failure leaves the list as it
    /// was and is reported through `append_error`.
    pub async fn load_more(&self) {
        let Some(ticket) = self.update_if(Pager::begin_load_more, Option::is_some) else {
            debug!(list = self.shared.name, "load_more ignored");
            return;
        };
        debug!(list = self.shared.name, page = ticket.page, "Loading more");

        let result = self
            .shared
            .source
            .next_page(ticket.page)
            .await
            .map_err(|e| e.into_message());

        if let Err(message) = &result {
            warn!(
                list = self.shared.name,
                page = ticket.page,
                error = %message,
                "load_more failed"
            );
        }

        if !self.update_if(|pager| pager.finish_load_more(ticket, result), |applied| *applied) {
            debug!(
                list = self.shared.name,
                page = ticket.page,
                "Discarding stale load_more"
            );
        }
    }

    /// Reload from the first page.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Spawn the initial load.
    pub fn start(&self) {
        self.spawn_load();
    }

    pub fn spawn_load(&self) -> bool {
        let this = self.clone();
        self.shared.tasks.spawn(async move { this.load().await })
    }

    pub fn spawn_load_more(&self) -> bool {
        let this = self.clone();
        self.shared.tasks.spawn(async move { this.load_more().await })
    }

    pub fn spawn_refresh(&self) -> bool {
        let this = self.clone();
        self.shared.tasks.spawn(async move { this.refresh().await })
    }

    /// Abort spawned work and ignore every response still in flight.
    pub fn dispose(&self) {
        self.shared.tasks.dispose();
        self.update(Pager::close);
        debug!(list = self.shared.name, "Disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.pager().is_closed()
    }

    pub fn name(&self) -> &'static str {
        self.shared.name
    }

    pub fn state(&self) -> LoadState {
        self.pager().state().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.pager().items().to_vec()
    }

    pub fn cursor(&self) -> u32 {
        self.pager().cursor()
    }

    pub fn has_more(&self) -> bool {
        self.pager().has_more()
    }

    pub fn is_pristine(&self) -> bool {
        self.pager().is_pristine()
    }
}

#[async_trait]
impl<T, X> ListHandle for ListController<T, X>
where
    T: Clone + Send + Sync + 'static,
    X: Clone + Default + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        ListController::name(self)
    }

    fn state(&self) -> LoadState {
        ListController::state(self)
    }

    fn is_pristine(&self) -> bool {
        ListController::is_pristine(self)
    }

    async fn load(&self) {
        ListController::load(self).await
    }

    async fn load_more(&self) {
        ListController::load_more(self).await
    }

    async fn refresh(&self) {
        ListController::refresh(self).await
    }

    fn dispose(&self) {
        ListController::dispose(self)
    }
}
