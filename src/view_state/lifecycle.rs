//! Ownership of the tasks a controller spawns.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

#[derive(Default)]
struct ScopeInner {
    disposed: bool,
    handles: Vec<JoinHandle<()>>,
}

/// Tracks spawned tasks so they can be aborted together.
///
/// After [`dispose`](Self::dispose) nothing new is spawned. Must be used
/// from inside a tokio runtime.
#[derive(Default)]
pub struct TaskScope {
    inner: Mutex<ScopeInner>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ScopeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Spawn `future` on the runtime. Returns `false` if the scope is
    /// already disposed and the future was dropped.
    pub fn spawn<F>(&self, future: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut inner = self.lock();
        if inner.disposed {
            return false;
        }
        inner.handles.retain(|handle| !handle.is_finished());
        inner.handles.push(tokio::spawn(future));
        true
    }

    /// Abort every task and refuse new ones.
    pub fn dispose(&self) {
        let handles = {
            let mut inner = self.lock();
            inner.disposed = true;
            std::mem::take(&mut inner.handles)
        };
        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Tasks spawned and not yet finished.
    pub fn active(&self) -> usize {
        self.lock()
            .handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}
