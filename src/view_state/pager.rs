//! Pure pagination state machine.
//!
//! [`Pager`] holds everything a list screen knows about one list: view
//! state, items, page cursor and the bookkeeping that lets late responses be
//! told apart from current ones. It performs no I/O. Every load is split
//! into a `begin_*` call that hands out a [`Ticket`] and a `finish_*` call
//! that applies the result only if the ticket is still current.
//!
//! ```text
//! begin_load ──→ Loading ──finish_load(Ok)──→ Success ──begin_load_more──┐
//!                   │                            ↑                       │
//!                   └──finish_load(Err)──→ Error  └──finish_load_more─────┘
//! ```

use crate::api::PageIndex;
use crate::models::PagedEnvelope;

use super::load_state::LoadState;

/// One fetched page, reduced to what the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk<T> {
    pub items: Vec<T>,
    /// No page follows this one.
    pub is_last: bool,
}

impl<T> Chunk<T> {
    pub fn new(items: Vec<T>, is_last: bool) -> Self {
        Self { items, is_last }
    }
}

impl<T> From<PagedEnvelope<T>> for Chunk<T> {
    fn from(page: PagedEnvelope<T>) -> Self {
        Self {
            items: page.items,
            is_last: page.is_last_page,
        }
    }
}

/// An unpaged list is always complete.
impl<T> From<Vec<T>> for Chunk<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            is_last: true,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub page: u32,
}

/// Point-in-time copy of a list, as published to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T, X = ()> {
    pub state: LoadState,
    pub items: Vec<T>,
    /// Data loaded alongside the first page (banners on the home feed).
    pub head: X,
    pub cursor: u32,
    pub has_more: bool,
    pub loading_more: bool,
    /// Message of the last failed `load_more`, cleared by the next success.
    pub append_error: Option<String>,
}

impl<T, X: Default> ListSnapshot<T, X> {
    /// What an unloaded list looks like.
    pub fn empty(cursor: u32) -> Self {
        Self {
            state: LoadState::Loading,
            items: Vec::new(),
            head: X::default(),
            cursor,
            has_more: false,
            loading_more: false,
            append_error: None,
        }
    }
}

/// Pagination state for one list.
#[derive(Debug, Clone)]
pub struct Pager<T, X = ()> {
    index: PageIndex,
    state: LoadState,
    items: Vec<T>,
    head: X,
    cursor: u32,
    generation: u64,
    has_more: bool,
    pending_more: Option<Ticket>,
    append_error: Option<String>,
    closed: bool,
}

impl<T: Clone, X: Clone + Default> Pager<T, X> {
    pub fn new(index: PageIndex) -> Self {
        Self {
            index,
            state: LoadState::Loading,
            items: Vec::new(),
            head: X::default(),
            cursor: index.initial(),
            generation: 0,
            has_more: false,
            pending_more: None,
            append_error: None,
            closed: false,
        }
    }

    /// Start a full load of the first page.
    ///
    /// Supersedes every request issued before it, including a pending
    /// `load_more`. Returns `None` once the pager is closed.
    pub fn begin_load(&mut self) -> Option<Ticket> {
        if self.closed {
            return None;
        }
        self.generation += 1;
        self.state = LoadState::Loading;
        self.pending_more = None;
        self.append_error = None;
        Some(Ticket {
            generation: self.generation,
            page: self.index.initial(),
        })
    }

    /// Apply the result of a full load. Returns `false` if the ticket was
    /// superseded and the result dropped.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<(Chunk<T>, X), String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.cursor = self.index.initial();
        match result {
            Ok((chunk, head)) => {
                self.items = chunk.items;
                self.head = head;
                self.has_more = self.index.is_paged() && !chunk.is_last;
                self.state = LoadState::Success;
            }
            Err(message) => {
                self.items.clear();
                self.head = X::default();
                self.has_more = false;
                self.state = LoadState::Error(message);
            }
        }
        true
    }

    /// Advance the cursor and hand out a ticket for the next page.
    ///
    /// `None` unless the list is in Success, has more pages and no other
    /// `load_more` is in flight.
    pub fn begin_load_more(&mut self) -> Option<Ticket> {
        if self.closed
            || !self.state.is_success()
            || !self.has_more
            || self.pending_more.is_some()
        {
            return None;
        }
        self.cursor += 1;
        let ticket = Ticket {
            generation: self.generation,
            page: self.cursor,
        };
        self.pending_more = Some(ticket);
        Some(ticket)
    }

    /// Apply the result of a `load_more`. On failure the cursor steps back
    /// and state and items stay as they were.
    pub fn finish_load_more(&mut self, ticket: Ticket, result: Result<Chunk<T>, String>) -> bool {
        if !self.is_current(ticket) || self.pending_more != Some(ticket) {
            return false;
        }
        self.pending_more = None;
        match result {
            Ok(chunk) => {
                self.items.extend(chunk.items);
                self.has_more = !chunk.is_last;
                self.append_error = None;
            }
            Err(message) => {
                self.cursor = ticket.page.saturating_sub(1).max(self.index.initial());
                self.append_error = Some(message);
            }
        }
        true
    }

    /// Drop every outstanding request and refuse new ones.
    pub fn close(&mut self) {
        self.closed = true;
        self.generation += 1;
        self.pending_more = None;
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        !self.closed && ticket.generation == self.generation
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn head(&self) -> &X {
        &self.head
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading_more(&self) -> bool {
        self.pending_more.is_some()
    }

    pub fn append_error(&self) -> Option<&str> {
        self.append_error.as_deref()
    }

    pub fn page_index(&self) -> PageIndex {
        self.index
    }

    /// No load has ever been issued.
    pub fn is_pristine(&self) -> bool {
        self.generation == 0
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn snapshot(&self) -> ListSnapshot<T, X> {
        ListSnapshot {
            state: self.state.clone(),
            items: self.items.clone(),
            head: self.head.clone(),
            cursor: self.cursor,
            has_more: self.has_more,
            loading_more: self.pending_more.is_some(),
            append_error: self.append_error.clone(),
        }
    }
}
