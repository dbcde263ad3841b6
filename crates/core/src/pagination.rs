//! Infinite-scroll pagination state machine
//!
//! Every paginated screen owns one [`Paginator`]. A load moves the machine
//! `Idle -> Loading -> {Loaded | Empty | Failed}`. Advancing appends the next
//! server page; resetting drops accumulated items and starts again at page
//! zero.
//!
//! Each reset bumps a generation counter. A load records the generation it
//! started in, and its completion is discarded when a reset happened in the
//! meantime. While a load is in flight further advance requests are ignored.
//! Dropping an unfinished load releases that guard and leaves the accumulated
//! items as they were.

use std::future::Future;
use std::sync::Arc;

use carcatalogue_domain::{CatalogueError, Page, PageRequest, Result};
use parking_lot::Mutex;
use tracing::debug;

/// Snapshot of a paginated list.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Loaded { items: Vec<T>, has_more: bool },
    Empty,
    Failed(CatalogueError),
}

/// What happened to a load request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The page was appended.
    Applied { added: usize, has_more: bool },
    Failed(CatalogueError),
    /// Nothing was requested: a load was in flight or the last page is loaded.
    Skipped,
    /// A reset happened while the page was loading; the result was dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed(CatalogueError),
}

#[derive(Debug)]
struct Inner<T> {
    items: Vec<T>,
    next_page: u32,
    has_more: bool,
    phase: Phase,
    generation: u64,
    in_flight: bool,
}

/// Accumulates pages for one list screen. Clones share state.
#[derive(Debug)]
pub struct Paginator<T> {
    inner: Arc<Mutex<Inner<T>>>,
    page_size: u32,
}

impl<T> Clone for Paginator<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner), page_size: self.page_size }
    }
}

impl<T> Paginator<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                items: Vec::new(),
                next_page: 0,
                has_more: true,
                phase: Phase::Idle,
                generation: 0,
                in_flight: false,
            })),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Start a load.
    ///
    /// With `reset` the accumulated items are dropped, any load in flight is
    /// superseded and page zero is requested. Without it the next page is
    /// requested, unless a load is already in flight or the last page has
    /// been reached, in which case `None` is returned.
    pub fn begin(&self, reset: bool) -> Option<LoadTicket<T>> {
        let mut inner = self.inner.lock();
        if reset {
            inner.generation += 1;
            inner.items.clear();
            inner.next_page = 0;
            inner.has_more = true;
        } else if inner.in_flight || !inner.has_more {
            return None;
        }

        let previous = std::mem::replace(&mut inner.phase, Phase::Loading);
        inner.in_flight = true;
        let request = PageRequest::new(inner.next_page, self.page_size);
        debug!(page = request.page, generation = inner.generation, reset, "pagination.begin");

        Some(LoadTicket {
            inner: Arc::clone(&self.inner),
            generation: inner.generation,
            request,
            previous: if reset { Phase::Idle } else { previous },
            settled: false,
        })
    }

    /// Begin a load, run `fetch` for the requested page and apply the result.
    pub async fn load<F, Fut>(&self, reset: bool, fetch: F) -> LoadOutcome
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let Some(ticket) = self.begin(reset) else {
            return LoadOutcome::Skipped;
        };
        let result = fetch(ticket.request().clone()).await;
        ticket.complete(result)
    }

    /// Drop everything and return to `Idle`. Any load in flight is superseded.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.items.clear();
        inner.next_page = 0;
        inner.has_more = true;
        inner.in_flight = false;
        inner.phase = Phase::Idle;
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().in_flight
    }

    pub fn has_more(&self) -> bool {
        self.inner.lock().has_more
    }

    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    /// Remove items locally, without a refetch.
    pub fn retain(&self, mut keep: impl FnMut(&T) -> bool) {
        let mut inner = self.inner.lock();
        inner.items.retain(|item| keep(item));
        if inner.items.is_empty() && inner.phase == Phase::Loaded {
            inner.phase = Phase::Empty;
        }
    }

    /// Edit items in place, e.g. to flip a flag after a toggle.
    pub fn update(&self, mut edit: impl FnMut(&mut T)) {
        let mut inner = self.inner.lock();
        inner.items.iter_mut().for_each(|item| edit(item));
    }
}

impl<T: Clone> Paginator<T> {
    pub fn items(&self) -> Vec<T> {
        self.inner.lock().items.clone()
    }

    pub fn state(&self) -> PageState<T> {
        let inner = self.inner.lock();
        match &inner.phase {
            Phase::Idle => PageState::Idle,
            Phase::Loading => PageState::Loading,
            Phase::Loaded => {
                PageState::Loaded { items: inner.items.clone(), has_more: inner.has_more }
            }
            Phase::Empty => PageState::Empty,
            Phase::Failed(err) => PageState::Failed(err.clone()),
        }
    }
}

/// A load in progress. Complete it with the fetched page, or drop it to
/// abandon the load.
#[must_use = "dropping the ticket abandons the load"]
#[derive(Debug)]
pub struct LoadTicket<T> {
    inner: Arc<Mutex<Inner<T>>>,
    generation: u64,
    request: PageRequest,
    previous: Phase,
    settled: bool,
}

impl<T> LoadTicket<T> {
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn complete(mut self, result: Result<Page<T>>) -> LoadOutcome {
        self.settled = true;
        let mut inner = self.inner.lock();
        if inner.generation != self.generation {
            debug!(page = self.request.page, "pagination.superseded");
            return LoadOutcome::Superseded;
        }
        inner.in_flight = false;

        match result {
            Ok(page) => {
                let has_more = page.has_more();
                let added = page.items.len();
                inner.items.extend(page.items);
                inner.next_page = self.request.page.saturating_add(1);
                inner.has_more = has_more;
                inner.phase = if inner.items.is_empty() { Phase::Empty } else { Phase::Loaded };
                LoadOutcome::Applied { added, has_more }
            }
            Err(err) => {
                inner.phase = Phase::Failed(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }
}

impl<T> Drop for LoadTicket<T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.generation == self.generation {
            inner.in_flight = false;
            inner.phase = std::mem::replace(&mut self.previous, Phase::Idle);
            debug!(page = self.request.page, "pagination.abandoned");
        }
    }
}
