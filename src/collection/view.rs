//! The paginated collection view and its single load.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use super::snapshot::ViewSnapshot;
use super::state::{CollectionState, LoadStatus};
use super::subscriber::ViewSubscriber;
use crate::error::{FetchResult, FETCH_FAILED_MESSAGE};
use crate::models::TickerRecord;
use crate::traits::DataSource;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// A fetch started by [`PaginatedCollectionView::start_load`].
///
/// The future returned by [`run`](Self::run) does not borrow the view, so
/// it can be spawned while the view keeps serving navigation and rendering.
/// Its [`LoadOutcome`] is handed back through
/// [`PaginatedCollectionView::apply_load`].
pub struct PendingLoad {
    view_id: u64,
    source: Arc<dyn DataSource>,
    active: Arc<AtomicBool>,
}

impl PendingLoad {
    /// Id of the view this load belongs to.
    pub fn view_id(&self) -> u64 {
        self.view_id
    }

    /// Whether the owning view has not been disposed yet.
    pub fn is_view_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Invoke the data source once and wrap its result.
    pub async fn run(self) -> LoadOutcome {
        tracing::debug!(view_id = self.view_id, "Fetching ticker collection");
        let result = self.source.fetch_tickers().await;
        if !self.is_view_active() {
            tracing::debug!(
                view_id = self.view_id,
                "Fetch settled after the view was disposed"
            );
        }
        LoadOutcome {
            view_id: self.view_id,
            result,
        }
    }
}

impl fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLoad")
            .field("view_id", &self.view_id)
            .field("view_active", &self.is_view_active())
            .finish()
    }
}

/// Result of a [`PendingLoad`], tagged with the view it belongs to.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    view_id: u64,
    result: FetchResult<Vec<TickerRecord>>,
}

impl LoadOutcome {
    pub fn view_id(&self) -> u64 {
        self.view_id
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Client-side paginated view over the ticker collection.
///
/// Owns a [`CollectionState`], drives its load state machine exactly once,
/// and notifies [`ViewSubscriber`]s with a fresh [`ViewSnapshot`] after each
/// mutation. Operations that would not change anything are silent no-ops.
///
/// Once [`dispose`](Self::dispose) has been called (or the view dropped),
/// nothing can mutate the state any more and no subscriber is notified.
pub struct PaginatedCollectionView {
    id: u64,
    state: CollectionState,
    subscribers: Vec<Box<dyn ViewSubscriber>>,
    active: Arc<AtomicBool>,
    load_started: bool,
}

impl PaginatedCollectionView {
    /// Create an idle view. Most callers want [`mount`](Self::mount).
    pub fn new() -> Self {
        Self {
            id: NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed),
            state: CollectionState::new(),
            subscribers: Vec::new(),
            active: Arc::new(AtomicBool::new(true)),
            load_started: false,
        }
    }

    /// Create a view and immediately start its single load.
    pub fn mount(source: Arc<dyn DataSource>) -> (Self, PendingLoad) {
        let mut view = Self::new();
        let pending = view.begin_load(source);
        (view, pending)
    }

    /// Move from `Idle` to `Loading` and hand out the fetch.
    ///
    /// Returns `None` if a load was already started or the view is disposed:
    /// a view fetches at most once in its lifetime.
    pub fn start_load(&mut self, source: Arc<dyn DataSource>) -> Option<PendingLoad> {
        if !self.is_active() || self.load_started {
            tracing::debug!(view_id = self.id, "Ignoring repeated load request");
            return None;
        }
        Some(self.begin_load(source))
    }

    fn begin_load(&mut self, source: Arc<dyn DataSource>) -> PendingLoad {
        self.load_started = true;
        self.state.begin_loading();
        tracing::info!(view_id = self.id, "Loading ticker collection");
        self.notify();

        PendingLoad {
            view_id: self.id,
            source,
            active: Arc::clone(&self.active),
        }
    }

    /// Apply the result of this view's load.
    ///
    /// Returns `true` if the state changed. The outcome is discarded when the
    /// view has been disposed, when it belongs to another view, or when the
    /// load has already settled. Failures of any kind become `Failed` with
    /// [`FETCH_FAILED_MESSAGE`]; the raw error only reaches the log.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        if !self.is_active() {
            tracing::warn!(view_id = self.id, "Discarding load result for disposed view");
            return false;
        }
        if outcome.view_id != self.id {
            tracing::warn!(
                view_id = self.id,
                outcome_view_id = outcome.view_id,
                "Discarding load result that belongs to another view"
            );
            return false;
        }
        if !self.state.status().is_loading() {
            tracing::warn!(
                view_id = self.id,
                status = self.state.status().label(),
                "Discarding load result, no load in flight"
            );
            return false;
        }

        match outcome.result {
            Ok(records) => {
                tracing::info!(
                    view_id = self.id,
                    records = records.len(),
                    "Ticker collection loaded"
                );
                self.state.complete(records);
            }
            Err(err) => {
                tracing::error!(
                    view_id = self.id,
                    code = err.error_code(),
                    error = %err,
                    "Ticker fetch failed"
                );
                self.state.fail(FETCH_FAILED_MESSAGE);
            }
        }
        self.notify();
        true
    }

    /// Start the load, wait for it and apply it, for callers that can hold
    /// the view across the fetch.
    pub async fn load(&mut self, source: Arc<dyn DataSource>) -> bool {
        match self.start_load(source) {
            Some(pending) => {
                let outcome = pending.run().await;
                self.apply_load(outcome)
            }
            None => false,
        }
    }

    /// Advance one page. No-op unless `Ready` with a next page available.
    pub fn go_to_next_page(&mut self) -> bool {
        if !self.can_navigate() || !self.state.can_go_next() {
            return false;
        }
        self.state.advance_page();
        tracing::debug!(view_id = self.id, page = self.state.current_page(), "Next page");
        self.notify();
        true
    }

    /// Go back one page. No-op unless `Ready` and past the first page.
    pub fn go_to_previous_page(&mut self) -> bool {
        if !self.can_navigate() || !self.state.can_go_previous() {
            return false;
        }
        self.state.retreat_page();
        tracing::debug!(
            view_id = self.id,
            page = self.state.current_page(),
            "Previous page"
        );
        self.notify();
        true
    }

    fn can_navigate(&self) -> bool {
        self.is_active() && self.state.status().is_ready()
    }

    /// Records on the current page, at most one page long.
    pub fn visible_slice(&self) -> &[TickerRecord] {
        self.state.visible_items()
    }

    /// Capture the current derived state.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(&self.state)
    }

    /// Register a subscriber. It receives the current snapshot right away,
    /// then one after every mutation. Ignored once the view is disposed.
    pub fn subscribe(&mut self, mut subscriber: impl ViewSubscriber + 'static) {
        if !self.is_active() {
            return;
        }
        subscriber.on_change(&self.snapshot());
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deactivate the view. Pending loads settle into nothing and
    /// subscribers are released.
    pub fn dispose(&mut self) {
        if self.active.swap(false, Ordering::AcqRel) {
            tracing::info!(
                view_id = self.id,
                status = self.state.status().label(),
                "Collection view disposed"
            );
            self.subscribers.clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn status(&self) -> &LoadStatus {
        self.state.status()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for subscriber in &mut self.subscribers {
            subscriber.on_change(&snapshot);
        }
    }
}

impl Default for PaginatedCollectionView {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PaginatedCollectionView {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for PaginatedCollectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedCollectionView")
            .field("id", &self.id)
            .field("status", self.state.status())
            .field("current_page", &self.state.current_page())
            .field("records", &self.state.records().len())
            .field("subscribers", &self.subscribers.len())
            .field("active", &self.is_active())
            .finish()
    }
}
