//! Application state for the TUI.
//!
//! `App` owns the [`PaginatedCollectionView`] and mirrors its latest
//! [`ViewSnapshot`] through a watch channel. The event loop feeds key,
//! mouse and load messages in; the renderer reads `snapshot` out.

mod handlers;
mod messages;
mod navigation;
mod state_methods;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::collection::{PaginatedCollectionView, ViewSnapshot, WatchSubscriber};
use crate::format::NumberFormat;
use crate::traits::DataSource;
use crate::ui::HitAreaRegistry;

/// Main application state
pub struct App {
    /// The paginated collection, the only source of page state
    pub view: PaginatedCollectionView,
    /// Latest snapshot published by the view
    pub snapshot: ViewSnapshot,
    /// Receives a snapshot after every view mutation
    snapshot_rx: watch::Receiver<ViewSnapshot>,
    /// Separators for total supply
    pub number_format: NumberFormat,
    /// Clickable areas registered by the last render
    pub hit_registry: HitAreaRegistry,
    /// Index of the first card shown in card view
    pub card_scroll: usize,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
    /// Set when the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create an app with an idle view subscribed to the snapshot channel.
    pub fn new(number_format: NumberFormat) -> Self {
        let mut view = PaginatedCollectionView::new();
        let (subscriber, mut snapshot_rx) = WatchSubscriber::channel();
        view.subscribe(subscriber);
        let snapshot = snapshot_rx.borrow_and_update().clone();

        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            view,
            snapshot,
            snapshot_rx,
            number_format,
            hit_registry: HitAreaRegistry::new(),
            card_scroll: 0,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            needs_redraw: true,
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Start the view's single load on a background task.
    ///
    /// The result comes back as [`AppMessage::TickersLoaded`]. Returns
    /// `None` if the view has already loaded.
    pub fn start_loading(&mut self, source: Arc<dyn DataSource>) -> Option<JoinHandle<()>> {
        let pending = self.view.start_load(source)?;
        self.refresh_snapshot();

        let tx = self.message_tx.clone();
        Some(tokio::spawn(async move {
            let outcome = pending.run().await;
            // The receiver is gone once the app has shut down
            let _ = tx.send(AppMessage::TickersLoaded(outcome));
        }))
    }

    /// Load in the foreground: start, await the fetch and apply it.
    pub async fn load_now(&mut self, source: Arc<dyn DataSource>) -> bool {
        let applied = self.view.load(source).await;
        self.refresh_snapshot();
        applied
    }

    /// Pull the newest snapshot from the channel if the view published one.
    ///
    /// Returns true if the snapshot changed.
    pub fn refresh_snapshot(&mut self) -> bool {
        if !self.snapshot_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let snapshot = self.snapshot_rx.borrow_and_update().clone();
        if snapshot.current_page != self.snapshot.current_page {
            self.card_scroll = 0;
        }
        self.snapshot = snapshot;
        self.mark_dirty();
        true
    }

    /// Update stored terminal dimensions.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Tear down: dispose the view so a late fetch result is discarded.
    pub fn shutdown(&mut self) {
        self.view.dispose();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataSource;
    use crate::error::{FetchError, FETCH_FAILED_MESSAGE};
    use crate::models::TickerRecord;

    fn records(n: usize) -> Vec<TickerRecord> {
        (1..=n)
            .map(|i| TickerRecord::new(i.to_string(), format!("Coin {}", i), "C", "1", "1"))
            .collect()
    }

    #[test]
    fn test_new_app_is_idle() {
        let app = App::new(NumberFormat::default());
        assert!(app.snapshot.status.is_idle());
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert!(app.message_rx.is_some());
    }

    #[tokio::test]
    async fn test_start_loading_delivers_message() {
        let mut app = App::new(NumberFormat::default());
        let mut rx = app.message_rx.take().unwrap();

        let handle = app
            .start_loading(Arc::new(MockDataSource::with_records(records(12))))
            .unwrap();
        assert!(app.snapshot.status.is_loading());

        handle.await.unwrap();
        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);

        assert!(app.snapshot.status.is_ready());
        assert_eq!(app.snapshot.page_count, 2);
        assert_eq!(app.snapshot.visible_items.len(), 10);
    }

    #[tokio::test]
    async fn test_start_loading_only_once() {
        let mut app = App::new(NumberFormat::default());
        let source: Arc<dyn DataSource> = Arc::new(MockDataSource::with_records(records(1)));

        assert!(app.start_loading(Arc::clone(&source)).is_some());
        assert!(app.start_loading(source).is_none());
    }

    #[tokio::test]
    async fn test_load_now_failure_shows_fixed_message() {
        let mut app = App::new(NumberFormat::default());
        app.load_now(Arc::new(MockDataSource::with_error(FetchError::Other(
            "boom".to_string(),
        ))))
        .await;

        assert_eq!(app.snapshot.error_message(), Some(FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_result_after_shutdown_is_discarded() {
        let (source, gate) = MockDataSource::with_records(records(5)).gated();
        let mut app = App::new(NumberFormat::default());
        let mut rx = app.message_rx.take().unwrap();

        let handle = app.start_loading(Arc::new(source)).unwrap();
        app.shutdown();
        gate.release();
        handle.await.unwrap();

        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);
        assert!(app.view.status().is_loading());
        assert!(app.snapshot.status.is_loading());
    }

    #[tokio::test]
    async fn test_page_change_resets_card_scroll() {
        let mut app = App::new(NumberFormat::default());
        app.load_now(Arc::new(MockDataSource::with_records(records(20))))
            .await;
        app.card_scroll = 4;

        app.next_page();
        assert_eq!(app.card_scroll, 0);
    }

    #[test]
    fn test_refresh_snapshot_without_change() {
        let mut app = App::new(NumberFormat::default());
        app.needs_redraw = false;
        assert!(!app.refresh_snapshot());
        assert!(!app.needs_redraw);
    }
}
