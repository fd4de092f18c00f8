//! Mock data source for testing.
//!
//! Returns a configured ticker list or error, counts calls, and can hold the
//! fetch open until a test releases it.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::error::{FetchError, FetchResult};
use crate::models::TickerRecord;
use crate::traits::DataSource;

/// Handle that lets a gated [`MockDataSource`] fetch complete.
#[derive(Debug, Clone)]
pub struct MockGate {
    notify: Arc<Notify>,
}

impl MockGate {
    /// Let the waiting fetch return. Safe to call before the fetch starts.
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// Mock data source for testing.
///
/// # Example
///
/// ```ignore
/// use coinpage::adapters::mock::MockDataSource;
///
/// let (source, gate) = MockDataSource::with_records(records).gated();
/// let fetch = tokio::spawn(async move { source.fetch_tickers().await });
/// gate.release();
/// ```
#[derive(Debug)]
pub struct MockDataSource {
    result: Mutex<FetchResult<Vec<TickerRecord>>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockDataSource {
    /// A source that succeeds with `records`.
    pub fn with_records(records: Vec<TickerRecord>) -> Self {
        Self {
            result: Mutex::new(Ok(records)),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// A source that fails with `error`.
    pub fn with_error(error: FetchError) -> Self {
        Self {
            result: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Make every fetch wait until the returned gate is released.
    pub fn gated(mut self) -> (Self, MockGate) {
        let notify = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&notify));
        (self, MockGate { notify })
    }

    /// Replace the configured result.
    pub fn set_result(&self, result: FetchResult<Vec<TickerRecord>>) {
        *self.result.lock().unwrap() = result;
    }

    /// Number of times `fetch_tickers` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn fetch_tickers(&self) -> FetchResult<Vec<TickerRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.lock().unwrap().clone()
    }
}
