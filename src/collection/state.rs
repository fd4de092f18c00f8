//! Collection state and page arithmetic.

use std::ops::Range;

use crate::models::TickerRecord;

/// Number of records shown per page. Fixed for the lifetime of a view.
pub const PAGE_SIZE: usize = 10;

/// Load status of a collection view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Created, no load attempted yet
    #[default]
    Idle,
    /// The single fetch is in flight
    Loading,
    /// Records are available (possibly none)
    Ready,
    /// The fetch failed; `message` is the fixed user-facing text
    Failed { message: String },
}

impl LoadStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed { .. })
    }

    /// Whether no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        self.is_ready() || self.is_failed()
    }

    /// The error message, present only in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Ready => "ready",
            LoadStatus::Failed { .. } => "failed",
        }
    }
}

/// Number of pages needed for `len` records: `ceil(len / page_size)`.
///
/// Zero records means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of the 1-based `page`, clipped to `len`.
///
/// ```
/// use coinpage::collection::page_bounds;
///
/// assert_eq!(page_bounds(1, 10, 25), 0..10);
/// assert_eq!(page_bounds(3, 10, 25), 20..25);
/// assert_eq!(page_bounds(1, 10, 0), 0..0);
/// ```
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// State owned by one collection view.
///
/// Invariant: `1 <= current_page <= max(1, page_count())`. The page stays at
/// 1 when there are no records.
#[derive(Debug, Clone)]
pub struct CollectionState {
    records: Vec<TickerRecord>,
    status: LoadStatus,
    current_page: usize,
    page_size: usize,
}

impl CollectionState {
    /// Fresh state: idle, no records, page 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            status: LoadStatus::Idle,
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }

    pub fn records(&self) -> &[TickerRecord] {
        &self.records
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.records.len(), self.page_size)
    }

    /// Records on the current page. Recomputed on every call.
    pub fn visible_items(&self) -> &[TickerRecord] {
        &self.records[page_bounds(self.current_page, self.page_size, self.records.len())]
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub(crate) fn complete(&mut self, records: Vec<TickerRecord>) {
        self.records = records;
        self.status = LoadStatus::Ready;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.records.clear();
        self.status = LoadStatus::Failed {
            message: message.into(),
        };
    }

    pub(crate) fn advance_page(&mut self) {
        self.current_page += 1;
    }

    pub(crate) fn retreat_page(&mut self) {
        self.current_page -= 1;
    }
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<TickerRecord> {
        (0..n)
            .map(|i| TickerRecord::new(i.to_string(), format!("Coin {}", i), "C", "1", "1"))
            .collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_page_bounds_clips_to_len() {
        assert_eq!(page_bounds(2, 10, 25), 10..20);
        assert_eq!(page_bounds(3, 10, 25), 20..25);
        assert_eq!(page_bounds(4, 10, 25), 25..25);
        assert_eq!(page_bounds(0, 10, 25), 0..0);
    }

    #[test]
    fn test_new_state() {
        let state = CollectionState::new();
        assert!(state.status().is_idle());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), PAGE_SIZE);
        assert_eq!(state.page_count(), 0);
        assert!(state.visible_items().is_empty());
        assert!(!state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_complete_keeps_source_order() {
        let mut state = CollectionState::new();
        state.begin_loading();
        let input = vec![
            TickerRecord::new("b", "B", "B", "1", "1"),
            TickerRecord::new("a", "A", "A", "1", "1"),
        ];
        state.complete(input.clone());
        assert!(state.status().is_ready());
        assert_eq!(state.records(), input.as_slice());
    }

    #[test]
    fn test_fail_clears_records() {
        let mut state = CollectionState::new();
        state.begin_loading();
        state.fail("nope");
        assert!(state.records().is_empty());
        assert_eq!(state.error_message(), Some("nope"));
        assert!(state.status().is_terminal());
    }

    #[test]
    fn test_visible_items_follow_current_page() {
        let mut state = CollectionState::new();
        state.complete(records(25));
        assert_eq!(state.visible_items().len(), 10);
        assert_eq!(state.visible_items()[0].id, "0");

        state.advance_page();
        state.advance_page();
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.visible_items().len(), 5);
        assert_eq!(state.visible_items()[0].id, "20");
        assert!(state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(LoadStatus::Idle.label(), "idle");
        assert_eq!(LoadStatus::Loading.label(), "loading");
        assert!(!LoadStatus::Loading.is_terminal());
        let failed = LoadStatus::Failed {
            message: "x".to_string(),
        };
        assert_eq!(failed.error_message(), Some("x"));
        assert_eq!(LoadStatus::Ready.error_message(), None);
    }
}
