//! Immutable view of a collection's derived state.

use super::state::{CollectionState, LoadStatus};
use crate::models::TickerRecord;

/// Everything a renderer reads from the collection view, captured at one
/// point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub status: LoadStatus,
    pub current_page: usize,
    pub page_count: usize,
    pub total_records: usize,
    /// Records on the current page, at most one page long
    pub visible_items: Vec<TickerRecord>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl ViewSnapshot {
    /// Capture the derived state of `state`.
    pub fn capture(state: &CollectionState) -> Self {
        Self {
            status: state.status().clone(),
            current_page: state.current_page(),
            page_count: state.page_count(),
            total_records: state.records().len(),
            visible_items: state.visible_items().to_vec(),
            can_go_previous: state.can_go_previous(),
            can_go_next: state.can_go_next(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    pub fn is_loading(&self) -> bool {
        // Idle only exists for an instant before the load starts; show it as loading
        self.status.is_idle() || self.status.is_loading()
    }

    /// Page indicator text, e.g. `Page 2 of 5`.
    ///
    /// With no records there are zero pages, so only the current page is shown.
    pub fn page_label(&self) -> String {
        if self.page_count == 0 {
            format!("Page {}", self.current_page)
        } else {
            format!("Page {} of {}", self.current_page, self.page_count)
        }
    }
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self::capture(&CollectionState::new())
    }
}
