//! Click action handler.
//!
//! Clicks on the pagination buttons are routed into the collection view,
//! exactly like their keyboard equivalents.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    match action {
        ClickAction::PreviousPage => {
            let moved = app.previous_page();
            tracing::debug!("Click: PreviousPage (moved={})", moved);
        }
        ClickAction::NextPage => {
            let moved = app.next_page();
            tracing::debug!("Click: NextPage (moved={})", moved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataSource;
    use crate::format::NumberFormat;
    use crate::models::TickerRecord;
    use std::sync::Arc;

    fn records(n: usize) -> Vec<TickerRecord> {
        (0..n)
            .map(|i| TickerRecord::new(i.to_string(), "Coin", "C", "1", "1"))
            .collect()
    }

    #[tokio::test]
    async fn test_click_next_and_previous() {
        let mut app = App::new(NumberFormat::default());
        app.load_now(Arc::new(MockDataSource::with_records(records(25))))
            .await;

        handle_click_action(&mut app, ClickAction::NextPage);
        assert_eq!(app.snapshot.current_page, 2);

        handle_click_action(&mut app, ClickAction::PreviousPage);
        assert_eq!(app.snapshot.current_page, 1);
    }

    #[test]
    fn test_click_before_load_is_noop() {
        let mut app = App::new(NumberFormat::default());
        app.needs_redraw = false;

        handle_click_action(&mut app, ClickAction::NextPage);
        assert_eq!(app.snapshot.current_page, 1);
        assert!(!app.needs_redraw);
    }
}
