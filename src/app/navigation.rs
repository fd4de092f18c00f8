//! Page and card navigation. Page changes go through the collection view.

use super::App;

impl App {
    /// Ask the view for the next page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        let moved = self.view.go_to_next_page();
        self.refresh_snapshot();
        moved
    }

    /// Ask the view for the previous page. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        let moved = self.view.go_to_previous_page();
        self.refresh_snapshot();
        moved
    }

    /// Scroll the card list down by one card.
    pub fn scroll_cards_down(&mut self) {
        let last = self.snapshot.visible_items.len().saturating_sub(1);
        if self.card_scroll < last {
            self.card_scroll += 1;
            self.mark_dirty();
        }
    }

    /// Scroll the card list up by one card.
    pub fn scroll_cards_up(&mut self) {
        if self.card_scroll > 0 {
            self.card_scroll -= 1;
            self.mark_dirty();
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
