//! Message, keyboard and mouse handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage};
use crate::ui::{handle_click_action, LayoutContext};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::TickersLoaded(outcome) => {
                if !self.view.apply_load(outcome) {
                    tracing::debug!("Load outcome was not applied");
                }
            }
        }
        self.refresh_snapshot();
    }

    /// Handle a key press. Releases and repeats are ignored.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                self.next_page();
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                self.previous_page();
            }
            KeyCode::Down | KeyCode::Char('j') if self.is_card_view() => self.scroll_cards_down(),
            KeyCode::Up | KeyCode::Char('k') if self.is_card_view() => self.scroll_cards_up(),
            _ => {}
        }
    }

    /// Handle a mouse event: clicks on buttons, hover feedback, wheel
    /// scrolling of the card list.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if self.is_card_view() => self.scroll_cards_down(),
            MouseEventKind::ScrollUp if self.is_card_view() => self.scroll_cards_up(),
            _ => {}
        }
    }

    /// Whether the current terminal width selects the card layout.
    pub fn is_card_view(&self) -> bool {
        LayoutContext::new(self.terminal_width, self.terminal_height).use_card_view()
    }
}
