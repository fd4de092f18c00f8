//! Redraw and animation bookkeeping.

use super::App;
use crate::ui::SPINNER_TICKS_PER_FRAME;

impl App {
    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock. Called every loop tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.snapshot.is_loading() && self.tick_count % SPINNER_TICKS_PER_FRAME == 0 {
            self.mark_dirty();
        }
    }

    /// Spinner frame index derived from the tick counter.
    pub fn spinner_frame(&self) -> usize {
        (self.tick_count / SPINNER_TICKS_PER_FRAME) as usize
    }
}
