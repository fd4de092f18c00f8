//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw, alternate-screen mode and
//! puts it back when dropped, whether the app exits normally or unwinds.
//!
//! # Example
//!
//! ```no_run
//! use coinpage::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw frames ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal on drop. Created by `TerminalManager`.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal now. Later calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
///
/// Install [`setup_panic_hook`] before creating one so a panic does not
/// leave the shell in raw mode.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with mouse capture and
    /// clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard restores the terminal even if setup fails
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Get the current terminal size.
    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
