//! Entering and leaving the alternate screen.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// Switches to the alternate screen, hides the cursor and enables mouse
/// capture so the pagination buttons can be clicked and hovered.
/// Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call more than once. Errors are ignored because this also runs
/// from the panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout after a panic or fatal error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
