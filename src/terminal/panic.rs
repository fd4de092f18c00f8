//! Panic hook that gives the terminal back before the panic is reported.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then defers to the
/// previously installed hook (color-eyre's, when it is installed first).
///
/// # Example
///
/// ```no_run
/// use coinpage::terminal::setup_panic_hook;
///
/// fn main() -> color_eyre::Result<()> {
///     color_eyre::install()?;
///     setup_panic_hook();
///     Ok(())
/// }
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
