//! Panic hook for terminal restoration.
//!
//! Restores the terminal before the panic message is printed, so the message
//! is readable and the shell is usable afterwards.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call after `color_eyre::install()` so the original hook being chained is
/// color-eyre's report printer.
///
/// # Example
///
/// ```no_run
/// use sdprep::terminal::setup_panic_hook;
///
/// fn main() -> color_eyre::Result<()> {
///     color_eyre::install()?;
///     setup_panic_hook();
///     // ... rest of initialization ...
///     Ok(())
/// }
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // The log file is the only trace left once the screen is restored
        tracing::error!(%panic_info, "panic");
        emergency_restore();
        original_hook(panic_info);
    }));
}
