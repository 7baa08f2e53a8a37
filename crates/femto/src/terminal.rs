//! Raw-mode terminal as a scoped resource.
//!
//! [`RawModeGuard`] switches the terminal to raw mode on the alternate screen and puts it back
//! when dropped. A panic hook does the same, since the panic message would otherwise be printed
//! into a raw, alternate screen.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, stdout};
use std::panic;

/// Raw mode is active for as long as this value lives.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enter raw mode and the alternate screen.
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, Drop restores the terminal even if the next step fails.
        let guard = Self { _private: () };
        execute!(stdout(), EnterAlternateScreen)?;
        install_panic_hook();
        tracing::debug!("raw mode enabled");
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        } else {
            tracing::debug!("raw mode disabled");
        }
    }
}

/// Leave the alternate screen, show the cursor and turn raw mode off.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        tracing::error!(panic = %info, "panic");
        previous(info);
    }));
}
