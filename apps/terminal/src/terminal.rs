//! # Terminal Lifecycle
//!
//! Raw-mode and alternate-screen handling for the TUI.
//!
//! ## Restore Guarantees
//! The terminal is put back into its normal state on every exit path:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Normal exit ──► TuiRuntime::drop ──► restore_terminal()                │
//! │  Panic ────────► panic hook ───────► restore_terminal() + original hook │
//! │  Error ────────► ? bubbles up ─────► TuiRuntime::drop (as above)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! `restore_terminal` is idempotent, so overlapping paths are harmless.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Sets up the terminal for the TUI.
///
/// Enables raw mode, enters the alternate screen, and builds the terminal
/// instance. Call [`install_panic_hook`] before this so a panic during setup
/// still restores the terminal.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its normal state.
///
/// Leaves the alternate screen (while still in raw mode), then disables raw
/// mode. Safe to call multiple times.
pub fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
///
/// Call this BEFORE [`setup_terminal`]. Without it a panic would leave the
/// shell in raw mode with the panic message swallowed by the alternate screen.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    // Terminal tests need a real TTY, which CI does not provide.
    // Guarantees to verify manually:
    // - Terminal is restored on normal exit (via Drop)
    // - Terminal is restored on panic
    // - Terminal is restored when the event loop returns an error
}
