//! # TUI Runtime
//!
//! Owns the terminal and the app state, and runs the event loop.
//!
//! ## Architecture
//! - `TuiRuntime`: terminal + state + loop (this module)
//! - `App` (state/): all state, no terminal handles
//! - `update()` (update.rs): the reducer, all mutations happen there
//! - `view()` (ui.rs): pure render, no mutations
//!
//! The loop is fully synchronous: poll one event, reduce, draw. There are no
//! channels and no background tasks because every recompute is a handful of
//! float operations.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::state::{App, ConfigState};
use crate::terminal;
use crate::ui;
use crate::update;

/// Poll timeout per loop iteration. Nothing animates, so a relaxed cadence
/// keeps the idle loop cheap while staying responsive to input.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop, on panic (via the hook), and when the
/// event loop returns an error.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
}

impl TuiRuntime {
    /// Creates the runtime: installs the panic hook, enters the alternate
    /// screen, and builds the initial state.
    pub fn new(config: ConfigState) -> Result<Self> {
        // Panic hook BEFORE entering the alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let app = App::new(config);

        Ok(Self { terminal, app })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        info!(
            max_split = self.app.config.max_split,
            slider_steps = self.app.config.slider_steps,
            "entering interactive screen"
        );

        while !self.app.should_quit {
            if event::poll(POLL_TIMEOUT)? {
                let ev = event::read()?;
                update::update(&mut self.app, &ev);
            }

            // State and terminal are separate fields, so the render borrow
            // never conflicts with the reducer above
            self.terminal.draw(|frame| {
                ui::view(&self.app, frame);
            })?;
        }

        let session = chrono::Utc::now() - self.app.form.started_at();
        debug!(
            bill = %self.app.form.bill_text(),
            split = self.app.form.split().get(),
            tip = %self.app.form.tip_percent(),
            "final form state"
        );
        info!(seconds = session.num_seconds(), "session ended");

        Ok(())
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
