//! # tipsplit Terminal Library
//!
//! Core library for the tipsplit terminal application.
//! This is the entry point that wires configuration, logging, and the two
//! run modes together.
//!
//! ## Module Organization
//! ```text
//! tipsplit_tui/
//! ├── lib.rs          ◄─── You are here (startup & mode dispatch)
//! ├── cli.rs          ◄─── Flag parsing + one-shot mode
//! ├── tui.rs          ◄─── Event loop runtime
//! ├── terminal.rs     ◄─── Raw mode / alternate screen lifecycle
//! ├── ui.rs           ◄─── Pure render functions
//! ├── update.rs       ◄─── Key event reducer
//! └── state/
//!     ├── mod.rs      ◄─── App root state
//!     ├── form.rs     ◄─── Bill form (inputs + derived totals)
//!     └── config.rs   ◄─── Configuration state
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber to stderr, env filter                          │
//! │     • Default: WARN (quiet; RUST_LOG=tipsplit_tui=debug to diagnose)    │
//! │                                                                         │
//! │  2. Parse Flags ──────────────────────────────────────────────────────► │
//! │     • --bill present → one-shot mode, print and exit                    │
//! │     • no flags       → interactive screen (requires a TTY)              │
//! │                                                                         │
//! │  3. Load Configuration ───────────────────────────────────────────────► │
//! │     • Defaults, then TIPSPLIT_* environment overrides                   │
//! │                                                                         │
//! │  4. Run ──────────────────────────────────────────────────────────────► │
//! │     • TuiRuntime: panic hook, alternate screen, event loop              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod state;
pub mod terminal;
pub mod tui;
pub mod ui;
pub mod update;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;
use crate::state::ConfigState;
use crate::tui::TuiRuntime;

/// Runs the application.
///
/// Dispatches between the one-shot mode (`--bill` given) and the interactive
/// screen (no flags).
pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ConfigState::from_env();

    if cli.bill.is_some() {
        return cli::run_one_shot(&cli, &config);
    }

    // The interactive screen needs a real terminal to render into
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `tipsplit --bill <AMOUNT>` for non-interactive output."
        );
    }

    info!("starting interactive mode");
    TuiRuntime::new(config)?.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Output goes to stderr so stdout stays free for the one-shot output and the
/// TUI canvas. Default level is WARN; raise it per target when diagnosing:
///
/// ```bash
/// RUST_LOG=tipsplit_tui=debug tipsplit 2>tipsplit.log
/// ```
///
/// (Redirect stderr in interactive mode, otherwise log lines scribble over
/// the alternate screen.)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
