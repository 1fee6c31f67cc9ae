//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ## Why Multiple State Types?
//! Instead of one grab-bag struct, state is split by responsibility:
//!
//! 1. **BillForm**: The screen's inputs and derived totals
//! 2. **ConfigState**: Read-only settings loaded at startup
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Event Loop (tui.rs)                        │   │
//! │  │  owns App { form, config, should_quit }                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                     │                        │                          │
//! │                     ▼                        ▼                          │
//! │  ┌───────────────────────────┐  ┌───────────────────────────────┐      │
//! │  │        BillForm           │  │        ConfigState            │      │
//! │  │                           │  │                               │      │
//! │  │  bill_text, split,        │  │  currency_symbol,             │      │
//! │  │  slider_position,         │  │  max_split,                   │      │
//! │  │  totals (derived)         │  │  slider_steps                 │      │
//! │  └───────────────────────────┘  └───────────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Everything is owned by the single-threaded event loop               │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{ConfigState, DEFAULT_SLIDER_STEPS};
pub use form::BillForm;

/// Root state owned by the event loop: the form, the config, and the quit
/// flag the key reducer sets.
#[derive(Debug)]
pub struct App {
    /// The calculator screen's state.
    pub form: BillForm,

    /// Read-only configuration.
    pub config: ConfigState,

    /// Set by the reducer when the user asks to leave.
    pub should_quit: bool,
}

impl App {
    /// Creates the app state from loaded configuration.
    pub fn new(config: ConfigState) -> Self {
        App {
            form: BillForm::new(config.max_split),
            config,
            should_quit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_wires_max_split_from_config() {
        let config = ConfigState {
            max_split: 5,
            ..ConfigState::default()
        };
        let mut app = App::new(config);
        app.form.set_bill_text("50");
        for _ in 0..10 {
            app.form.increment_split();
        }
        assert_eq!(app.form.split().get(), 5);
        assert_eq!(app.form.totals().total_per_person, 10.0);
    }
}
