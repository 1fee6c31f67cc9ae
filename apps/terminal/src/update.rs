//! # Update Layer
//!
//! The reducer: all state mutations triggered by terminal events happen here.
//!
//! ## Key Bindings
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key                 Handler                      Effect                │
//! │  ───                 ───────                      ──────                │
//! │  0-9, .              form.push_bill_char          edit bill text        │
//! │  Backspace           form.pop_bill_char           edit bill text        │
//! │  + or ]              form.increment_split         one more person       │
//! │  - or [              form.decrement_split         one fewer person      │
//! │  Left / Right        form.nudge_slider            tip down / up a notch │
//! │  Home / End          form.set_slider_position     tip to 0% / 100%      │
//! │  r                   form.reset                   fresh form            │
//! │  q, Esc, Ctrl-C      should_quit = true           leave                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every binding funnels into a `BillForm` handler, and every handler ends in
//! a full recompute, so no key can move one derived output without the other.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::state::App;

/// Processes one terminal event through the reducer.
pub fn update(app: &mut App, event: &Event) {
    if let Event::Key(key) = event {
        // Windows terminals deliver both Press and Release; act on Press only
        if matches!(key.kind, KeyEventKind::Release) {
            return;
        }
        handle_key(app, key);
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            debug!("ctrl-c pressed, quitting");
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            debug!("quit requested");
            app.should_quit = true;
        }
        KeyCode::Char(c @ ('0'..='9' | '.')) => {
            debug!(char = %c, "bill input");
            app.form.push_bill_char(c);
        }
        KeyCode::Backspace => {
            debug!("bill backspace");
            app.form.pop_bill_char();
        }
        KeyCode::Char('+') | KeyCode::Char(']') => {
            app.form.increment_split();
            debug!(split = app.form.split().get(), "split incremented");
        }
        KeyCode::Char('-') | KeyCode::Char('[') => {
            app.form.decrement_split();
            debug!(split = app.form.split().get(), "split decremented");
        }
        KeyCode::Right => {
            app.form.nudge_slider(1, app.config.slider_steps);
            debug!(tip = %app.form.tip_percent(), "slider nudged right");
        }
        KeyCode::Left => {
            app.form.nudge_slider(-1, app.config.slider_steps);
            debug!(tip = %app.form.tip_percent(), "slider nudged left");
        }
        KeyCode::Home => {
            app.form.set_slider_position(0.0);
            debug!("slider to start");
        }
        KeyCode::End => {
            app.form.set_slider_position(1.0);
            debug!("slider to end");
        }
        KeyCode::Char('r') => {
            debug!("form reset");
            app.form.reset();
        }
        _ => {}
    }
}
