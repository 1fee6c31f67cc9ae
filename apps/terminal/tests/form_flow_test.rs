//! End-to-end form sessions driven through the public library API.
//!
//! These tests walk the bill form the way a user would: type an amount,
//! step the split, move the tip slider, make the text invalid, recover,
//! and reset. They assert the contract the screen is built on: derived
//! outputs always move together, and invalid input never clears them.

use tipsplit_tui::state::{App, BillForm, ConfigState};

/// A dinner for four: 84.20 with 20% tip, split four ways.
#[test]
fn test_dinner_for_four() {
    let mut form = BillForm::default();

    for c in "84.20".chars() {
        form.push_bill_char(c);
    }
    assert!(form.bill_valid());

    for _ in 0..3 {
        form.increment_split();
    }
    assert_eq!(form.split().get(), 4);

    // Four notches right on the default 20-notch track = 20%
    for _ in 0..4 {
        form.nudge_slider(1, 20);
    }
    assert_eq!(form.tip_percent().percent(), 20);

    let totals = form.totals();
    assert!((totals.tip_amount - 16.84).abs() < 1e-9);
    assert!((totals.total_per_person - 25.26).abs() < 1e-9);
}

/// Editing the bill mid-session: totals follow every keystroke while the
/// text stays valid, and freeze on the last good value when it does not.
#[test]
fn test_totals_freeze_while_text_is_invalid() {
    let mut form = BillForm::default();

    form.set_bill_text("100");
    form.nudge_slider(2, 20); // 10%
    assert_eq!(form.totals().tip_amount, 10.0);
    assert_eq!(form.totals().total_per_person, 110.0);

    // A second decimal point makes the text unparseable
    form.push_bill_char('.');
    form.push_bill_char('.');
    assert!(!form.bill_valid());

    // The header keeps the last good numbers; slider moves change nothing
    form.nudge_slider(10, 20);
    assert_eq!(form.totals().tip_amount, 10.0);
    assert_eq!(form.totals().total_per_person, 110.0);

    // Deleting back to a valid amount picks up the moved slider at once
    form.pop_bill_char();
    form.pop_bill_char();
    assert!(form.bill_valid());
    assert_eq!(form.tip_percent().percent(), 60);
    assert_eq!(form.totals().tip_amount, 60.0);
    assert_eq!(form.totals().total_per_person, 160.0);
}

/// Clearing the whole field leaves the last computed totals in place, the
/// same way the screen keeps its header while the field is empty.
#[test]
fn test_emptied_field_keeps_header_value() {
    let mut form = BillForm::default();

    form.set_bill_text("60");
    form.increment_split(); // 2 people
    assert_eq!(form.totals().total_per_person, 30.0);

    form.set_bill_text("");
    assert!(!form.bill_valid());
    assert_eq!(form.totals().total_per_person, 30.0);
}

/// Reset gives a fresh session: defaults everywhere, zeroed totals.
#[test]
fn test_reset_starts_over() {
    let mut form = BillForm::default();

    form.set_bill_text("250.75");
    for _ in 0..7 {
        form.increment_split();
    }
    form.set_slider_position(1.0);
    assert!(form.totals().total_per_person > 0.0);

    form.reset();
    assert_eq!(form.bill_text(), "");
    assert_eq!(form.split().get(), 1);
    assert_eq!(form.tip_percent().percent(), 0);
    assert_eq!(form.totals().total_per_person, 0.0);
}

/// The app root wires the configured split ceiling into the form.
#[test]
fn test_config_ceiling_holds_through_a_session() {
    let config = ConfigState {
        max_split: 6,
        ..ConfigState::default()
    };
    let mut app = App::new(config);

    app.form.set_bill_text("120");
    for _ in 0..20 {
        app.form.increment_split();
    }

    assert_eq!(app.form.split().get(), 6);
    assert_eq!(app.form.totals().total_per_person, 20.0);
}

/// An uneven split keeps full precision internally and rounds only at the
/// display edge.
#[test]
fn test_uneven_split_rounds_only_for_display() {
    let config = ConfigState::default();
    let mut form = BillForm::default();

    form.set_bill_text("100");
    form.increment_split();
    form.increment_split(); // 3 people

    let share = form.totals().total_per_person;
    assert!((share - 33.333333333333336).abs() < 1e-12);
    assert_eq!(config.format_amount(share), "$33.33");
}
