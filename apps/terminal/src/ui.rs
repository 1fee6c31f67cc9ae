//! # View Layer
//!
//! Pure render functions for the single calculator screen. Functions here
//! take `&App` by immutable reference, draw to a ratatui frame, and never
//! mutate state.
//!
//! ## Screen Layout
//! ```text
//! ┌ Total Per Person ───────────────────────────┐
//! │                  $55.00                     │   header (always visible,
//! └─────────────────────────────────────────────┘    holds last good value)
//! ┌ Bill ───────────────────────────────────────┐
//! │ 100█                                        │   bill input
//! └─────────────────────────────────────────────┘
//! ┌ Split & Tip ────────────────────────────────┐
//! │ Split        [-]  2  [+]                    │
//! │ Tip          $10.00                         │   only rendered while the
//! │                                             │   bill text is valid
//! │                    10%                      │
//! │ ━━━●─────────────────────────────────────── │
//! └─────────────────────────────────────────────┘
//!  type amount · +/- split · ←/→ tip · r reset
//! ```

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::App;

/// Height of the per-person header panel.
const HEADER_HEIGHT: u16 = 5;

/// Height of the bill input panel.
const INPUT_HEIGHT: u16 = 3;

/// Height of the key-hint footer.
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire screen to the frame.
///
/// This is a pure render function: it only reads state and draws.
pub fn view(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(7),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_bill_input(app, frame, chunks[1]);

    // The split/tip controls exist only while the bill parses; invalid text
    // leaves the region blank, while the header above keeps its last value
    if app.form.bill_valid() {
        render_controls(app, frame, chunks[2]);
    }

    render_footer(frame, chunks[3]);
}

/// Renders the "Total Per Person" header with the formatted share.
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let amount = app.config.format_amount(app.form.totals().total_per_person);

    let lines = vec![
        Line::raw(""),
        Line::styled(
            amount,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Total Per Person "),
    );
    frame.render_widget(header, area);
}

/// Renders the bill input line with a block cursor.
fn render_bill_input(app: &App, frame: &mut Frame, area: Rect) {
    let text = app.form.bill_text();

    let line = if text.is_empty() {
        Line::from(vec![
            Span::styled("Enter bill", Style::default().fg(Color::DarkGray)),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(text.to_string()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ])
    };

    let input = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Bill "));
    frame.render_widget(input, area);
}

/// Renders the split stepper, tip amount, and tip slider.
fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Split & Tip ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // split stepper
            Constraint::Length(1), // tip amount
            Constraint::Length(1), // spacer
            Constraint::Length(1), // percent label
            Constraint::Length(1), // slider track
        ])
        .split(inner);

    let key_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().add_modifier(Modifier::BOLD);

    let split_row = Line::from(vec![
        Span::raw(format!("{:<12}", "Split")),
        Span::styled("[-]", key_style),
        Span::styled(format!(" {:^3} ", app.form.split()), value_style),
        Span::styled("[+]", key_style),
    ]);
    frame.render_widget(Paragraph::new(split_row), rows[0]);

    let tip_row = Line::from(vec![
        Span::raw(format!("{:<12}", "Tip")),
        Span::raw(app.config.format_amount(app.form.totals().tip_amount)),
    ]);
    frame.render_widget(Paragraph::new(tip_row), rows[1]);

    let percent = Paragraph::new(app.form.tip_percent().to_string()).alignment(Alignment::Center);
    frame.render_widget(percent, rows[3]);

    let track = slider_track(app.form.slider_position(), rows[4].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(track, Style::default().fg(Color::Cyan))),
        rows[4],
    );
}

/// Renders the one-line key hint footer.
fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::styled(
        " type amount · +/- split · ←/→ tip · r reset · q quit",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(Paragraph::new(hints), area);
}

/// Builds the slider track string: a knob on a line, `width` cells wide.
///
/// The knob cell is chosen by rounding, purely a visual placement. The tip
/// percentage shown above the track comes from the truncating contract in
/// `TipPercent::from_slider`, not from this function.
fn slider_track(position: f32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let last = width - 1;
    let knob = ((position * last as f32).round() as usize).min(last);

    let mut track = String::with_capacity(width * 3);
    for _ in 0..knob {
        track.push('━');
    }
    track.push('●');
    for _ in knob..last {
        track.push('─');
    }
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_track_endpoints() {
        assert_eq!(slider_track(0.0, 5), "●────");
        assert_eq!(slider_track(1.0, 5), "━━━━●");
    }

    #[test]
    fn test_slider_track_midpoint() {
        assert_eq!(slider_track(0.5, 5), "━━●──");
    }

    #[test]
    fn test_slider_track_width_is_respected() {
        for width in [1usize, 2, 10, 80] {
            for pos in [0.0f32, 0.33, 0.5, 0.99, 1.0] {
                assert_eq!(slider_track(pos, width).chars().count(), width);
            }
        }
        assert_eq!(slider_track(0.5, 0), "");
    }
}
