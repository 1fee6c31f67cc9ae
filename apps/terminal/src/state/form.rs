//! # Bill Form State
//!
//! Manages the state of the single calculator screen.
//!
//! ## Recompute-All Discipline
//! Every mutation handler funnels into one private `recompute()` step, so the
//! two derived outputs always move together:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bill Form Operations                                │
//! │                                                                         │
//! │  User Action              Handler                  State Change         │
//! │  ───────────              ───────                  ────────────         │
//! │                                                                         │
//! │  Type digit ─────────────► push_bill_char() ─────► bill_text += c      │
//! │                                                                         │
//! │  Backspace ──────────────► pop_bill_char() ──────► bill_text.pop()     │
//! │                                                                         │
//! │  Press + / - ────────────► increment_split() ────► split ± 1           │
//! │                            decrement_split()       (saturating)        │
//! │                                                                         │
//! │  Arrow key ──────────────► nudge_slider() ───────► slider_position     │
//! │                                                                         │
//! │  Press r ────────────────► reset() ──────────────► back to defaults    │
//! │                                                                         │
//! │  EVERY handler ends in recompute():                                    │
//! │    bill text valid   → totals = SplitTotals::compute(...)              │
//! │    bill text invalid → totals untouched (last good values remain)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why No Mutex?
//! The form is owned by the single-threaded event loop. Nothing else touches
//! it, so plain `&mut self` methods are all the synchronization needed.

use chrono::{DateTime, Utc};
use tipsplit_core::calc::SplitTotals;
use tipsplit_core::types::{SplitCount, TipPercent};
use tipsplit_core::validation::validate_bill_text;
use tipsplit_core::DEFAULT_MAX_SPLIT;

/// The calculator screen's state: three inputs and the derived totals.
///
/// ## Invariants
/// - `totals` always reflects the **last valid** bill text combined with the
///   split and slider values at that moment; invalid text never zeroes it
/// - `split` stays within `[1, max_split]` (enforced by `SplitCount`)
/// - `slider_position` stays within `[0.0, 1.0]`
///
/// Fields are private so every mutation goes through a handler and therefore
/// through `recompute()`.
#[derive(Debug, Clone)]
pub struct BillForm {
    /// Raw bill field exactly as typed (may be invalid mid-edit).
    bill_text: String,

    /// Number of people splitting the bill.
    split: SplitCount,

    /// Tip slider position in [0.0, 1.0].
    slider_position: f32,

    /// Derived outputs from the last successful recompute.
    totals: SplitTotals,

    /// Upper bound for the split stepper.
    max_split: u32,

    /// When this session started (or was last reset).
    started_at: DateTime<Utc>,
}

impl BillForm {
    /// Creates a fresh form: empty bill, one person, slider at zero.
    pub fn new(max_split: u32) -> Self {
        BillForm {
            bill_text: String::new(),
            split: SplitCount::one(),
            slider_position: 0.0,
            totals: SplitTotals::zero(),
            max_split: max_split.max(tipsplit_core::MIN_SPLIT),
            started_at: Utc::now(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The raw bill text as typed.
    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    /// Current split count.
    pub fn split(&self) -> SplitCount {
        self.split
    }

    /// Current slider position in [0.0, 1.0].
    pub fn slider_position(&self) -> f32 {
        self.slider_position
    }

    /// Tip percentage derived from the slider position.
    ///
    /// Both the on-screen label and the arithmetic use this one derivation,
    /// so they can never disagree.
    pub fn tip_percent(&self) -> TipPercent {
        TipPercent::from_slider(self.slider_position)
    }

    /// Derived totals from the last successful recompute.
    pub fn totals(&self) -> SplitTotals {
        self.totals
    }

    /// Whether the current bill text parses as a valid amount.
    ///
    /// The split/tip controls are only shown while this is true.
    pub fn bill_valid(&self) -> bool {
        validate_bill_text(&self.bill_text).is_ok()
    }

    /// When this session started (or was last reset).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // =========================================================================
    // Mutation Handlers
    // =========================================================================

    /// Replaces the whole bill text.
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
        self.recompute();
    }

    /// Appends one character to the bill text.
    ///
    /// The key reducer only routes digits and `.` here, but the form accepts
    /// any character and lets validation decide.
    pub fn push_bill_char(&mut self, c: char) {
        self.bill_text.push(c);
        self.recompute();
    }

    /// Deletes the last character of the bill text.
    pub fn pop_bill_char(&mut self) {
        self.bill_text.pop();
        self.recompute();
    }

    /// Raises the split count by one, saturating at `max_split`.
    pub fn increment_split(&mut self) {
        self.split = self.split.incremented(self.max_split);
        self.recompute();
    }

    /// Lowers the split count by one, saturating at 1.
    pub fn decrement_split(&mut self) {
        self.split = self.split.decremented();
        self.recompute();
    }

    /// Sets the slider position directly, clamped into [0.0, 1.0].
    pub fn set_slider_position(&mut self, position: f32) {
        self.slider_position = if position.is_finite() {
            position.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.recompute();
    }

    /// Moves the slider by whole steps on a `steps`-notch track.
    ///
    /// The new position is recomputed from the notch index rather than by
    /// adding a float delta, so repeated nudges cannot accumulate drift and
    /// the endpoints land exactly on 0.0 and 1.0.
    pub fn nudge_slider(&mut self, delta: i32, steps: u32) {
        // Cap before the cast so `clamp` below always sees ordered bounds,
        // and saturate the add so an extreme delta pins to an endpoint.
        let steps = steps.clamp(1, i32::MAX as u32) as i32;
        let current = (self.slider_position * steps as f32).round() as i32;
        let next = current.saturating_add(delta).clamp(0, steps);
        self.slider_position = next as f32 / steps as f32;
        self.recompute();
    }

    /// Resets the form to its initial state and restarts the session clock.
    pub fn reset(&mut self) {
        self.bill_text.clear();
        self.split = SplitCount::one();
        self.slider_position = 0.0;
        self.totals = SplitTotals::zero();
        self.started_at = Utc::now();
    }

    // =========================================================================
    // Recompute
    // =========================================================================

    /// Recomputes all derived outputs from the current inputs.
    ///
    /// Invalid bill text is silently absorbed: the calculation is skipped and
    /// the previous totals stay on screen, matching the header's behavior of
    /// holding its last good value while the user edits.
    fn recompute(&mut self) {
        if let Ok(bill) = validate_bill_text(&self.bill_text) {
            self.totals = SplitTotals::compute(bill, self.split, self.tip_percent());
        }
    }
}

impl Default for BillForm {
    fn default() -> Self {
        BillForm::new(DEFAULT_MAX_SPLIT)
    }
}
