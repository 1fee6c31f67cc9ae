//! # Calculation Module
//!
//! The two pure functions at the heart of tipsplit, plus the [`SplitTotals`]
//! bundle that carries their results to the presentation layer.
//!
//! ## Derivation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HOW THE NUMBERS RELATE                                                 │
//! │                                                                         │
//! │  bill_total ──┬──► tip_amount = bill × pct / 100                        │
//! │               │                                                         │
//! │               └──► total_per_person = (bill + tip_amount) / split       │
//! │                                                                         │
//! │  Both outputs are DERIVED: they are recomputed together from the        │
//! │  current inputs on every change and never patched independently.        │
//! │  Updating one without the other is how stale-total bugs happen.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numeric Model
//! Plain IEEE-754 `f64` arithmetic, no rounding. `100 / 3` keeps its
//! repeating fraction here; the presentation layer formats to two decimal
//! places for display only. Division by zero cannot happen because
//! [`SplitCount`] cannot hold zero.
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::calc::{tip_amount, total_per_person, SplitTotals};
//! use tipsplit_core::types::{SplitCount, TipPercent};
//!
//! let tip = TipPercent::new(10);
//! let split = SplitCount::new(2).unwrap();
//!
//! assert_eq!(tip_amount(100.0, tip), 10.0);
//! assert_eq!(total_per_person(100.0, split, tip), 55.0);
//!
//! // Or both at once, the way the form consumes them:
//! let totals = SplitTotals::compute(100.0, split, tip);
//! assert_eq!(totals.tip_amount, 10.0);
//! assert_eq!(totals.total_per_person, 55.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{SplitCount, TipPercent};

// =============================================================================
// Core Functions
// =============================================================================

/// Calculates the tip amount for a bill.
///
/// ## Formula
/// `bill_total × pct / 100`
///
/// ## Contract
/// `bill_total` is expected to be a validated, non-negative amount (see
/// [`crate::validation::validate_bill_text`]). The function itself does not
/// guard: it is pure arithmetic, and garbage in yields garbage out.
///
/// ## Example
/// ```rust
/// use tipsplit_core::calc::tip_amount;
/// use tipsplit_core::types::TipPercent;
///
/// assert_eq!(tip_amount(50.0, TipPercent::new(20)), 10.0);
/// assert_eq!(tip_amount(73.50, TipPercent::zero()), 0.0);
/// ```
#[inline]
pub fn tip_amount(bill_total: f64, tip: TipPercent) -> f64 {
    bill_total * f64::from(tip.percent()) / 100.0
}

/// Calculates each person's share of the bill plus tip.
///
/// ## Formula
/// `(bill_total + tip_amount) / split`
///
/// ## User Workflow
/// ```text
/// Bill: $100.00, Tip: 10%, Split: 2
///      │
///      ▼
/// tip_amount(100, 10%) = $10.00
///      │
///      ▼
/// total_per_person ← THIS FUNCTION
///      │
///      ▼
/// ($100.00 + $10.00) / 2 = $55.00 each
/// ```
///
/// The division is structurally safe: [`SplitCount`] is at least 1 by
/// construction.
#[inline]
pub fn total_per_person(bill_total: f64, split: SplitCount, tip: TipPercent) -> f64 {
    (bill_total + tip_amount(bill_total, tip)) / f64::from(split.get())
}

// =============================================================================
// Split Totals
// =============================================================================

/// The derived outputs of a calculation, bundled for the presentation layer.
///
/// This is the unit of recomputation: whenever any input changes, the form
/// replaces its whole `SplitTotals` with a freshly computed one. There is no
/// way to update the tip amount without the per-person total coming along.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitTotals {
    /// Monetary value of the tip (unrounded).
    pub tip_amount: f64,

    /// Each person's share of bill plus tip (unrounded).
    pub total_per_person: f64,
}

impl SplitTotals {
    /// Recomputes all derived outputs from the current inputs.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::calc::SplitTotals;
    /// use tipsplit_core::types::{SplitCount, TipPercent};
    ///
    /// let totals = SplitTotals::compute(50.0, SplitCount::new(4).unwrap(), TipPercent::new(20));
    /// assert_eq!(totals.tip_amount, 10.0);
    /// assert_eq!(totals.total_per_person, 15.0);
    /// ```
    pub fn compute(bill_total: f64, split: SplitCount, tip: TipPercent) -> Self {
        SplitTotals {
            tip_amount: tip_amount(bill_total, tip),
            total_per_person: total_per_person(bill_total, split, tip),
        }
    }

    /// Zeroed totals (the state before any valid bill has been entered).
    #[inline]
    pub const fn zero() -> Self {
        SplitTotals {
            tip_amount: 0.0,
            total_per_person: 0.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
