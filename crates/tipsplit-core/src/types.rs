//! # Domain Types
//!
//! Core domain types used throughout tipsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TipPercent    │   │   SplitCount    │   │   SplitTotals   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  pct (u8)       │   │  count (u32)    │   │  tip_amount     │       │
//! │  │  18 = 18%       │   │  always >= 1    │   │  total_per_     │       │
//! │  │  from slider    │   │  stepper ops    │   │    person       │       │
//! │  └─────────────────┘   └─────────────────┘   │  (see calc)     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant-Carrying Newtypes
//! Both input types make their bounds part of the type:
//! - `TipPercent` is derived from the slider and always lands in 0..=100
//! - `SplitCount` cannot hold zero, so dividing by it is always safe

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::MIN_SPLIT;

// =============================================================================
// Tip Percent
// =============================================================================

/// Tip percentage as a whole number (18 = 18%).
///
/// ## Why Whole Percent?
/// The slider contract truncates its position to an integer percentage, so
/// fractional percentages are unrepresentable on purpose. The arithmetic in
/// [`crate::calc`] widens to `f64` at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct TipPercent(u8);

impl TipPercent {
    /// Creates a tip percent from a whole-number percentage.
    ///
    /// Unchecked like the other raw constructors in this crate; callers that
    /// take untrusted numbers go through
    /// [`crate::validation::validate_tip_percent`] first.
    #[inline]
    pub const fn new(pct: u8) -> Self {
        TipPercent(pct)
    }

    /// Derives the tip percent from a slider position in `[0.0, 1.0]`.
    ///
    /// ## Contract
    /// `position × 100`, truncated toward zero, then clamped to 0..=100.
    /// Truncation (not rounding) is what the on-screen slider promises: the
    /// label and the math always agree because both come through here.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::types::TipPercent;
    ///
    /// assert_eq!(TipPercent::from_slider(0.0).percent(), 0);
    /// assert_eq!(TipPercent::from_slider(0.35).percent(), 35);
    /// assert_eq!(TipPercent::from_slider(1.0).percent(), 100);
    /// ```
    pub fn from_slider(position: f32) -> Self {
        // `as` truncates toward zero and saturates, so NaN and out-of-range
        // positions collapse into the clamp below instead of panicking.
        let pct = (position * 100.0) as i32;
        TipPercent(pct.clamp(0, 100) as u8)
    }

    /// Returns the percentage as a whole number.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Zero tip.
    #[inline]
    pub const fn zero() -> Self {
        TipPercent(0)
    }

    /// Checks if the tip percent is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Checked conversion used by serde: a deserialized number above 100 is
/// rejected instead of landing in a percent the slider could never produce.
impl TryFrom<u8> for TipPercent {
    type Error = ValidationError;

    fn try_from(pct: u8) -> Result<Self, Self::Error> {
        crate::validation::validate_tip_percent(u32::from(pct))?;
        Ok(TipPercent(pct))
    }
}

impl Default for TipPercent {
    fn default() -> Self {
        TipPercent::zero()
    }
}

/// Display implementation shows the percent label as rendered next to the
/// slider, e.g. `18%`.
impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill. Always at least 1.
///
/// ## Why a Newtype?
/// `total_per_person` divides by this value. Instead of guarding the division
/// at every call site, zero is made unrepresentable: every constructor either
/// rejects it (`new`) or floors it (`clamped`), and the stepper operations
/// saturate at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct SplitCount(u32);

impl SplitCount {
    /// A single person (the starting value of the stepper).
    #[inline]
    pub const fn one() -> Self {
        SplitCount(MIN_SPLIT)
    }

    /// Creates a split count from a raw number, rejecting zero.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::types::SplitCount;
    ///
    /// assert_eq!(SplitCount::new(4).unwrap().get(), 4);
    /// assert!(SplitCount::new(0).is_err());
    /// ```
    pub fn new(raw: u32) -> Result<Self, ValidationError> {
        if raw < MIN_SPLIT {
            return Err(ValidationError::MustBePositive {
                field: "split count".to_string(),
            });
        }
        Ok(SplitCount(raw))
    }

    /// Creates a split count by clamping a raw number into `[1, max]`.
    ///
    /// This is the interactive path: out-of-range input snaps to the nearest
    /// bound instead of erroring. A `max` below 1 is treated as 1.
    pub fn clamped(raw: u32, max: u32) -> Self {
        SplitCount(raw.clamp(MIN_SPLIT, max.max(MIN_SPLIT)))
    }

    /// Returns the count raised by one, saturating at `max`.
    ///
    /// Mirrors the `+` button: at the top of the range the count stays put.
    #[must_use]
    pub fn incremented(self, max: u32) -> Self {
        if self.0 < max {
            SplitCount(self.0 + 1)
        } else {
            self
        }
    }

    /// Returns the count lowered by one, saturating at 1.
    ///
    /// Mirrors the `-` button: one person is the floor, never zero.
    #[must_use]
    pub fn decremented(self) -> Self {
        if self.0 > MIN_SPLIT {
            SplitCount(self.0 - 1)
        } else {
            SplitCount(MIN_SPLIT)
        }
    }

    /// Returns the raw count.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Checked conversion used by serde: deserialization funnels through
/// [`SplitCount::new`], so a raw zero cannot sidestep the invariant.
impl TryFrom<u32> for SplitCount {
    type Error = ValidationError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        SplitCount::new(raw)
    }
}

/// Default split is a single person.
impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::one()
    }
}

impl fmt::Display for SplitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MAX_SPLIT;

    #[test]
    fn test_tip_percent_from_slider_truncates() {
        assert_eq!(TipPercent::from_slider(0.0).percent(), 0);
        assert_eq!(TipPercent::from_slider(0.25).percent(), 25);
        assert_eq!(TipPercent::from_slider(0.5).percent(), 50);
        assert_eq!(TipPercent::from_slider(0.999).percent(), 99);
        assert_eq!(TipPercent::from_slider(1.0).percent(), 100);
    }

    #[test]
    fn test_tip_percent_from_slider_clamps() {
        assert_eq!(TipPercent::from_slider(-0.5).percent(), 0);
        assert_eq!(TipPercent::from_slider(1.5).percent(), 100);
        assert_eq!(TipPercent::from_slider(f32::NAN).percent(), 0);
    }

    /// Every 20th-of-track position maps to an exact multiple of 5 percent.
    /// This is the grid the arrow keys walk, so none of the reachable
    /// positions may show a truncated-down label.
    #[test]
    fn test_tip_percent_five_percent_grid_is_exact() {
        for step in 0u32..=20 {
            let position = step as f32 / 20.0;
            let pct = TipPercent::from_slider(position).percent();
            assert_eq!(pct as u32, step * 5, "step {step} at position {position}");
        }
    }

    /// Truncation is observable off the 5% grid: 0.53 stored as f32 sits just
    /// below 53/100, so the label reads 52%. Documented contract, not a bug.
    #[test]
    fn test_tip_percent_truncation_off_grid() {
        assert_eq!(TipPercent::from_slider(0.53).percent(), 52);
    }

    #[test]
    fn test_tip_percent_display() {
        assert_eq!(TipPercent::new(18).to_string(), "18%");
        assert_eq!(TipPercent::zero().to_string(), "0%");
        assert!(TipPercent::zero().is_zero());
    }

    #[test]
    fn test_tip_percent_deserialize_is_range_checked() {
        let tip: TipPercent = serde_json::from_str("18").unwrap();
        assert_eq!(tip.percent(), 18);
        assert_eq!(serde_json::to_string(&tip).unwrap(), "18");

        assert!(serde_json::from_str::<TipPercent>("150").is_err());
    }

    #[test]
    fn test_split_count_rejects_zero() {
        assert!(SplitCount::new(0).is_err());
        assert_eq!(SplitCount::new(1).unwrap().get(), 1);
        assert_eq!(SplitCount::new(100).unwrap().get(), 100);
    }

    #[test]
    fn test_split_count_clamped() {
        assert_eq!(SplitCount::clamped(0, DEFAULT_MAX_SPLIT).get(), 1);
        assert_eq!(SplitCount::clamped(7, DEFAULT_MAX_SPLIT).get(), 7);
        assert_eq!(SplitCount::clamped(250, DEFAULT_MAX_SPLIT).get(), 100);
        // Degenerate max still yields a usable count
        assert_eq!(SplitCount::clamped(5, 0).get(), 1);
    }

    #[test]
    fn test_split_count_stepper_saturates() {
        let one = SplitCount::one();
        assert_eq!(one.decremented().get(), 1);
        assert_eq!(one.incremented(DEFAULT_MAX_SPLIT).get(), 2);

        let top = SplitCount::clamped(DEFAULT_MAX_SPLIT, DEFAULT_MAX_SPLIT);
        assert_eq!(top.incremented(DEFAULT_MAX_SPLIT).get(), DEFAULT_MAX_SPLIT);
        assert_eq!(top.decremented().get(), DEFAULT_MAX_SPLIT - 1);
    }

    /// Zero is unrepresentable through every path, serde included: a
    /// deserialized `0` must fail instead of minting a count that would
    /// divide a total by zero.
    #[test]
    fn test_split_count_deserialize_rejects_zero() {
        let split: SplitCount = serde_json::from_str("4").unwrap();
        assert_eq!(split.get(), 4);
        assert_eq!(serde_json::to_string(&split).unwrap(), "4");

        assert!(matches!(
            SplitCount::try_from(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(serde_json::from_str::<SplitCount>("0").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SplitCount::default().get(), 1);
        assert_eq!(TipPercent::default().percent(), 0);
    }
}
