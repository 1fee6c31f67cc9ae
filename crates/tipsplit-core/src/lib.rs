//! # tipsplit-core: Pure Calculation Logic for tipsplit
//!
//! This crate is the **heart** of tipsplit. It contains all calculation logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       tipsplit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal App (apps/terminal)                   │   │
//! │  │    Bill input ──► Split stepper ──► Tip slider ──► Header      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tipsplit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   calc    │  │ validation│  │   error   │  │   │
//! │  │   │ TipPercent│  │ tip_amount│  │   rules   │  │  typed    │  │   │
//! │  │   │ SplitCount│  │ per person│  │  checks   │  │  errors   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TipPercent, SplitCount)
//! - [`calc`] - The tip and per-person calculations, plus SplitTotals
//! - [`error`] - Typed validation errors
//! - [`validation`] - Input validation (bill text, raw numbers)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, environment, file system access is FORBIDDEN here
//! 3. **Invariants in Types**: A `SplitCount` is never zero, so the per-person
//!    division can never trap
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::calc::SplitTotals;
//! use tipsplit_core::types::{SplitCount, TipPercent};
//! use tipsplit_core::validation::validate_bill_text;
//!
//! // Parse the raw bill field the way the form does
//! let bill = validate_bill_text("50").unwrap();
//!
//! // Tip percent comes off the slider; split off the stepper
//! let tip = TipPercent::from_slider(0.2);
//! let split = SplitCount::clamped(4, tipsplit_core::DEFAULT_MAX_SPLIT);
//!
//! // Recompute all derived outputs in one step
//! let totals = SplitTotals::compute(bill, split, tip);
//! assert_eq!(totals.tip_amount, 10.0);
//! assert_eq!(totals.total_per_person, 15.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tipsplit_core::SplitTotals` instead of
// `use tipsplit_core::calc::SplitTotals`

pub use calc::{tip_amount, total_per_person, SplitTotals};
pub use error::ValidationError;
pub use types::{SplitCount, TipPercent};
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of people a bill can be split between.
///
/// ## Business Reason
/// A bill always has at least one payer. The split stepper bottoms out here
/// and `SplitCount` enforces it structurally, so the per-person division can
/// never divide by zero.
pub const MIN_SPLIT: u32 = 1;

/// Default maximum number of people a bill can be split between.
///
/// ## Business Reason
/// Prevents runaway stepper values and keeps per-person amounts meaningful.
/// Overridable through app configuration (TIPSPLIT_MAX_SPLIT).
pub const DEFAULT_MAX_SPLIT: u32 = 100;
