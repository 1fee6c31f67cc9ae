//! # Validation Module
//!
//! Input validation utilities for tipsplit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input capture (terminal app)                                 │
//! │  ├── TUI accepts only digits and '.' into the bill field               │
//! │  └── CLI flags are typed by clap before they reach us                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Bill text: non-empty, parses, finite, not negative                │
//! │  └── Raw numbers: range checks with field-named errors                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Type invariants (types module)                               │
//! │  ├── SplitCount cannot hold zero                                       │
//! │  └── TipPercent is bounded by the slider contract                      │
//! │                                                                         │
//! │  Defense in depth: the calculation itself never sees bad input         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::validation::{validate_bill_text, validate_split_count};
//!
//! // Parse and validate the raw bill field in one step
//! let amount = validate_bill_text(" 84.20 ").unwrap();
//! assert_eq!(amount, 84.20);
//!
//! // Range-check a raw split count before constructing SplitCount
//! validate_split_count(4, 100).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Bill Text Validator
// =============================================================================

/// Validates and parses the raw bill text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must parse as a decimal number
/// - Must be finite (`inf` and `NaN` parse but are rejected)
/// - Must not be negative
///
/// ## Returns
/// The parsed bill amount.
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::validate_bill_text;
///
/// assert_eq!(validate_bill_text("42").unwrap(), 42.0);
/// assert_eq!(validate_bill_text("19.95").unwrap(), 19.95);
/// assert!(validate_bill_text("").is_err());
/// assert!(validate_bill_text("lunch").is_err());
/// assert!(validate_bill_text("-3").is_err());
/// ```
pub fn validate_bill_text(text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "bill total".to_string(),
        });
    }

    let amount: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "bill total".to_string(),
        reason: "not a number".to_string(),
    })?;

    // "inf" and "NaN" satisfy the float grammar but are meaningless as bills
    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "bill total".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "bill total".to_string(),
        });
    }

    Ok(amount)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a raw split count against the configured maximum.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max`
///
/// Used on the one-shot `--split` flag; the interactive path goes through
/// `SplitCount::clamped` instead and never errors.
pub fn validate_split_count(raw: u32, max: u32) -> ValidationResult<()> {
    if raw == 0 {
        return Err(ValidationError::MustBePositive {
            field: "split count".to_string(),
        });
    }

    if raw > max {
        return Err(ValidationError::OutOfRange {
            field: "split count".to_string(),
            min: 1,
            max: max as i64,
        });
    }

    Ok(())
}

/// Validates a raw tip percentage.
///
/// ## Rules
/// - Must be between 0 and 100
///
/// The slider path is bounded by construction; this guards the one-shot
/// `--tip` flag.
pub fn validate_tip_percent(pct: u32) -> ValidationResult<()> {
    if pct > 100 {
        return Err(ValidationError::OutOfRange {
            field: "tip percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bill_text_accepts() {
        assert_eq!(validate_bill_text("42").unwrap(), 42.0);
        assert_eq!(validate_bill_text("19.95").unwrap(), 19.95);
        assert_eq!(validate_bill_text("  73.50  ").unwrap(), 73.5);
        assert_eq!(validate_bill_text("0").unwrap(), 0.0);
        assert_eq!(validate_bill_text(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_validate_bill_text_empty() {
        assert!(matches!(
            validate_bill_text(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_bill_text("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_bill_text_rejects_garbage() {
        assert!(matches!(
            validate_bill_text("lunch"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_bill_text("12.3.4"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_bill_text("$40"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        // Comma decimal separators are not supported
        assert!(matches!(
            validate_bill_text("40,00"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_bill_text_rejects_non_finite() {
        assert!(matches!(
            validate_bill_text("inf"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_bill_text("NaN"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_bill_text_rejects_negative() {
        assert!(matches!(
            validate_bill_text("-3"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_bill_text("-0.01"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_validate_split_count() {
        assert!(validate_split_count(1, 100).is_ok());
        assert!(validate_split_count(100, 100).is_ok());

        assert!(matches!(
            validate_split_count(0, 100),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_split_count(101, 100),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_tip_percent() {
        assert!(validate_tip_percent(0).is_ok());
        assert!(validate_tip_percent(18).is_ok());
        assert!(validate_tip_percent(100).is_ok());
        assert!(validate_tip_percent(101).is_err());
    }
}
