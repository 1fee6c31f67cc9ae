//! # Error Types
//!
//! Domain-specific error types for tipsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors (in app)                                          │
//! │  └── anyhow::Error    - Terminal setup/teardown context                │
//! │                                                                         │
//! │  Flow: ValidationError → form keeps last good totals (interactive)     │
//! │        ValidationError → non-zero exit with message (one-shot)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! There is no second tier of business errors: the calculation itself cannot
//! fail once its inputs pass validation, so everything that can go wrong is a
//! `ValidationError`.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any calculation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., bill text that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive (> 0).
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "bill total".to_string(),
        };
        assert_eq!(err.to_string(), "bill total is required");

        let err = ValidationError::InvalidFormat {
            field: "bill total".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bill total has invalid format: not a number"
        );

        let err = ValidationError::OutOfRange {
            field: "split count".to_string(),
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "split count must be between 1 and 100");
    }

    #[test]
    fn test_sign_rule_messages() {
        let err = ValidationError::MustBePositive {
            field: "split count".to_string(),
        };
        assert_eq!(err.to_string(), "split count must be positive");

        let err = ValidationError::MustBeNonNegative {
            field: "bill total".to_string(),
        };
        assert_eq!(err.to_string(), "bill total must not be negative");
    }
}
