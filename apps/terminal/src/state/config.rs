//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPSPLIT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no synchronization is
//! needed.

use tipsplit_core::DEFAULT_MAX_SPLIT;

/// Default number of notches on the tip slider track.
///
/// 20 notches give 5% increments. Every 20th-of-track position maps to an
/// exact multiple of 5 percent under the truncating slider contract; finer
/// tracks can land a hair below a whole percent and display one less than
/// the notch suggests.
pub const DEFAULT_SLIDER_STEPS: u32 = 20;

/// Application configuration.
///
/// ## Fields
/// All fields have sensible defaults; the environment can override them for
/// non-dollar currencies or different stepper bounds.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency display
    pub currency_decimals: u8,

    /// Maximum number of people a bill can be split between
    pub max_split: u32,

    /// Number of notches on the tip slider track
    pub slider_steps: u32,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Currency: "$", two decimals
    /// - Split: up to 100 people
    /// - Slider: 20 notches (5% per arrow key press)
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            max_split: DEFAULT_MAX_SPLIT,
            slider_steps: DEFAULT_SLIDER_STEPS,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIPSPLIT_CURRENCY`: Override currency symbol (e.g., "€")
    /// - `TIPSPLIT_MAX_SPLIT`: Override the split stepper's upper bound
    /// - `TIPSPLIT_SLIDER_STEPS`: Override the slider notch count (1-100)
    ///
    /// Unparseable values fall back to defaults; zero bounds are floored to 1.
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(symbol) = std::env::var("TIPSPLIT_CURRENCY") {
            if !symbol.is_empty() {
                config.currency_symbol = symbol;
            }
        }

        if let Ok(max_split_str) = std::env::var("TIPSPLIT_MAX_SPLIT") {
            if let Ok(max_split) = max_split_str.parse::<u32>() {
                config.max_split = max_split.max(1);
            }
        }

        if let Ok(steps_str) = std::env::var("TIPSPLIT_SLIDER_STEPS") {
            if let Ok(steps) = steps_str.parse::<u32>() {
                // More than 100 notches cannot change the integer percent
                // between neighbors, so cap there
                config.slider_steps = steps.clamp(1, 100);
            }
        }

        config
    }

    /// Formats an amount as a currency string with the configured decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_amount(12.34), "$12.34");
    /// ```
    ///
    /// Formatting happens only at the display edge; the stored totals keep
    /// their full precision.
    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{}{}{:.*}",
            if amount < 0.0 { "-" } else { "" },
            self.currency_symbol,
            self.currency_decimals as usize,
            amount.abs()
        )
    }
}
