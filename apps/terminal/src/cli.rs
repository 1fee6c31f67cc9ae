//! # Command-Line Interface
//!
//! Flag parsing and the non-interactive one-shot mode.
//!
//! With `--bill` present the binary computes a single breakdown and prints it
//! (text or `--json`) instead of entering the TUI. The one-shot path runs the
//! exact same validation the interactive form uses, so the two modes cannot
//! disagree about what counts as a valid bill.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use tipsplit_core::calc::SplitTotals;
use tipsplit_core::types::{SplitCount, TipPercent};
use tipsplit_core::validation::{validate_bill_text, validate_split_count, validate_tip_percent};

use crate::state::ConfigState;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "tipsplit",
    version,
    about = "Split a bill, tip included, per person"
)]
pub struct Cli {
    /// Bill total, e.g. 84.20 (omit to open the interactive screen)
    #[arg(long)]
    pub bill: Option<String>,

    /// Number of people splitting the bill
    #[arg(long, default_value_t = 1, requires = "bill")]
    pub split: u32,

    /// Tip percentage, 0-100
    #[arg(long, default_value_t = 0, requires = "bill")]
    pub tip: u32,

    /// Print the breakdown as JSON
    #[arg(long, requires = "bill")]
    pub json: bool,
}

/// One computed breakdown, shaped for machine consumption.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Breakdown {
    bill_total: f64,
    tip_percent: u8,
    split_count: u32,
    tip_amount: f64,
    total_per_person: f64,
}

/// Runs the non-interactive mode: validate flags, compute once, print.
///
/// Validation failures surface as the process's only visible errors; the
/// messages come straight from the `ValidationError` variants.
pub fn run_one_shot(cli: &Cli, config: &ConfigState) -> Result<()> {
    let bill = validate_bill_text(cli.bill.as_deref().unwrap_or(""))?;

    validate_split_count(cli.split, config.max_split)?;
    let split = SplitCount::new(cli.split)?;

    validate_tip_percent(cli.tip)?;
    let tip = TipPercent::new(cli.tip as u8);

    let totals = SplitTotals::compute(bill, split, tip);
    debug!(bill, split = split.get(), tip = %tip, "one-shot breakdown computed");

    if cli.json {
        let breakdown = Breakdown {
            bill_total: bill,
            tip_percent: tip.percent(),
            split_count: split.get(),
            tip_amount: totals.tip_amount,
            total_per_person: totals.total_per_person,
        };
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{:<18}{}", "Bill total", config.format_amount(bill));
        println!(
            "{:<18}{}",
            format!("Tip ({})", tip),
            config.format_amount(totals.tip_amount)
        );
        println!("{:<18}{}", "Split between", split);
        println!(
            "{:<18}{}",
            "Total per person",
            config.format_amount(totals.total_per_person)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_flags() {
        let cli = Cli::parse_from(["tipsplit", "--bill", "84.20", "--split", "4", "--tip", "18"]);
        assert_eq!(cli.bill.as_deref(), Some("84.20"));
        assert_eq!(cli.split, 4);
        assert_eq!(cli.tip, 18);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["tipsplit", "--bill", "50"]);
        assert_eq!(cli.split, 1);
        assert_eq!(cli.tip, 0);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_no_flags_means_interactive() {
        let cli = Cli::parse_from(["tipsplit"]);
        assert!(cli.bill.is_none());
    }

    #[test]
    fn test_split_flag_requires_bill() {
        assert!(Cli::try_parse_from(["tipsplit", "--split", "4"]).is_err());
        assert!(Cli::try_parse_from(["tipsplit", "--json"]).is_err());
    }

    #[test]
    fn test_one_shot_rejects_bad_inputs() {
        let config = ConfigState::default();

        let cli = Cli::parse_from(["tipsplit", "--bill", "lunch"]);
        assert!(run_one_shot(&cli, &config).is_err());

        let cli = Cli::parse_from(["tipsplit", "--bill", "50", "--split", "0"]);
        assert!(run_one_shot(&cli, &config).is_err());

        let cli = Cli::parse_from(["tipsplit", "--bill", "50", "--tip", "150"]);
        assert!(run_one_shot(&cli, &config).is_err());
    }

    #[test]
    fn test_one_shot_accepts_boundaries() {
        let config = ConfigState::default();

        let cli = Cli::parse_from(["tipsplit", "--bill", "0", "--split", "100", "--tip", "100"]);
        assert!(run_one_shot(&cli, &config).is_ok());
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = Breakdown {
            bill_total: 100.0,
            tip_percent: 10,
            split_count: 2,
            tip_amount: 10.0,
            total_per_person: 55.0,
        };
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["billTotal"], 100.0);
        assert_eq!(json["tipPercent"], 10);
        assert_eq!(json["splitCount"], 2);
        assert_eq!(json["tipAmount"], 10.0);
        assert_eq!(json["totalPerPerson"], 55.0);
    }
}
