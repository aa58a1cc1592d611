use clap::Parser;
use rust_decimal::Decimal;
use taxcalc_core::calculations::parse_income;

use crate::report::OutputFormat;

/// Personal income tax calculator (2009).
///
/// Computes total federal income tax owed for a filing status and taxable
/// income using the 2009 rate schedules. Missing values are prompted for on
/// standard input unless `--no-input` is given.
#[derive(Debug, Parser)]
#[command(name = "taxcalc", version, about, long_about = None)]
pub struct Cli {
    /// Filing status (0=Single, 1=Married Jointly, 2=Married Separately, 3=Head of Household)
    #[arg(short, long, allow_negative_numbers = true)]
    pub status: Option<i64>,

    /// Taxable income (non-negative)
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_income)]
    pub income: Option<Decimal>,

    /// Do not prompt for missing values; require both --status and --income
    #[arg(long, default_value_t = false)]
    pub no_input: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
