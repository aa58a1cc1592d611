use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::{FilingStatus, TaxBracket};

/// Contribution of a single bracket to a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTax {
    pub bracket: TaxBracket,

    /// Portion of income falling inside the bracket.
    pub taxable_amount: Decimal,

    /// `taxable_amount * tax_rate`, unrounded.
    pub tax: Decimal,
}

/// Result of applying a bracket schedule to an income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub filing_status: FilingStatus,
    pub income: Decimal,

    /// Every bracket the income entered, in ascending order.
    pub bands: Vec<BandTax>,

    /// Sum of the band taxes at full precision.
    pub total_tax: Decimal,
}

impl TaxCalculation {
    /// Total tax rounded to cents for display.
    pub fn rounded_total(&self) -> Decimal {
        round_half_up(self.total_tax)
    }
}
