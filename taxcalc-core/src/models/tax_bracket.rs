use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::FilingStatus;

/// A contiguous income band taxed at a single marginal rate.
///
/// `max_income` of `None` marks the unbounded top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub tax_rate: Decimal,
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
}

impl TaxBracket {
    pub const fn new(
        tax_rate: Decimal,
        min_income: Decimal,
        max_income: Option<Decimal>,
    ) -> Self {
        Self {
            tax_rate,
            min_income,
            max_income,
        }
    }

    /// Returns the slice of `income` that falls inside this band,
    /// `min(income, max_income) - min_income`.
    ///
    /// Only meaningful when `income > min_income`; callers stop scanning
    /// before reaching a band the income does not enter.
    pub fn taxable_amount(
        &self,
        income: Decimal,
    ) -> Decimal {
        let ceiling = match self.max_income {
            Some(max_income) => income.min(max_income),
            None => income,
        };
        ceiling - self.min_income
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }
}

/// The ordered brackets that apply to one filing status.
///
/// Brackets are ascending and contiguous: each band's `max_income` equals
/// the next band's `min_income`, the first band starts at zero and the last
/// band is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSchedule {
    pub filing_status: FilingStatus,
    pub brackets: &'static [TaxBracket],
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // taxable_amount tests
    // =========================================================================

    #[test]
    fn taxable_amount_caps_at_max_income() {
        let bracket = TaxBracket::new(dec!(0.15), dec!(8350), Some(dec!(33950)));

        assert_eq!(bracket.taxable_amount(dec!(50000)), dec!(25600));
    }

    #[test]
    fn taxable_amount_takes_partial_band() {
        let bracket = TaxBracket::new(dec!(0.15), dec!(8350), Some(dec!(33950)));

        assert_eq!(bracket.taxable_amount(dec!(10000)), dec!(1650));
    }

    #[test]
    fn taxable_amount_is_zero_at_min_income() {
        let bracket = TaxBracket::new(dec!(0.15), dec!(8350), Some(dec!(33950)));

        assert_eq!(bracket.taxable_amount(dec!(8350)), dec!(0));
    }

    #[test]
    fn taxable_amount_unbounded_takes_remainder() {
        let bracket = TaxBracket::new(dec!(0.35), dec!(372950), None);

        assert_eq!(bracket.taxable_amount(dec!(1000000)), dec!(627050));
        assert!(bracket.is_unbounded());
    }
}
