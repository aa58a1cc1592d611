//! Progressive marginal tax accumulation over a bracket schedule.
//!
//! Each bracket taxes only the slice of income inside it:
//!
//! ```text
//! tax = Σ (min(income, max_income) - min_income) * tax_rate
//! ```
//!
//! Brackets are scanned in ascending order and the scan stops at the first
//! bracket whose `min_income` the income does not exceed. An income sitting
//! exactly on a boundary is therefore taxed entirely by the bands below it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxcalc_core::{FilingStatus, TaxCalculator, compute_tax};
//!
//! let calculator = TaxCalculator::for_status(FilingStatus::MarriedJointly);
//! let calculation = calculator.calculate(dec!(50000)).unwrap();
//!
//! assert_eq!(calculation.bands.len(), 2);
//! assert_eq!(calculation.total_tax, dec!(6665.00));
//!
//! assert_eq!(compute_tax(0, dec!(8350)).unwrap(), dec!(835.00));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::calculations::validation::validate_income;
use crate::schedules::schedule_for;
use crate::{BandTax, BracketSchedule, FilingStatus, TaxCalculation, TaxError};

/// Applies one bracket schedule to incomes.
///
/// The calculator holds no mutable state; the same instance can be shared
/// and reused for any number of calculations.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    schedule: BracketSchedule,
}

impl TaxCalculator {
    /// Creates a calculator over an arbitrary schedule.
    ///
    /// The schedule's brackets must be ascending and contiguous, starting at
    /// zero and ending with an unbounded band.
    pub fn new(schedule: BracketSchedule) -> Self {
        Self { schedule }
    }

    /// Creates a calculator using the 2009 schedule for `filing_status`.
    pub fn for_status(filing_status: FilingStatus) -> Self {
        Self::new(schedule_for(filing_status))
    }

    pub fn schedule(&self) -> &BracketSchedule {
        &self.schedule
    }

    /// Calculates the tax owed on `income` with a per-bracket breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidIncome`] if `income` is negative.
    pub fn calculate(
        &self,
        income: Decimal,
    ) -> Result<TaxCalculation, TaxError> {
        let income = validate_income(income)?;

        let mut bands = Vec::new();
        let mut total_tax = Decimal::ZERO;

        for bracket in self.schedule.brackets {
            if income <= bracket.min_income {
                break;
            }

            // Never overflows: taxable_amount <= income and tax_rate <= 1.
            let taxable_amount = bracket.taxable_amount(income);
            let tax = taxable_amount * bracket.tax_rate;
            trace!(
                rate = %bracket.tax_rate,
                min_income = %bracket.min_income,
                %taxable_amount,
                %tax,
                "bracket contribution"
            );

            total_tax += tax;
            bands.push(BandTax {
                bracket: *bracket,
                taxable_amount,
                tax,
            });
        }

        debug!(
            filing_status = self.schedule.filing_status.as_str(),
            %income,
            %total_tax,
            bands = bands.len(),
            "calculated tax"
        );

        Ok(TaxCalculation {
            filing_status: self.schedule.filing_status,
            income,
            bands,
            total_tax,
        })
    }

    /// Calculates the total tax owed on `income` at full precision.
    pub fn tax(
        &self,
        income: Decimal,
    ) -> Result<Decimal, TaxError> {
        self.calculate(income)
            .map(|calculation| calculation.total_tax)
    }
}

/// Computes the tax owed for a numeric filing status code and income.
///
/// # Errors
///
/// - [`TaxError::InvalidStatus`] if `status_code` is not 0, 1, 2 or 3.
/// - [`TaxError::InvalidIncome`] if `income` is negative.
///
/// The status is checked first.
pub fn compute_tax(
    status_code: i64,
    income: Decimal,
) -> Result<Decimal, TaxError> {
    let filing_status = FilingStatus::try_from(status_code)?;
    TaxCalculator::for_status(filing_status).tax(income)
}
