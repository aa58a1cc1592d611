//! Tax calculation for the 2009 federal rate schedules.
//!
//! [`progressive`] holds the bracket accumulation, [`validation`] the input
//! checks applied before it runs, and [`common`] the rounding used when a
//! result is displayed.

pub mod common;
pub mod progressive;
pub mod validation;

pub use progressive::{TaxCalculator, compute_tax};
pub use validation::{parse_amount, parse_income, validate_income};
