//! Income parsing and validation.
//!
//! Every amount handed to the calculator passes through [`validate_income`].
//! Text coming from the command line or a prompt goes through
//! [`parse_income`], which additionally rejects non-numeric and non-finite
//! spellings such as `NaN` or `inf`, and numbers too large for a `Decimal`.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;

use crate::TaxError;

/// Spellings of non-finite floats that must never reach the calculator.
const NON_FINITE: [&str; 3] = ["nan", "inf", "infinity"];

/// Largest number of fractional digits a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Rejects negative incomes.
pub fn validate_income(income: Decimal) -> Result<Decimal, TaxError> {
    if income < Decimal::ZERO {
        return Err(TaxError::InvalidIncome(format!(
            "income must be non-negative, got {income}"
        )));
    }
    Ok(income)
}

/// Removes commas used as thousands separators.
///
/// Commas are only allowed in the integer part, between groups of exactly
/// three digits after a leading group of one to three. Returns `None` for
/// any other placement, so `1,2,3` is not read as `123`.
fn strip_thousands_separators(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }

    let unsigned = s.trim_start_matches(['+', '-']);
    let (integer, rest) = match unsigned.find(['.', 'e', 'E']) {
        Some(at) => unsigned.split_at(at),
        None => (unsigned, ""),
    };
    if rest.contains(',') {
        return None;
    }

    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let mut groups = integer.split(',');
    let leading = groups.next()?;
    let grouped = (1..=3).contains(&leading.len())
        && is_digits(leading)
        && groups.all(|group| group.len() == 3 && is_digits(group));

    grouped.then(|| s.replace(',', ""))
}

fn not_a_number(trimmed: &str) -> TaxError {
    TaxError::InvalidIncome(format!("'{trimmed}' is not a number"))
}

/// Parses a finite decimal number without checking its sign.
///
/// Accepts plain decimals (`50000`, `1234.56`), thousands separators
/// (`1,234.56`) and scientific notation (`5e4`). Surrounding whitespace is
/// ignored.
///
/// Numbers too large for a `Decimal` are rejected as out of range. Digits
/// beyond the 28th decimal place are rounded away, so `1e-100` reads as zero.
/// A negative amount that rounds away entirely is rejected as negative.
pub fn parse_amount(input: &str) -> Result<Decimal, TaxError> {
    let trimmed = input.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);

    if NON_FINITE.iter().any(|s| unsigned.eq_ignore_ascii_case(s)) {
        return Err(TaxError::InvalidIncome(format!(
            "income must be a finite number, got '{trimmed}'"
        )));
    }

    let normalized = strip_thousands_separators(trimmed).ok_or_else(|| {
        debug!(input = %input, "misplaced thousands separator");
        not_a_number(trimmed)
    })?;

    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .or_else(|e| {
            debug!(input = %input, "amount does not fit a decimal: {}", e);
            parse_beyond_decimal_range(trimmed, &normalized)
        })
}

/// Handles numeric text that `Decimal` cannot represent exactly.
fn parse_beyond_decimal_range(
    trimmed: &str,
    normalized: &str,
) -> Result<Decimal, TaxError> {
    let Ok(value) = normalized.parse::<f64>() else {
        return Err(not_a_number(trimmed));
    };

    if value.is_infinite() || value.abs() >= 1.0 {
        return Err(TaxError::InvalidIncome(format!(
            "income exceeds the supported range (at most {}), got '{trimmed}'",
            Decimal::MAX
        )));
    }
    if value < 0.0 {
        return Err(TaxError::InvalidIncome(format!(
            "income must be non-negative, got '{trimmed}'"
        )));
    }

    Ok(Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(MAX_SCALE))
}

/// Parses and validates an income supplied as text.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::calculations::parse_income;
///
/// assert_eq!(parse_income(" 50000 ").unwrap(), dec!(50000));
/// assert!(parse_income("-1").is_err());
/// assert!(parse_income("NaN").is_err());
/// ```
pub fn parse_income(input: &str) -> Result<Decimal, TaxError> {
    parse_amount(input).and_then(validate_income)
}
