//! Presentation helpers shared by calculation results.
//!
//! Accumulation always runs at full precision; rounding to cents happens
//! only when an amount is shown to the user.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4012.504)), dec!(4012.50));
/// assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
/// assert_eq!(round_half_up(dec!(835)), dec!(835));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars with exactly two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::calculations::common::format_dollars;
///
/// assert_eq!(format_dollars(dec!(835)), "$835.00");
/// assert_eq!(format_dollars(dec!(8687.5)), "$8687.50");
/// ```
pub fn format_dollars(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_keeps_whole_dollars() {
        let result = round_half_up(dec!(6665.0000));

        assert_eq!(result, dec!(6665.00));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_sub_cent_tax() {
        // 0.01 income in the 10% band
        let result = round_half_up(dec!(0.001));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // format_dollars tests
    // =========================================================================

    #[test]
    fn format_dollars_pads_to_two_places() {
        assert_eq!(format_dollars(dec!(0)), "$0.00");
        assert_eq!(format_dollars(dec!(4675)), "$4675.00");
        assert_eq!(format_dollars(dec!(4012.5)), "$4012.50");
    }

    #[test]
    fn format_dollars_rounds_extra_precision() {
        assert_eq!(format_dollars(dec!(1.2345)), "$1.23");
        assert_eq!(format_dollars(dec!(1.2350)), "$1.24");
    }
}
