//! Rendering of a finished calculation to standard output.

use std::io::Write;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;
use taxcalc_core::TaxCalculation;
use taxcalc_core::calculations::common::format_dollars;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A single `Total tax owed: $...` line
    #[default]
    Text,
    /// The full per-bracket breakdown as JSON
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    filing_status: &'static str,
    status_code: i64,
    income: Decimal,
    total_tax: String,
    bands: Vec<JsonBand>,
}

#[derive(Debug, Serialize)]
struct JsonBand {
    rate: Decimal,
    min_income: Decimal,
    max_income: Option<Decimal>,
    taxable_amount: Decimal,
    tax: Decimal,
}

impl From<&TaxCalculation> for JsonReport {
    fn from(calculation: &TaxCalculation) -> Self {
        Self {
            filing_status: calculation.filing_status.name(),
            status_code: calculation.filing_status.code(),
            income: calculation.income,
            total_tax: format!("{:.2}", calculation.rounded_total()),
            bands: calculation
                .bands
                .iter()
                .map(|band| JsonBand {
                    rate: band.bracket.tax_rate,
                    min_income: band.bracket.min_income,
                    max_income: band.bracket.max_income,
                    taxable_amount: band.taxable_amount,
                    tax: band.tax,
                })
                .collect(),
        }
    }
}

/// The one-line summary printed in text mode.
pub fn render_text(calculation: &TaxCalculation) -> String {
    format!("Total tax owed: {}", format_dollars(calculation.total_tax))
}

pub fn write_report<W: Write>(
    calculation: &TaxCalculation,
    format: OutputFormat,
    writer: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", render_text(calculation))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &JsonReport::from(calculation))?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use taxcalc_core::{FilingStatus, TaxCalculator};

    use super::*;

    fn calculation(
        status: FilingStatus,
        income: Decimal,
    ) -> TaxCalculation {
        TaxCalculator::for_status(status).calculate(income).unwrap()
    }

    fn render(
        calculation: &TaxCalculation,
        format: OutputFormat,
    ) -> String {
        let mut out = Vec::new();
        write_report(calculation, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_shows_two_decimal_places() {
        let calc = calculation(FilingStatus::Single, dec!(8350));

        assert_eq!(
            render(&calc, OutputFormat::Text),
            "Total tax owed: $835.00\n"
        );
    }

    #[test]
    fn text_for_zero_income() {
        let calc = calculation(FilingStatus::HeadOfHousehold, dec!(0));

        assert_eq!(render_text(&calc), "Total tax owed: $0.00");
    }

    #[test]
    fn text_rounds_only_at_display() {
        let calc = calculation(FilingStatus::Single, dec!(8350.01));

        assert_eq!(calc.total_tax, dec!(835.0015));
        assert_eq!(render_text(&calc), "Total tax owed: $835.00");
    }

    #[test]
    fn json_includes_breakdown() {
        let calc = calculation(FilingStatus::MarriedJointly, dec!(50000));

        let json: serde_json::Value =
            serde_json::from_str(&render(&calc, OutputFormat::Json)).unwrap();

        assert_eq!(json["filing_status"], "Married Filing Jointly");
        assert_eq!(json["status_code"], 1);
        assert_eq!(json["total_tax"], "6665.00");
        assert_eq!(json["bands"].as_array().unwrap().len(), 2);
        assert_eq!(json["bands"][0]["max_income"], "16700");
    }

    #[test]
    fn json_marks_unbounded_band_with_null() {
        let calc = calculation(FilingStatus::Single, dec!(400000));

        let json: serde_json::Value =
            serde_json::from_str(&render(&calc, OutputFormat::Json)).unwrap();

        assert!(json["bands"][5]["max_income"].is_null());
    }
}
