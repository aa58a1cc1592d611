//! Turns command-line flags and, when needed, interactive answers into a
//! validated [`TaxRequest`].
//!
//! The adapter works over any [`BufRead`]/[`Write`] pair so it can be driven
//! by the console in `main` and by in-memory buffers in tests.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use taxcalc_core::calculations::{parse_amount, validate_income};
use taxcalc_core::{FilingStatus, TaxCalculation, TaxCalculator, TaxError};
use tracing::debug;

use crate::cli::Cli;

pub const STATUS_PROMPT: &str = "Enter filing status (0=Single, 1=Married Jointly, 2=Married Separately, 3=Head of Household): ";
pub const INCOME_PROMPT: &str = "Enter taxable income: ";

/// A filing status and income that have passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRequest {
    pub filing_status: FilingStatus,
    pub income: Decimal,
}

impl TaxRequest {
    pub fn calculate(&self) -> Result<TaxCalculation, TaxError> {
        TaxCalculator::for_status(self.filing_status).calculate(self.income)
    }
}

/// Builds a [`TaxRequest`] from the parsed flags, prompting on `reader` and
/// `writer` for any value the flags did not supply.
///
/// A status given on the command line is validated before anything is
/// prompted for. With `--no-input` nothing is ever read.
pub fn acquire<R, W>(
    cli: &Cli,
    reader: &mut R,
    writer: &mut W,
) -> Result<TaxRequest, TaxError>
where
    R: BufRead,
    W: Write,
{
    let status = cli.status.map(FilingStatus::try_from).transpose()?;

    if (status.is_none() || cli.income.is_none()) && cli.no_input {
        return Err(TaxError::MissingInput(
            "both --status and --income are required when --no-input is used".to_string(),
        ));
    }

    let mut prompt = Prompt { reader, writer };

    let filing_status = match status {
        Some(status) => status,
        None => prompt.read_status()?,
    };
    let income = match cli.income {
        Some(income) => income,
        None => prompt.read_income()?,
    };

    debug!(
        filing_status = filing_status.as_str(),
        %income,
        "acquired tax request"
    );

    Ok(TaxRequest {
        filing_status,
        income: validate_income(income)?,
    })
}

struct Prompt<'a, R, W> {
    reader: &'a mut R,
    writer: &'a mut W,
}

impl<R: BufRead, W: Write> Prompt<'_, R, W> {
    fn read_status(&mut self) -> Result<FilingStatus, TaxError> {
        let line = self.ask(STATUS_PROMPT, "filing status")?;
        let code = line.trim().parse::<i64>().map_err(|_| {
            TaxError::MissingInput(format!(
                "could not read filing status: '{}' is not an integer",
                line.trim()
            ))
        })?;

        FilingStatus::try_from(code)
    }

    fn read_income(&mut self) -> Result<Decimal, TaxError> {
        let line = self.ask(INCOME_PROMPT, "taxable income")?;
        let income = parse_amount(&line).map_err(|err| {
            TaxError::MissingInput(format!("could not read taxable income ({err})"))
        })?;

        validate_income(income)
    }

    /// Writes `prompt` and reads one line. End of input is an error.
    fn ask(
        &mut self,
        prompt: &str,
        what: &str,
    ) -> Result<String, TaxError> {
        write!(self.writer, "{prompt}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| TaxError::MissingInput(format!("could not prompt for {what}: {e}")))?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(TaxError::MissingInput(format!(
                "end of input while reading {what}"
            ))),
            Ok(_) => Ok(line),
            Err(e) => Err(TaxError::MissingInput(format!(
                "could not read {what}: {e}"
            ))),
        }
    }
}
