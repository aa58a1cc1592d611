use std::io;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use taxcalc_cli::{Cli, input, logging, report};
use taxcalc_core::TaxError;

// ─── usage errors ────────────────────────────────────────────────────────────

/// Reports a rejected input the same way clap reports a bad flag and exits
/// with clap's usage-error status.
fn usage_error(error: TaxError) -> ! {
    debug!(?error, "rejecting input");

    let kind = match error {
        TaxError::MissingInput(_) => ErrorKind::MissingRequiredArgument,
        TaxError::InvalidStatus(_) | TaxError::InvalidIncome(_) => ErrorKind::ValueValidation,
    };
    Cli::command().error(kind, error).exit()
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let request =
        input::acquire(&cli, &mut stdin, &mut stdout).unwrap_or_else(|error| usage_error(error));
    let calculation = request
        .calculate()
        .unwrap_or_else(|error| usage_error(error));

    report::write_report(&calculation, cli.format, &mut stdout)?;

    Ok(())
}
