use thiserror::Error;

/// Errors raised while validating or calculating a tax request.
///
/// All variants describe bad user input. The calculator either returns a
/// complete amount or one of these, never a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaxError {
    /// The filing status code is not one of 0, 1, 2 or 3.
    #[error("invalid filing status {0}: status must be 0, 1, 2, or 3")]
    InvalidStatus(i64),

    /// The income is negative, non-numeric or non-finite.
    #[error("invalid income: {0}")]
    InvalidIncome(String),

    /// A required value was not supplied or could not be read.
    #[error("missing input: {0}")]
    MissingInput(String),
}
