mod filing_status;
mod tax_bracket;
mod tax_calculation;

pub use filing_status::FilingStatus;
pub use tax_bracket::{BracketSchedule, TaxBracket};
pub use tax_calculation::{BandTax, TaxCalculation};
