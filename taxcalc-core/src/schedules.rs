//! 2009 federal income tax rate schedules.
//!
//! One schedule per filing status, each with six marginal bands. The tables
//! are compile-time constants and never change at runtime.
//!
//! | Status               | 10%      | 15%           | 25%            | 28%             | 33%             | 35%       |
//! |----------------------|----------|---------------|----------------|-----------------|-----------------|-----------|
//! | Single               | 0–8350   | 8350–33950    | 33950–82250    | 82250–171550    | 171550–372950   | 372950+   |
//! | Married jointly      | 0–16700  | 16700–67900   | 67900–137050   | 137050–208850   | 208850–372950   | 372950+   |
//! | Married separately   | 0–8350   | 8350–33950    | 33950–68525    | 68525–104425    | 104425–186475   | 186475+   |
//! | Head of household    | 0–11950  | 11950–45500   | 45500–117450   | 117450–190200   | 190200–372950   | 372950+   |

use rust_decimal_macros::dec;

use crate::{BracketSchedule, FilingStatus, TaxBracket};

pub const SINGLE: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(8350))),
    TaxBracket::new(dec!(0.15), dec!(8350), Some(dec!(33950))),
    TaxBracket::new(dec!(0.25), dec!(33950), Some(dec!(82250))),
    TaxBracket::new(dec!(0.28), dec!(82250), Some(dec!(171550))),
    TaxBracket::new(dec!(0.33), dec!(171550), Some(dec!(372950))),
    TaxBracket::new(dec!(0.35), dec!(372950), None),
];

pub const MARRIED_JOINTLY: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(16700))),
    TaxBracket::new(dec!(0.15), dec!(16700), Some(dec!(67900))),
    TaxBracket::new(dec!(0.25), dec!(67900), Some(dec!(137050))),
    TaxBracket::new(dec!(0.28), dec!(137050), Some(dec!(208850))),
    TaxBracket::new(dec!(0.33), dec!(208850), Some(dec!(372950))),
    TaxBracket::new(dec!(0.35), dec!(372950), None),
];

pub const MARRIED_SEPARATELY: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(8350))),
    TaxBracket::new(dec!(0.15), dec!(8350), Some(dec!(33950))),
    TaxBracket::new(dec!(0.25), dec!(33950), Some(dec!(68525))),
    TaxBracket::new(dec!(0.28), dec!(68525), Some(dec!(104425))),
    TaxBracket::new(dec!(0.33), dec!(104425), Some(dec!(186475))),
    TaxBracket::new(dec!(0.35), dec!(186475), None),
];

pub const HEAD_OF_HOUSEHOLD: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(11950))),
    TaxBracket::new(dec!(0.15), dec!(11950), Some(dec!(45500))),
    TaxBracket::new(dec!(0.25), dec!(45500), Some(dec!(117450))),
    TaxBracket::new(dec!(0.28), dec!(117450), Some(dec!(190200))),
    TaxBracket::new(dec!(0.33), dec!(190200), Some(dec!(372950))),
    TaxBracket::new(dec!(0.35), dec!(372950), None),
];

/// Returns the 2009 bracket schedule for `filing_status`.
pub fn schedule_for(filing_status: FilingStatus) -> BracketSchedule {
    let brackets: &'static [TaxBracket] = match filing_status {
        FilingStatus::Single => &SINGLE,
        FilingStatus::MarriedJointly => &MARRIED_JOINTLY,
        FilingStatus::MarriedSeparately => &MARRIED_SEPARATELY,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
    };

    BracketSchedule {
        filing_status,
        brackets,
    }
}
