use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TaxError;

/// Taxpayer category selecting which bracket schedule applies.
///
/// The discriminants are the numeric codes accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single = 0,
    MarriedJointly = 1,
    MarriedSeparately = 2,
    HeadOfHousehold = 3,
}

impl FilingStatus {
    /// Every filing status, in code order.
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedJointly,
        Self::MarriedSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Single),
            1 => Some(Self::MarriedJointly),
            2 => Some(Self::MarriedSeparately),
            3 => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedJointly => "MFJ",
            Self::MarriedSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedJointly => "Married Filing Jointly",
            Self::MarriedSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }
}

impl TryFrom<i64> for FilingStatus {
    type Error = TaxError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(TaxError::InvalidStatus(code))
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_round_trip_for_every_status() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn all_is_in_code_order() {
        let codes: Vec<i64> = FilingStatus::ALL.iter().map(FilingStatus::code).collect();

        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn try_from_rejects_codes_outside_range() {
        assert_eq!(FilingStatus::try_from(4), Err(TaxError::InvalidStatus(4)));
        assert_eq!(FilingStatus::try_from(-1), Err(TaxError::InvalidStatus(-1)));
    }

    #[test]
    fn try_from_accepts_head_of_household() {
        assert_eq!(
            FilingStatus::try_from(3),
            Ok(FilingStatus::HeadOfHousehold)
        );
    }

    #[test]
    fn short_codes() {
        assert_eq!(FilingStatus::Single.as_str(), "S");
        assert_eq!(FilingStatus::MarriedJointly.as_str(), "MFJ");
        assert_eq!(FilingStatus::MarriedSeparately.as_str(), "MFS");
        assert_eq!(FilingStatus::HeadOfHousehold.as_str(), "HOH");
    }

    #[test]
    fn display_uses_full_name() {
        assert_eq!(
            FilingStatus::MarriedSeparately.to_string(),
            "Married Filing Separately"
        );
    }
}
